/*!
 * Route handlers for the translation gateway API.
 *
 * Error mapping: validation failures (missing fields, missing credentials,
 * unsupported providers) are client errors (400); anything that failed
 * downstream is a 500 with a short generic message. Provider payloads are
 * never passed through.
 */

use actix_web::{web, HttpResponse};
use log::error;
use serde::{Deserialize, Serialize};

use crate::catalog::{all_models, LANGUAGE_PAIRS, TRANSLATION_DOMAINS};
use crate::docx::html_to_docx;
use crate::errors::ConversionError;
use crate::server::AppState;
use crate::translation::orchestrator::{Orchestrator, TranslationRequest};

/// Error body returned for all failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short human-readable message
    pub error: String,
}

impl ErrorBody {
    fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

/// DOCX conversion request payload
#[derive(Debug, Deserialize)]
pub struct DocxRequest {
    /// Translated HTML to package
    #[serde(default)]
    pub html: String,

    /// Download filename, without extension
    #[serde(default)]
    pub filename: Option<String>,
}

/// Handle `POST /translate`.
pub async fn translate(
    state: web::Data<AppState>,
    payload: web::Json<TranslationRequest>,
) -> HttpResponse {
    let orchestrator = Orchestrator::new(state.backend.clone());

    match orchestrator.run(&payload).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) if e.is_validation() => {
            HttpResponse::BadRequest().json(ErrorBody::new(e.to_string()))
        }
        Err(e) => {
            error!("Translation request failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorBody::new(e.to_string()))
        }
    }
}

/// Handle `POST /docx`.
pub async fn docx(payload: web::Json<DocxRequest>) -> HttpResponse {
    let filename = payload
        .filename
        .clone()
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| "translated-document".to_string());

    match html_to_docx(&payload.html) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            )
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}.docx\"", filename),
            ))
            .body(bytes),
        Err(ConversionError::MissingHtml) => {
            HttpResponse::BadRequest().json(ErrorBody::new("Missing required fields"))
        }
        Err(e) => {
            error!("DOCX conversion failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorBody::new("Failed to convert to DOCX"))
        }
    }
}

/// Catalog payload served to the client shell
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogResponse<'a> {
    models: &'a [crate::catalog::ModelDescriptor],
    domains: &'a [crate::catalog::TranslationDomain],
    language_pairs: &'a [crate::catalog::LanguagePair],
    defaults: CatalogDefaults<'a>,
}

/// Client-shell defaults from the service configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDefaults<'a> {
    default_model: &'a str,
    default_domain: &'a str,
    default_language_pair: &'a str,
    use_post_editing_default: bool,
}

/// Handle `GET /models`.
pub async fn models(state: web::Data<AppState>) -> HttpResponse {
    let settings = &state.config.translation;

    HttpResponse::Ok().json(CatalogResponse {
        models: all_models(),
        domains: TRANSLATION_DOMAINS.as_slice(),
        language_pairs: LANGUAGE_PAIRS.as_slice(),
        defaults: CatalogDefaults {
            default_model: &settings.default_model,
            default_domain: &settings.default_domain,
            default_language_pair: &settings.default_language_pair,
            use_post_editing_default: settings.use_post_editing_default,
        },
    })
}

/// Handle `GET /health`.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
