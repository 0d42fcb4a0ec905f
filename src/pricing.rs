/*!
 * Static price table and cost estimation.
 *
 * Prices are USD per 1000 tokens. The table is read-only, process-wide
 * state with no lifecycle beyond first use. Estimates are fed by the
 * character-count token heuristic and must never be treated as billing
 * figures.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::catalog::ProviderKind;

/// Per-1K-token unit prices for one model
#[derive(Debug, Clone, Copy)]
pub struct ModelPrice {
    /// USD per 1000 input tokens
    pub input: f64,
    /// USD per 1000 output tokens
    pub output: f64,
}

/// Price table: provider -> model id -> unit prices.
///
/// Known coverage gap, preserved on purpose: the table keys the Gemini 1.5
/// "latest" models under their `-latest` ids, while `normalize_for_pricing`
/// strips that suffix before lookup. Those models therefore estimate at
/// zero. Do not re-key the table without product input; clients rely on the
/// estimate being conservative-or-zero rather than guessed.
static PRICE_TABLE: Lazy<HashMap<ProviderKind, HashMap<&'static str, ModelPrice>>> =
    Lazy::new(|| {
        let mut table = HashMap::new();

        table.insert(
            ProviderKind::Anthropic,
            HashMap::from([
                ("claude-3-5-sonnet", ModelPrice { input: 0.003, output: 0.015 }),
                ("claude-3-opus", ModelPrice { input: 0.015, output: 0.075 }),
                ("claude-3-sonnet", ModelPrice { input: 0.003, output: 0.015 }),
                ("claude-3-haiku", ModelPrice { input: 0.000_25, output: 0.001_25 }),
            ]),
        );

        table.insert(
            ProviderKind::OpenAI,
            HashMap::from([
                ("gpt-4-turbo", ModelPrice { input: 0.01, output: 0.03 }),
                ("gpt-4", ModelPrice { input: 0.03, output: 0.06 }),
                ("gpt-3.5-turbo", ModelPrice { input: 0.001, output: 0.002 }),
            ]),
        );

        table.insert(
            ProviderKind::Google,
            HashMap::from([
                ("gemini-2.0-pro", ModelPrice { input: 0.0075, output: 0.0075 }),
                ("gemini-2.0-flash", ModelPrice { input: 0.0035, output: 0.0035 }),
                ("gemini-2.0-flash-lite", ModelPrice { input: 0.001, output: 0.001 }),
                ("gemini-1.5-pro-latest", ModelPrice { input: 0.0035, output: 0.0035 }),
                ("gemini-1.5-flash-latest", ModelPrice { input: 0.0007, output: 0.0007 }),
                ("gemini-1.5-pro-001", ModelPrice { input: 0.0035, output: 0.0035 }),
                ("gemini-1.5-flash-001", ModelPrice { input: 0.0007, output: 0.0007 }),
            ]),
        );

        table
    });

/// Normalize a model id for price lookup.
///
/// Only the `-latest` suffix is stripped here. Must stay behaviorally
/// identical to the `latest` branch of `catalog::format_model_name` so a
/// model resolves to the same canonical key for request formatting and
/// pricing.
fn normalize_for_pricing(model_id: &str) -> String {
    if model_id.contains("latest") {
        model_id.replace("-latest", "")
    } else {
        model_id.to_string()
    }
}

/// Look up unit prices for one model, if the table covers it.
pub fn price_for(model_id: &str) -> Option<ModelPrice> {
    let provider = ProviderKind::from_model_id(model_id);
    let normalized = normalize_for_pricing(model_id);
    PRICE_TABLE
        .get(&provider)
        .and_then(|models| models.get(normalized.as_str()))
        .copied()
}

/// Cost contribution of a single pass, zero when the model is unpriced.
fn pass_cost(model_id: &str, input_tokens: usize, output_tokens: usize) -> f64 {
    match price_for(model_id) {
        Some(price) => {
            (input_tokens as f64 / 1000.0) * price.input
                + (output_tokens as f64 / 1000.0) * price.output
        }
        None => 0.0,
    }
}

/// Estimate the dollar cost of a translation, optionally including a
/// post-editing pass.
///
/// Never fails: models absent from the price table contribute zero to the
/// total. The result is rounded to 4 decimal places.
pub fn estimate_cost(
    model: &str,
    input_tokens: usize,
    output_tokens: usize,
    post_edit: Option<(&str, usize, usize)>,
) -> f64 {
    let mut total = pass_cost(model, input_tokens, output_tokens);

    if let Some((pe_model, pe_input, pe_output)) = post_edit {
        total += pass_cost(pe_model, pe_input, pe_output);
    }

    (total * 10_000.0).round() / 10_000.0
}
