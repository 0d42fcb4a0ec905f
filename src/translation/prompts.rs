/*!
 * Prompt templates for document translation and post-editing.
 *
 * Both templates demand output-only responses: the model must emit the
 * translation (or the improved translation) and nothing else.
 */

use std::collections::BTreeMap;

/// System prompt template parameterized by domain and language pair.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The system prompt for the initial translation pass.
    pub const TRANSLATOR: &'static str = "\
You are a professional translator specializing in {domain} content.
Translate the following text from {source_language} to {target_language}.
Maintain the original formatting including paragraphs, bullet points, and line breaks.
Ensure terminology is appropriate for {domain} content.
Only output the translation with no explanations or notes.";

    /// The system prompt for the post-editing pass.
    pub const POST_EDITOR: &'static str = "\
You are a professional translator specializing in {domain} content.
You are tasked with reviewing and improving a machine translation from {source_language} to {target_language}.
Focus on improving fluency, accuracy, and stylistic appropriateness for {domain} content.
Correct any translation errors, improve natural language flow, and ensure terminology consistency.
Do not add new information or significantly alter the meaning.
Only output the improved translation with no explanations or comments.";

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the template for the given mode.
    pub fn for_mode(is_post_edit: bool) -> Self {
        if is_post_edit {
            Self::new(Self::POST_EDITOR)
        } else {
            Self::new(Self::TRANSLATOR)
        }
    }

    /// Render the template with the given variables.
    pub fn render(&self, domain: &str, source_language: &str, target_language: &str) -> String {
        self.template
            .replace("{domain}", domain)
            .replace("{source_language}", source_language)
            .replace("{target_language}", target_language)
    }
}

/// Build the system prompt for a translation or post-editing pass.
pub fn build_system_prompt(
    domain: &str,
    source_language: &str,
    target_language: &str,
    is_post_edit: bool,
) -> String {
    PromptTemplate::for_mode(is_post_edit).render(domain, source_language, target_language)
}

/// Format a glossary for inclusion ahead of the user text.
///
/// An empty glossary yields an empty string, meaning the glossary section
/// is omitted from the final prompt entirely. Otherwise the result is an
/// instructional header plus one line per term.
pub fn format_glossary(glossary: &BTreeMap<String, String>) -> String {
    if glossary.is_empty() {
        return String::new();
    }

    let mut formatted = String::from("Use these specific translations for key terms:\n");
    for (term, translation) in glossary {
        formatted.push_str(&format!("- \"{}\" → \"{}\"\n", term, translation));
    }

    formatted
}

/// Prepend the formatted glossary to the user text, separated by a blank
/// line, omitting the prefix when the glossary is empty.
pub fn compose_user_prompt(glossary_text: &str, text: &str) -> String {
    if glossary_text.is_empty() {
        text.to_string()
    } else {
        format!("{}\n\n{}", glossary_text, text)
    }
}
