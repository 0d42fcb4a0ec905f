/*!
 * Tests for prompt construction and glossary formatting
 */

use std::collections::BTreeMap;

use babelgate::translation::prompts::{
    build_system_prompt, compose_user_prompt, format_glossary,
};
use babelgate::translation::tokens::estimate_token_count;

#[test]
fn test_translationPrompt_shouldDemandOutputOnly() {
    let prompt = build_system_prompt("technical", "en", "ja", false);

    assert!(prompt.contains("from en to ja"));
    assert!(prompt.contains("technical content"));
    assert!(prompt.contains("Maintain the original formatting"));
    assert!(prompt.contains("Only output the translation"));
}

#[test]
fn test_postEditPrompt_shouldForbidAddedContent() {
    let prompt = build_system_prompt("marketing", "fr", "en", true);

    assert!(prompt.contains("reviewing and improving"));
    assert!(prompt.contains("from fr to en"));
    assert!(prompt.contains("Do not add new information"));
    assert!(prompt.contains("Only output the improved translation"));
}

#[test]
fn test_formatGlossary_emptyMapping_shouldOmitSection() {
    assert_eq!(format_glossary(&BTreeMap::new()), "");
    // And composing with it leaves the text untouched
    assert_eq!(compose_user_prompt("", "Hello"), "Hello");
}

#[test]
fn test_formatGlossary_shouldEmitHeaderAndOneLinePerTerm() {
    let glossary = BTreeMap::from([
        ("cat".to_string(), "chat".to_string()),
        ("dog".to_string(), "chien".to_string()),
    ]);
    let formatted = format_glossary(&glossary);

    let mut lines = formatted.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Use these specific translations for key terms:"
    );
    assert_eq!(lines.next().unwrap(), "- \"cat\" → \"chat\"");
    assert_eq!(lines.next().unwrap(), "- \"dog\" → \"chien\"");
    assert_eq!(lines.next(), None);
}

#[test]
fn test_composeUserPrompt_shouldPrefixGlossaryWithBlankLine() {
    let glossary = BTreeMap::from([("cat".to_string(), "chat".to_string())]);
    let glossary_text = format_glossary(&glossary);
    let prompt = compose_user_prompt(&glossary_text, "The cat sleeps.");

    assert!(prompt.starts_with("Use these specific translations"));
    assert!(prompt.ends_with("\n\nThe cat sleeps."));
}

#[test]
fn test_estimateTokenCount_shouldCeilQuarterLength() {
    assert_eq!(estimate_token_count(""), 0);
    assert_eq!(estimate_token_count("abcd"), 1);
    assert_eq!(estimate_token_count("abcdefgh"), 2);
    assert_eq!(estimate_token_count("Hello"), 2);
}
