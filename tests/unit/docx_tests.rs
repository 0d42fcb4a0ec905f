/*!
 * Tests for the DOCX export path
 */

use babelgate::docx::{html_to_docx, html_to_plain_text, split_paragraphs};
use babelgate::errors::ConversionError;

#[test]
fn test_htmlToPlainText_shouldDropAllTags() {
    let html = "<div><p>Hello <b>world</b></p><ul><li>one</li><li>two</li></ul></div>";
    let plain = html_to_plain_text(html);

    assert!(!plain.contains('<'));
    assert!(plain.contains("Hello"));
    assert!(plain.contains("world"));
    assert!(plain.contains("one"));
}

#[test]
fn test_htmlToPlainText_shouldCollapseBlankRunsToParagraphBreaks() {
    let plain = html_to_plain_text("a\n\n\n\nb");
    assert_eq!(plain, "a\n\nb");
}

#[test]
fn test_splitParagraphs_singleBlock_shouldYieldOneParagraph() {
    assert_eq!(split_paragraphs("just one line"), vec!["just one line"]);
}

#[test]
fn test_htmlToDocx_shouldStartWithZipMagic() {
    let bytes = html_to_docx("<p>First</p><p>Second</p>").unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_htmlToDocx_shouldContainDocumentEntry() {
    let bytes = html_to_docx("<p>Content &amp; more</p>").unwrap();
    // Entry names are stored uncompressed in the local file headers
    let haystack = bytes.as_slice();
    let needle = b"word/document.xml";
    assert!(haystack.windows(needle.len()).any(|w| w == needle));
}

#[test]
fn test_htmlToDocx_emptyHtml_shouldReturnMissingHtml() {
    assert!(matches!(html_to_docx(""), Err(ConversionError::MissingHtml)));
    assert!(matches!(html_to_docx("  \n "), Err(ConversionError::MissingHtml)));
}
