/*!
 * Minimal DOCX export for translated documents.
 *
 * The conversion is deliberately simple: tags are stripped, blank lines
 * delimit paragraphs, and the result is packaged as the smallest OOXML
 * archive a word processor will accept. Formatting preservation is out of
 * scope for this service.
 */

use std::io::Write;

use once_cell::sync::Lazy;
use regex::Regex;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::errors::ConversionError;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static BLANK_RUN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("valid blank-run pattern"));

/// Strip HTML down to plain text.
///
/// Tags become line breaks, runs of blank lines collapse to one paragraph
/// break, and surrounding whitespace is trimmed.
pub fn html_to_plain_text(html: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(html, "\n");
    let collapsed = BLANK_RUN_PATTERN.replace_all(&stripped, "\n\n");
    collapsed.trim().to_string()
}

/// Split plain text into paragraphs on blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n").collect()
}

/// Escape text for inclusion in document XML.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the word/document.xml body, one paragraph per text block.
fn render_document_xml(paragraphs: &[&str]) -> String {
    let mut body = String::new();
    for paragraph in paragraphs {
        body.push_str(&format!(
            "<w:p><w:r><w:rPr><w:sz w:val=\"24\"/></w:rPr><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
            escape_xml(paragraph)
        ));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{}</w:body></w:document>",
        body
    )
}

const CONTENT_TYPES_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
    <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
    <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
    <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
    <Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>\
    </Types>";

const RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
    <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
    <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"word/document.xml\"/>\
    </Relationships>";

/// Convert translated HTML into a DOCX byte buffer.
pub fn html_to_docx(html: &str) -> Result<Vec<u8>, ConversionError> {
    if html.trim().is_empty() {
        return Err(ConversionError::MissingHtml);
    }

    let plain = html_to_plain_text(html);
    let paragraphs = split_paragraphs(&plain);
    let document_xml = render_document_xml(&paragraphs);

    let mut buffer = Vec::new();
    {
        let mut archive = ZipWriter::new(std::io::Cursor::new(&mut buffer));
        let options = FileOptions::default();

        for (name, content) in [
            ("[Content_Types].xml", CONTENT_TYPES_XML),
            ("_rels/.rels", RELS_XML),
            ("word/document.xml", document_xml.as_str()),
        ] {
            archive
                .start_file(name, options)
                .map_err(|e| ConversionError::Packaging(e.to_string()))?;
            archive
                .write_all(content.as_bytes())
                .map_err(|e| ConversionError::Packaging(e.to_string()))?;
        }

        archive
            .finish()
            .map_err(|e| ConversionError::Packaging(e.to_string()))?;
    }

    Ok(buffer)
}
