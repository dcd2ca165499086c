//! Plain-text extraction from uploaded documents

use aetheria_core::Error;
use lopdf::Document;
use tracing::debug;

/// Turns a binary document into the text embedded in a prompt
pub trait DocumentExtractor: Send + Sync {
    /// Concatenated text of every page, in page order
    fn extract(&self, document: &[u8]) -> Result<String, Error>;
}

/// PDF extraction backed by `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl DocumentExtractor for PdfExtractor {
    fn extract(&self, document: &[u8]) -> Result<String, Error> {
        let pdf = Document::load_mem(document)
            .map_err(|e| Error::Document(format!("Failed to parse PDF: {}", e)))?;

        // BTreeMap keyed by page number, so iteration is page order.
        let pages = pdf.get_pages();
        let mut text = String::new();
        for &page_number in pages.keys() {
            let page_text = pdf.extract_text(&[page_number]).map_err(|e| {
                Error::Document(format!("Failed to extract page {}: {}", page_number, e))
            })?;
            text.push_str(&page_text);
        }

        debug!(pages = pages.len(), chars = text.len(), "extracted document text");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    fn pdf_with_pages(pages_text: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages_text {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_extracts_pages_in_order() {
        let bytes = pdf_with_pages(&["Senior Rust Engineer", "References available"]);
        let text = PdfExtractor.extract(&bytes).unwrap();

        let first = text.find("Senior Rust Engineer").unwrap();
        let second = text.find("References available").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let error = PdfExtractor.extract(b"definitely not a pdf").unwrap_err();
        assert!(matches!(error, Error::Document(_)));
    }

    #[test]
    fn test_empty_payload_is_an_error() {
        assert!(PdfExtractor.extract(&[]).is_err());
    }
}
