//! JSON block exports produced by external document extractors.

use super::{BlockReader, ExtractedDocument, cap_blocks};
use crate::block::TextBlock;
use crate::error::Result;
use crate::title::joined_text;
use serde::Deserialize;

/// One extracted paragraph or table cell.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockRecord {
    pub text: String,
    #[serde(default, alias = "fontSize")]
    pub font_size: Option<f64>,
    #[serde(default, alias = "isCentered")]
    pub centered: Option<bool>,
}

/// Either a bare list of records or a document object with its full text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BlockExport {
    Blocks(Vec<BlockRecord>),
    Document {
        blocks: Vec<BlockRecord>,
        #[serde(default, alias = "fullText")]
        full_text: Option<String>,
    },
}

/// Reads `.json` block exports.
///
/// Accepts `[{"text": ..., "font_size": ..., "centered": ...}, ...]` or
/// `{"blocks": [...], "full_text": "..."}`. Without `full_text`, the texts of
/// all records are joined by newlines.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBlockReader;

impl BlockReader for JsonBlockReader {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn read_str(&self, content: &str, limit: Option<usize>) -> Result<ExtractedDocument> {
        let (records, full_text) = match serde_json::from_str::<BlockExport>(content)? {
            BlockExport::Blocks(blocks) => (blocks, None),
            BlockExport::Document { blocks, full_text } => (blocks, full_text),
        };

        let all: Vec<TextBlock> = records
            .iter()
            .filter_map(|r| TextBlock::new(&r.text, r.font_size, r.centered))
            .collect();
        let full_text = full_text.unwrap_or_else(|| joined_text(&all));

        Ok(ExtractedDocument {
            blocks: cap_blocks(all.into_iter(), limit),
            full_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_reads_block_list() {
        let json = r#"[
            {"text": "  HELLO WORLD ", "font_size": 20, "centered": true},
            {"text": "notes", "fontSize": 10, "isCentered": false},
            {"text": "   "}
        ]"#;
        let doc = JsonBlockReader.read_str(json, None).unwrap();

        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].text(), "HELLO WORLD");
        assert_eq!(doc.blocks[0].font_size(), 20.0);
        assert!(doc.blocks[0].is_centered());
        assert!(!doc.blocks[1].is_centered());
        assert_eq!(doc.full_text, "HELLO WORLD\nnotes");
    }

    #[test]
    fn test_reads_document_object() {
        let json = r#"{"blocks": [{"text": "Minutes"}], "full_text": "Minutes\nheld 2022"}"#;
        let doc = JsonBlockReader.read_str(json, Some(5)).unwrap();

        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.blocks[0].font_size(), 0.0);
        assert_eq!(doc.full_text, "Minutes\nheld 2022");
    }

    #[test]
    fn test_limit_keeps_full_text_of_all_blocks() {
        let json = r#"[{"text": "a"}, {"text": "b"}, {"text": "c 2027"}]"#;
        let doc = JsonBlockReader.read_str(json, Some(1)).unwrap();
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.full_text, "a\nb\nc 2027");
    }

    #[test]
    fn test_malformed_export() {
        let err = JsonBlockReader.read_str("{\"text\": 3}", None).unwrap_err();
        assert!(matches!(err, Error::BlockFormat(_)));
    }
}
