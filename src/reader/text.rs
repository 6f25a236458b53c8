//! Plain-text reader: one block per non-blank line.

use super::{BlockReader, ExtractedDocument, cap_blocks};
use crate::block::TextBlock;
use crate::error::Result;

/// Reads `.txt` and `.md` files.
///
/// Font size is unknown for every line. A line counts as centred when it is
/// indented and its left margin matches the gap to the widest line of the
/// file within one column.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextReader;

impl BlockReader for PlainTextReader {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "md"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn read_str(&self, content: &str, limit: Option<usize>) -> Result<ExtractedDocument> {
        let width = content
            .lines()
            .map(|line| line.trim_end().chars().count())
            .max()
            .unwrap_or(0);

        let blocks = content.lines().filter_map(|line| {
            let centered = is_centered_line(line, width);
            TextBlock::new(line, None, Some(centered))
        });

        Ok(ExtractedDocument {
            blocks: cap_blocks(blocks, limit),
            full_text: content.to_string(),
        })
    }
}

fn is_centered_line(line: &str, width: usize) -> bool {
    let line = line.trim_end();
    let content_len = line.trim_start().chars().count();
    let left = line.chars().count() - content_len;
    if left == 0 || content_len == 0 {
        return false;
    }
    let right = width.saturating_sub(left + content_len);
    left.abs_diff(right) <= 1
}
