//! Title synthesis - turns scored text blocks into a proposed file name.

pub mod sanitize;
pub mod score;
pub mod year;

use crate::block::TextBlock;
use crate::error::{Error, Result};
use crate::keywords::KeywordSet;
use serde::Serialize;

pub use sanitize::sanitize_fragment;
pub use score::{max_font_size, score_blocks};
pub use year::extract_year;

/// Suffix marking a file as already renamed by this tool
pub const MARKER: &str = " ★";

/// Default cap on the name before the marker, in characters
pub const DEFAULT_LENGTH_LIMIT: usize = 200;

/// Number of top-ranked blocks that make up a name
pub const TOP_BLOCKS: usize = 3;

/// Separator between the fragments of a name
const SEPARATOR: &str = " - ";

/// Result of a successful synthesis
#[derive(Debug, Clone, Serialize)]
pub struct TitleCandidate {
    /// Final name, without extension, marker included
    pub name: String,
    /// Year appended after the primary fragment
    pub year: Option<String>,
    /// Sanitized top fragments, padded with empty strings
    pub fragments: Vec<String>,
    /// All blocks, scored and in rank order
    pub ranked: Vec<TextBlock>,
}

/// Derive a file name (without extension) from a document's blocks.
///
/// Year detection runs over the block texts joined by newlines.
pub fn synthesize_filename(
    blocks: Vec<TextBlock>,
    match_keywords: &KeywordSet,
    ignore_keywords: &KeywordSet,
    length_limit: usize,
) -> Result<String> {
    let full_text = joined_text(&blocks);
    synthesize(blocks, &full_text, match_keywords, ignore_keywords, length_limit)
        .map(|candidate| candidate.name)
}

/// Score, rank and assemble a name, searching `full_text` for the year.
pub fn synthesize(
    mut blocks: Vec<TextBlock>,
    full_text: &str,
    match_keywords: &KeywordSet,
    ignore_keywords: &KeywordSet,
    length_limit: usize,
) -> Result<TitleCandidate> {
    validate_length_limit(length_limit)?;

    score_blocks(&mut blocks, match_keywords, ignore_keywords)?;
    rank_blocks(&mut blocks);

    for (rank, block) in blocks.iter().enumerate() {
        tracing::debug!(
            rank,
            score = block.score(),
            font_size = block.font_size(),
            uppercase = block.is_uppercase(),
            centered = block.is_centered(),
            text = block.text(),
            "scored block"
        );
    }

    let mut fragments: Vec<String> = blocks
        .iter()
        .take(TOP_BLOCKS)
        .map(|b| sanitize_fragment(b.text()))
        .collect();
    fragments.resize(TOP_BLOCKS, String::new());

    if fragments.iter().all(String::is_empty) {
        return Err(Error::NoTitleFound);
    }

    let year = extract_year(full_text);
    let assembled = assemble(&fragments[0], year.as_deref(), &fragments[1..]);
    let name = format!("{}{}", truncate_chars(&assembled, length_limit), MARKER);

    Ok(TitleCandidate {
        name,
        year,
        fragments,
        ranked: blocks,
    })
}

/// Stable sort by score, highest first; equal scores keep document order.
pub fn rank_blocks(blocks: &mut [TextBlock]) {
    blocks.sort_by(|a, b| b.score().total_cmp(&a.score()));
}

/// Whether a file name already carries the marker.
pub fn has_marker(file_name: &str) -> bool {
    file_name.contains(MARKER.trim())
}

/// Reject length limits that cannot hold any text.
pub fn validate_length_limit(length_limit: usize) -> Result<()> {
    if length_limit == 0 {
        return Err(Error::InvalidConfig(
            "length limit must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Block texts joined by newlines.
pub fn joined_text(blocks: &[TextBlock]) -> String {
    blocks
        .iter()
        .map(TextBlock::text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `primary [year] - second - third`, empty fragments left out.
fn assemble(primary: &str, year: Option<&str>, secondary: &[String]) -> String {
    let head = match year {
        Some(year) => format!("{} {}", primary, year).trim().to_string(),
        None => primary.to_string(),
    };

    std::iter::once(head.as_str())
        .chain(secondary.iter().map(String::as_str))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(text: &str, size: Option<f64>, centered: bool) -> TextBlock {
        TextBlock::new(text, size, Some(centered)).unwrap()
    }

    fn no_keywords() -> KeywordSet {
        KeywordSet::default()
    }

    #[test]
    fn test_top_block_leads_the_name() {
        let blocks = vec![
            block("HELLO WORLD", Some(20.0), true),
            block("notes", Some(10.0), false),
        ];
        let name = synthesize_filename(blocks, &KeywordSet::new(["hello"]), &no_keywords(), 200)
            .unwrap();
        assert_eq!(name, "HELLO WORLD - notes ★");
    }

    #[test]
    fn test_ties_keep_document_order() {
        let blocks = vec![
            block("first", Some(10.0), false),
            block("second", Some(10.0), false),
            block("third", Some(10.0), false),
            block("fourth", Some(10.0), false),
        ];
        let name = synthesize_filename(blocks, &no_keywords(), &no_keywords(), 200).unwrap();
        assert_eq!(name, "first - second - third ★");
    }

    #[test]
    fn test_rank_blocks_is_stable() {
        let mut blocks = vec![
            block("low", Some(8.0), false),
            block("HIGH", Some(8.0), true),
            block("also low", Some(8.0), false),
        ];
        score_blocks(&mut blocks, &no_keywords(), &no_keywords()).unwrap();
        rank_blocks(&mut blocks);
        let order: Vec<&str> = blocks.iter().map(TextBlock::text).collect();
        assert_eq!(order, vec!["HIGH", "low", "also low"]);
    }

    #[test]
    fn test_year_follows_primary_fragment() {
        let blocks = vec![
            block("ANNUAL REPORT", Some(18.0), true),
            block("Annual Report 2023 Summary", Some(11.0), false),
        ];
        let name = synthesize_filename(blocks, &no_keywords(), &no_keywords(), 200).unwrap();
        assert_eq!(name, "ANNUAL REPORT 2023 - Annual Report 2023 Summary ★");
    }

    #[test]
    fn test_year_searched_in_supplied_full_text() {
        let blocks = vec![block("MEMO", None, true)];
        let candidate = synthesize(
            blocks,
            "MEMO\nfooter printed 2031",
            &no_keywords(),
            &no_keywords(),
            200,
        )
        .unwrap();
        assert_eq!(candidate.year.as_deref(), Some("2031"));
        assert_eq!(candidate.name, "MEMO 2031 ★");
    }

    #[test]
    fn test_single_block_has_no_separator() {
        let name =
            synthesize_filename(vec![block("Only", None, false)], &no_keywords(), &no_keywords(), 200)
                .unwrap();
        assert_eq!(name, "Only ★");
    }

    #[test]
    fn test_empty_secondary_fragments_are_skipped() {
        let blocks = vec![
            block("TITLE", Some(12.0), true),
            block("???", Some(10.0), false),
            block("body", Some(10.0), false),
        ];
        let name = synthesize_filename(blocks, &no_keywords(), &no_keywords(), 200).unwrap();
        // "???" is uppercase by the no-lowercase rule and outranks "body"
        assert_eq!(name, "TITLE - body ★");
    }

    #[test]
    fn test_all_fragments_empty_is_no_title() {
        let blocks = vec![block("***", None, true), block("<>|", None, true)];
        let err = synthesize_filename(blocks, &no_keywords(), &no_keywords(), 200).unwrap_err();
        assert!(matches!(err, Error::NoTitleFound));
        assert!(err.is_skip());
    }

    #[test]
    fn test_empty_primary_falls_back_to_secondaries() {
        let blocks = vec![
            block("***", Some(20.0), true),
            block("Contract", Some(10.0), false),
        ];
        let name = synthesize_filename(blocks, &no_keywords(), &no_keywords(), 200).unwrap();
        assert_eq!(name, "Contract ★");
    }

    #[test]
    fn test_empty_input() {
        let err = synthesize_filename(Vec::new(), &no_keywords(), &no_keywords(), 200).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_length_limit_applies_before_marker() {
        let long = "A".repeat(300);
        let name =
            synthesize_filename(vec![block(&long, None, true)], &no_keywords(), &no_keywords(), 200)
                .unwrap();
        assert_eq!(name.chars().count(), 200 + MARKER.chars().count());
        assert!(name.ends_with(MARKER));
    }

    #[test]
    fn test_length_limit_counts_characters() {
        let blocks = vec![block("Đề án phát triển", None, true)];
        let name = synthesize_filename(blocks, &no_keywords(), &no_keywords(), 5).unwrap();
        assert_eq!(name, "Đề án ★");
    }

    #[test]
    fn test_zero_length_limit_fails_fast() {
        let err = synthesize_filename(Vec::new(), &no_keywords(), &no_keywords(), 0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_output_has_no_forbidden_chars() {
        let blocks = vec![
            block("Q1: \"sales\" <final>", Some(14.0), true),
            block("a/b\\c|d", Some(10.0), false),
            block("tab\there?", Some(10.0), false),
        ];
        let name = synthesize_filename(blocks, &no_keywords(), &no_keywords(), 200).unwrap();
        assert!(!name.chars().any(sanitize::is_forbidden));
    }

    #[test]
    fn test_has_marker() {
        assert!(has_marker("Report ★.docx"));
        assert!(!has_marker("Report.docx"));
    }
}
