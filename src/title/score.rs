//! Scoring engine - ranks blocks by how title-like they look.

use crate::block::TextBlock;
use crate::error::{Error, Result};
use crate::keywords::KeywordSet;

/// Delta per matching (or, negated, per ignored) keyword
pub const KEYWORD_WEIGHT: f64 = 0.5;
/// Delta for each typographic/layout signal
pub const SIGNAL_WEIGHT: f64 = 1.0;

/// Largest font size across all blocks, `0` when none is known.
pub fn max_font_size(blocks: &[TextBlock]) -> f64 {
    blocks.iter().map(TextBlock::font_size).fold(0.0, f64::max)
}

/// Score every block in place.
///
/// Pass one finds the document-wide maximum font size, pass two assigns each
/// block a fresh score, so rescoring the same blocks gives the same result.
/// Block order is left untouched.
pub fn score_blocks(
    blocks: &mut [TextBlock],
    match_keywords: &KeywordSet,
    ignore_keywords: &KeywordSet,
) -> Result<()> {
    if blocks.is_empty() {
        return Err(Error::EmptyInput);
    }

    let max_font = max_font_size(blocks);

    for block in blocks.iter_mut() {
        let score = block_score(block, max_font, match_keywords, ignore_keywords);
        block.set_score(score);
    }

    Ok(())
}

/// Score of a single block against a known maximum font size.
pub fn block_score(
    block: &TextBlock,
    max_font: f64,
    match_keywords: &KeywordSet,
    ignore_keywords: &KeywordSet,
) -> f64 {
    let mut score = 0.0;

    // 1. match keywords
    score += KEYWORD_WEIGHT * match_keywords.count_matches(block.text()) as f64;

    // 2. ignore keywords
    score -= KEYWORD_WEIGHT * ignore_keywords.count_matches(block.text()) as f64;

    // 3. all caps
    if block.is_uppercase() {
        score += SIGNAL_WEIGHT;
    }

    // 4. largest font in the document
    if block.has_max_font_size(max_font) {
        score += SIGNAL_WEIGHT;
    }

    // 5. centred
    if block.is_centered() {
        score += SIGNAL_WEIGHT;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str, size: Option<f64>, centered: bool) -> TextBlock {
        TextBlock::new(text, size, Some(centered)).unwrap()
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let mut blocks: Vec<TextBlock> = Vec::new();
        let err = score_blocks(&mut blocks, &KeywordSet::default(), &KeywordSet::default());
        assert!(matches!(err, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_reference_document() {
        let mut blocks = vec![
            block("HELLO WORLD", Some(20.0), true),
            block("notes", Some(10.0), false),
        ];
        score_blocks(&mut blocks, &KeywordSet::new(["hello"]), &KeywordSet::default()).unwrap();

        assert_eq!(blocks[0].score(), 3.5);
        assert_eq!(blocks[1].score(), 0.0);
    }

    #[test]
    fn test_keywords_are_cumulative_and_uncapped() {
        let mut blocks = vec![block("annual budget report draft", Some(10.0), false)];
        let matches = KeywordSet::new(["annual", "budget", "report"]);
        let ignores = KeywordSet::new(["draft"]);
        score_blocks(&mut blocks, &matches, &ignores).unwrap();

        // 3 * 0.5 - 0.5 + 1 (max font)
        assert_eq!(blocks[0].score(), 2.0);
    }

    #[test]
    fn test_max_font_considers_whole_document() {
        let mut blocks: Vec<TextBlock> = (0..30)
            .map(|i| block(&format!("line {i}"), Some(10.0), false))
            .collect();
        blocks.push(block("late heading", Some(24.0), false));
        score_blocks(&mut blocks, &KeywordSet::default(), &KeywordSet::default()).unwrap();

        assert_eq!(blocks[0].score(), 0.0);
        assert_eq!(blocks[30].score(), 1.0);
    }

    #[test]
    fn test_missing_font_data_everywhere_qualifies_all() {
        let mut blocks = vec![block("one", None, false), block("two", None, false)];
        score_blocks(&mut blocks, &KeywordSet::default(), &KeywordSet::default()).unwrap();

        assert!(blocks.iter().all(|b| b.score() == 1.0));
    }

    #[test]
    fn test_missing_font_data_never_qualifies_when_others_have_it() {
        let mut blocks = vec![block("one", None, false), block("two", Some(8.0), false)];
        score_blocks(&mut blocks, &KeywordSet::default(), &KeywordSet::default()).unwrap();

        assert_eq!(blocks[0].score(), 0.0);
        assert_eq!(blocks[1].score(), 1.0);
    }

    #[test]
    fn test_rescoring_does_not_accumulate() {
        let mut blocks = vec![block("HELLO", Some(12.0), true)];
        let matches = KeywordSet::new(["hello"]);
        score_blocks(&mut blocks, &matches, &KeywordSet::default()).unwrap();
        score_blocks(&mut blocks, &matches, &KeywordSet::default()).unwrap();

        assert_eq!(blocks[0].score(), 3.5);
    }

    #[test]
    fn test_order_and_text_are_preserved() {
        let texts = ["b", "A", "c", "D"];
        let mut blocks: Vec<TextBlock> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| block(t, Some(i as f64), i % 2 == 0))
            .collect();
        score_blocks(&mut blocks, &KeywordSet::default(), &KeywordSet::default()).unwrap();

        let after: Vec<&str> = blocks.iter().map(TextBlock::text).collect();
        assert_eq!(after, texts);
    }

    #[test]
    fn test_some_block_has_max_font() {
        let blocks = vec![
            block("a", Some(9.0), false),
            block("b", Some(11.5), false),
            block("c", None, false),
        ];
        let max = max_font_size(&blocks);
        assert!(blocks.iter().any(|b| b.has_max_font_size(max)));
    }
}
