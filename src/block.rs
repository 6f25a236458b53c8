//! Text block model - one extracted paragraph, table cell or line.

use serde::Serialize;

/// One unit of extracted document text with its layout/typography flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    /// Trimmed, never empty
    text: String,
    /// Point size, 0 when unknown
    font_size: f64,
    /// Declared alignment or the symmetry heuristic
    centered: bool,
    /// No lowercase letters present
    uppercase: bool,
    /// Written only by the scoring engine
    score: f64,
}

impl TextBlock {
    /// Build a block from raw extracted text.
    ///
    /// Returns `None` when the text is empty after trimming; such blocks are
    /// never admitted. A missing or non-finite font size is recorded as `0`.
    /// When `centered` is `None` the [`is_center_symmetric`] heuristic decides.
    pub fn new(raw_text: &str, font_size: Option<f64>, centered: Option<bool>) -> Option<Self> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        let font_size = font_size.filter(|s| s.is_finite() && *s > 0.0).unwrap_or(0.0);
        let centered = centered.unwrap_or_else(|| is_center_symmetric(text));

        Some(Self {
            uppercase: text.to_uppercase() == text,
            text: text.to_string(),
            font_size,
            centered,
            score: 0.0,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

    pub fn is_uppercase(&self) -> bool {
        self.uppercase
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    /// Case-insensitive substring containment.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        crate::keywords::contains_ignore_case(&self.text, keyword)
    }

    /// Exact equality against the document-wide maximum font size.
    pub fn has_max_font_size(&self, global_max: f64) -> bool {
        self.font_size == global_max
    }
}

/// Pad `text` with spaces on both sides to `width` characters.
///
/// Odd padding puts the extra space on the left only when `width` is odd,
/// the same split the classic fixed-width `center` routine uses.
pub fn center_pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if width <= len {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Block-local centring heuristic: the text equals itself centre-padded to its
/// own width.
///
/// Only meaningful for fixed-width sources. For trimmed text it always holds,
/// so readers with real alignment data should pass an explicit flag instead.
pub fn is_center_symmetric(text: &str) -> bool {
    text == center_pad(text, text.chars().count())
}
