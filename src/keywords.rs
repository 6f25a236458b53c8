//! Keyword lists and the shared case-insensitive matcher.

use crate::error::Result;
use std::path::Path;

/// Case-insensitive substring containment. An empty keyword matches nothing.
pub fn contains_ignore_case(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    text.to_lowercase().contains(&keyword.to_lowercase())
}

/// Ordered, immutable list of lower-cased keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build from any iterator of keywords; entries are trimmed and
    /// lower-cased, blank ones dropped, order and duplicates kept.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// One keyword per line.
    pub fn parse(content: &str) -> Self {
        Self::new(content.lines())
    }

    /// Load a UTF-8 keyword file, one keyword per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::parse(&content))
    }

    /// Number of list entries contained in `text` (duplicates count again).
    pub fn count_matches(&self, text: &str) -> usize {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| lowered.contains(k.as_str()))
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
