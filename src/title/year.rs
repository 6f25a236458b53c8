//! Year detection in the full document text.

use regex::Regex;
use std::sync::OnceLock;

static YEAR_RE: OnceLock<Regex> = OnceLock::new();

/// First standalone year between 2000 and 2099 in `text`.
pub fn extract_year(text: &str) -> Option<String> {
    let re = YEAR_RE.get_or_init(|| Regex::new(r"\b(20[0-9]{2})\b").expect("valid year pattern"));
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
