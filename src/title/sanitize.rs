//! Filename-safe fragment cleanup.

/// Characters the common filesystems reject in a file name
const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Strip control characters (0x00-0x1F) and reserved characters, then trim.
///
/// A fragment made only of forbidden characters becomes an empty string.
pub fn sanitize_fragment(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !is_forbidden(*c))
        .collect();
    cleaned.trim().to_string()
}

/// Whether `c` may never appear in a synthesized name.
pub fn is_forbidden(c: char) -> bool {
    // \n \r \t \v \f all fall inside the control range
    ('\u{00}'..='\u{1F}').contains(&c) || RESERVED_CHARS.contains(&c)
}
