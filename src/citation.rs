//! Best-effort extraction of a title and first-author surname from a
//! free-text citation string.
//!
//! The heuristics target numbered publication-list citations of the shape
//! `"12. Author A, Author B, Some Title. Journal 123 (2020)"`. Irregular
//! formats degrade to empty strings rather than erroring; the title pattern
//! in particular is known to mis-parse titles containing commas and is kept
//! as-is for compatibility with existing data.

use once_cell::sync::Lazy;
use regex::Regex;

static ENUM_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.\s*").expect("valid enumeration prefix regex"));

// Greedy up to the title's ending period, then the capitalized journal name.
static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*,\s*(.*?)\.\s*[A-Z]").expect("valid title regex"));

/// Extract `(title, first_author_surname)` from a citation string.
///
/// Both parts are empty strings when the citation does not match the expected
/// shape; this never fails.
pub fn extract_title_and_first_author(citation: &str) -> (String, String) {
    let stripped = ENUM_PREFIX_RE.replace(citation, "");
    let text = stripped.trim();

    // Surname: last word of the segment before the first comma. Without a
    // comma there is no author segment at all.
    let first_author = text
        .split_once(',')
        .map(|(head, _)| head.trim())
        .unwrap_or("");
    let surname = first_author
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_matches('.');

    let title = TITLE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    (title, surname.to_string())
}
