//! Accepted-input grammars, one named predicate per format.
//!
//! | predicate              | accepts                                |
//! |------------------------|----------------------------------------|
//! | [`is_decimal_number`]  | `-?[0-9]+(\.[0-9]+)?`                  |
//! | [`is_integer`]         | `-?[0-9]+`                             |
//! | [`word_tokens`]        | runs of word characters                |
//! | [`split_record_line`]  | `entity;field;...` with two or more fields |
//!
//! Callers trim tokens before checking them; the predicates themselves are
//! anchored and reject surrounding whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("valid decimal pattern"));

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("valid integer pattern"));

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Separator between fields of an ingestion line.
pub const RECORD_SEPARATOR: char = ';';

/// True for an optional `-`, digits, and an optional `.` followed by digits.
///
/// `+5`, `.5`, `5.` and `1e3` are rejected.
pub fn is_decimal_number(token: &str) -> bool {
    DECIMAL_NUMBER.is_match(token)
}

/// True for an optional `-` followed by one or more digits.
pub fn is_integer(token: &str) -> bool {
    INTEGER.is_match(token)
}

/// Lower-cased words of a line, in order of appearance.
pub fn word_tokens(line: &str) -> Vec<String> {
    let lowered = line.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split a trimmed ingestion line into fields.
///
/// Returns `None` when the line has fewer than two fields.
pub fn split_record_line(line: &str) -> Option<Vec<&str>> {
    let fields: Vec<&str> = line.trim().split(RECORD_SEPARATOR).collect();
    if fields.len() < 2 {
        return None;
    }
    Some(fields)
}
