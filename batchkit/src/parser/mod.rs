//! Input readers: decode text files, load JSON arrays, and filter tokens.
//!
//! Every reader keeps going past a bad record. Rejected lines are logged once
//! at `warn` level and reported back in [`Parsed::rejected`].

use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{InputError, InputResult};
use crate::validation::{is_decimal_number, is_integer, word_tokens};

/// A line that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// 1-based line number.
    pub line: usize,
    /// The trimmed line content.
    pub value: String,
}

/// Values accepted by a reader plus the lines it dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub values: Vec<T>,
    pub rejected: Vec<Rejected>,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> Parsed<T> {
    fn reject(&mut self, line: usize, value: &str) {
        warn!(line, value, "Invalid data skipped");
        self.rejected.push(Rejected {
            line,
            value: value.to_string(),
        });
    }
}

// =============================================================================
// File Loading
// =============================================================================

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "iso-8859-15" | "latin-9" | "latin9" => "iso-8859-15".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes with the given encoding name, falling back to lossy UTF-8.
///
/// Latin-1 goes through `WINDOWS_1252`: `encoding_rs` follows WHATWG, where the
/// two agree on 0xA0-0xFF.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        "iso-8859-15" | "latin-9" | "latin9" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Decode file bytes. Valid UTF-8 is used as-is; anything else goes through detection.
pub fn decode_bytes(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            let encoding = detect_encoding(&bytes);
            debug!(%encoding, "Input is not UTF-8, decoding with detected encoding");
            decode_content(&bytes, &encoding)
        }
    }
}

/// Read a whole text file.
pub fn read_text(path: &Path) -> InputResult<String> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(decode_bytes(bytes))
}

/// Read a file whose top-level JSON value must be an array.
pub fn read_json_array(path: &Path) -> InputResult<Vec<Value>> {
    let content = read_text(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|source| InputError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(InputError::NotAnArray(path.to_path_buf())),
    }
}

// =============================================================================
// Token Readers
// =============================================================================

/// One number per line; lines must satisfy [`is_decimal_number`] once trimmed.
pub fn parse_numbers(content: &str) -> Parsed<f64> {
    let mut parsed = Parsed::default();

    for (idx, line) in content.lines().enumerate() {
        let token = line.trim();
        match token.parse::<f64>() {
            Ok(number) if is_decimal_number(token) => parsed.values.push(number),
            _ => parsed.reject(idx + 1, token),
        }
    }

    parsed
}

/// One integer per line; lines must satisfy [`is_integer`] and fit in an `i128`.
pub fn parse_integers(content: &str) -> Parsed<i128> {
    let mut parsed = Parsed::default();

    for (idx, line) in content.lines().enumerate() {
        let token = line.trim();
        match token.parse::<i128>() {
            Ok(number) if is_integer(token) => parsed.values.push(number),
            _ => parsed.reject(idx + 1, token),
        }
    }

    parsed
}

/// All lower-cased words of the text, line by line.
pub fn extract_words(content: &str) -> Vec<String> {
    content.lines().flat_map(word_tokens).collect()
}
