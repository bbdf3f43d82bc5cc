//! Decimal integers to sign-and-magnitude binary and hexadecimal.
//!
//! Digits come from repeated division, not from `{:b}`/`{:X}`.

use std::path::Path;
use tracing::info;

use crate::config::OutputConfig;
use crate::error::{RunError, RunResult};
use crate::parser::{parse_integers, read_text};
use crate::report::{elapsed_line, write_results, ResultsKind, Stopwatch};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Representation of `number` in `base` (2..=16), `-` prefixed when negative.
pub fn to_base(number: i128, base: u32) -> String {
    debug_assert!((2..=16).contains(&base));
    if number == 0 {
        return "0".to_string();
    }

    let base = u128::from(base);
    let mut magnitude = number.unsigned_abs();
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
    }
    if number < 0 {
        digits.push(b'-');
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

pub fn to_binary(number: i128) -> String {
    to_base(number, 2)
}

pub fn to_hexadecimal(number: i128) -> String {
    to_base(number, 16)
}

/// One detail line of the conversion results.
pub fn conversion_line(number: i128) -> String {
    format!(
        "Number: {number}, Binary: {}, Hexadecimal: {}",
        to_binary(number),
        to_hexadecimal(number)
    )
}

/// Read `input`, convert every accepted integer, print and save the results.
pub fn run(input: &Path, output: &OutputConfig) -> RunResult<String> {
    let timer = Stopwatch::start();
    let content = read_text(input)?;
    let parsed = parse_integers(&content);
    info!(
        accepted = parsed.values.len(),
        rejected = parsed.rejected.len(),
        "Integers read"
    );

    if parsed.values.is_empty() {
        return Err(RunError::NoValidData("integers"));
    }

    let mut text = String::from("Conversion Results:\n");
    for number in &parsed.values {
        text.push_str(&conversion_line(*number));
        text.push('\n');
    }
    text.push_str(&elapsed_line(timer.elapsed_secs()));
    text.push('\n');

    write_results(&text, ResultsKind::Conversion, input, output)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_binary(0), "0");
        assert_eq!(to_hexadecimal(0), "0");
    }

    #[test]
    fn test_negative_is_sign_and_magnitude() {
        assert_eq!(to_binary(-10), "-1010");
        assert_eq!(to_hexadecimal(-10), "-A");
    }

    #[test]
    fn test_positive_values() {
        assert_eq!(to_binary(1), "1");
        assert_eq!(to_binary(255), "11111111");
        assert_eq!(to_hexadecimal(255), "FF");
        assert_eq!(to_hexadecimal(48879), "BEEF");
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        assert_eq!(to_hexadecimal(i128::MIN), format!("-8{}", "0".repeat(31)));
        assert_eq!(to_hexadecimal(i128::MAX), format!("7{}", "F".repeat(31)));
    }

    #[test]
    fn test_matches_std_formatting_for_positives() {
        for n in [3_i128, 17, 1024, 65535, 123_456_789] {
            assert_eq!(to_binary(n), format!("{n:b}"));
            assert_eq!(to_hexadecimal(n), format!("{n:X}"));
        }
    }

    #[test]
    fn test_conversion_line() {
        assert_eq!(conversion_line(-10), "Number: -10, Binary: -1010, Hexadecimal: -A");
    }
}
