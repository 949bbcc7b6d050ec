//! Currency range normalization for fee and credit limit columns.
//!
//! Dataset cells look like `₹500 - ₹2,000`, `Rs. 1,00,000`, `0` or free text such as `Nil`.
//! Parsing never fails: anything that does not reduce to one or two non-negative finite
//! numbers yields zero.

use serde::{Deserialize, Serialize};

const CURRENCY_TOKENS: &[&str] = &["\u{e2}\u{201a}\u{b9}", "₹", "Rs.", "Rs", "INR", "$", "€", "£"];
const RANGE_DELIMITERS: &[char] = &['-', '\u{2013}'];

/// Lower and upper bound of a parsed amount. Single values produce `min == max`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl AmountRange {
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    fn ordered(first: f64, second: f64) -> Self {
        if first <= second {
            Self {
                min: first,
                max: second,
            }
        } else {
            Self {
                min: second,
                max: first,
            }
        }
    }

    /// Arithmetic mean of the bounds.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Single-value mode: a range collapses to its mean.
pub fn parse_amount(raw: &str) -> f64 {
    parse_range(raw).midpoint()
}

/// Range mode: returns both bounds, or `[0, 0]` when any part is unusable.
pub fn parse_range(raw: &str) -> AmountRange {
    let cleaned = strip_currency(raw);
    if cleaned.is_empty() {
        return AmountRange::ZERO;
    }

    let parts: Vec<&str> = cleaned.split(RANGE_DELIMITERS).collect();
    match parts.as_slice() {
        [single] => parse_part(single)
            .map(AmountRange::single)
            .unwrap_or(AmountRange::ZERO),
        [low, high] => match (parse_part(low), parse_part(high)) {
            (Some(low), Some(high)) => AmountRange::ordered(low, high),
            _ => AmountRange::ZERO,
        },
        _ => AmountRange::ZERO,
    }
}

fn strip_currency(raw: &str) -> String {
    let mut cleaned = raw.trim().to_string();
    if let Some(stripped) = cleaned.strip_suffix("/-") {
        cleaned = stripped.to_string();
    }
    for token in CURRENCY_TOKENS {
        cleaned = cleaned.replace(token, "");
    }
    cleaned
        .chars()
        .filter(|ch| *ch != ',' && !ch.is_whitespace())
        .collect()
}

fn parse_part(part: &str) -> Option<f64> {
    if part.is_empty() {
        return None;
    }
    // f64 parsing accepts "inf" and "NaN"; only plain decimal digits are amounts.
    if !part.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
        return None;
    }
    part.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}
