//! Numeric result formatting and the error sentinel.

use crate::token::is_numeric_literal;

/// Display value for any invalid outcome (non-finite result or malformed
/// buffer). Never parses as a number, so edit handling can recognise it.
pub const ERROR_SENTINEL: &str = "Error";

/// Default upper bound on rendered fractional digits.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub max_fraction_digits: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
        }
    }
}

/// Format with default options.
pub fn format_value(value: f64) -> String {
    format_value_with(value, &FormatOptions::default())
}

/// Fixed notation, between zero and `max_fraction_digits` fractional digits,
/// trailing zeros trimmed. NaN and infinities map to [`ERROR_SENTINEL`].
pub fn format_value_with(value: f64, opts: &FormatOptions) -> String {
    if !value.is_finite() {
        return ERROR_SENTINEL.to_string();
    }
    let mut out = format!("{:.*}", opts.max_fraction_digits, value);
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    // Negative zero, or a tiny negative value rounded away.
    if out == "-0" {
        out.remove(0);
    }
    out
}

/// Insert `,` thousands separators into every numeric token of `display`.
/// Presentation only: the result is not meant to be fed back into the buffer.
pub fn group_thousands(display: &str) -> String {
    display
        .split(' ')
        .map(|piece| {
            if is_numeric_literal(piece) {
                group_literal(piece)
            } else {
                piece.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn group_literal(literal: &str) -> String {
    let (sign, body) = match literal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", literal),
    };
    let (int_part, rest) = match body.find('.') {
        Some(idx) => body.split_at(idx),
        None => (body, ""),
    };
    let mut grouped = String::with_capacity(literal.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(rest);
    grouped
}
