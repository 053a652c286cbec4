//! Expression tokens and the numeric literal grammar.
//!
//! A buffer is a sequence of whitespace-delimited tokens. Each token is
//! classified once, on demand, into a `Token`; nothing here is cached.
//!
//! Numeric literal grammar (no exponents, no locale separators):
//!
//! ```text
//! number := '-'? ( digits ( '.' digits? )? | '.' digits )
//! digits := [0-9]+
//! ```
//!
//! `"5."` (decimal point just typed) and `".5"` are numbers; `"."` and `"-"`
//! on their own are not.

use std::fmt;

/// One of the four binary operators, left-associative with equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Display symbol written into the buffer.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "×" => Some(Operator::Multiply),
            "÷" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply the operator. Division by exactly zero yields NaN rather than
    /// the IEEE infinity so the formatter reports it as an error.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    f64::NAN
                } else {
                    lhs / rhs
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Classified buffer token borrowing its text from the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Number { text: &'a str, value: f64 },
    Operator(Operator),
    /// Anything else (a lone `.`, the error sentinel, stray input).
    Other(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(text: &'a str) -> Self {
        if let Some(op) = Operator::from_symbol(text) {
            return Token::Operator(op);
        }
        match parse_number(text) {
            Some(value) => Token::Number { text, value },
            None => Token::Other(text),
        }
    }

    pub fn text(&self) -> &'a str {
        match *self {
            Token::Number { text, .. } => text,
            Token::Operator(op) => op.symbol(),
            Token::Other(text) => text,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number { .. })
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

/// True if `s` matches the numeric literal grammar.
pub fn is_numeric_literal(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) {
        return false;
    }
    match frac_part {
        // `split_once` leaves any second '.' inside the fraction, rejected here.
        Some(frac) => all_digits(frac) && !(int_part.is_empty() && frac.is_empty()),
        None => !int_part.is_empty(),
    }
}

/// Parse a literal accepted by [`is_numeric_literal`].
pub fn parse_number(s: &str) -> Option<f64> {
    if !is_numeric_literal(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Split on whitespace, dropping empty tokens, and classify each piece.
pub fn tokenize(buffer: &str) -> Vec<Token<'_>> {
    buffer.split_whitespace().map(Token::classify).collect()
}

/// Segment after the last whitespace (the whole buffer if there is none).
/// Empty when the buffer ends in whitespace.
pub fn trailing_segment(buffer: &str) -> &str {
    match buffer.rfind(char::is_whitespace) {
        Some(idx) => {
            let ws_len = buffer[idx..].chars().next().map_or(1, char::len_utf8);
            &buffer[idx + ws_len..]
        }
        None => buffer,
    }
}

/// True if the last non-whitespace token is one of the four operators.
pub fn ends_with_operator(buffer: &str) -> bool {
    buffer
        .split_whitespace()
        .next_back()
        .is_some_and(|t| Operator::from_symbol(t).is_some())
}

/// Rejoin token texts with single spaces.
pub fn join<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_accepts_partial_decimals() {
        for s in ["0", "12", "-3", "5.", ".5", "-.5", "-5.", "0.25", "007"] {
            assert!(is_numeric_literal(s), "{s} should be numeric");
        }
    }

    #[test]
    fn grammar_rejects_non_literals() {
        for s in [
            "", ".", "-", "-.", "1.2.3", "+5", "1e5", "inf", "NaN", "1,5", "Error", "×", "5-",
        ] {
            assert!(!is_numeric_literal(s), "{s:?} should not be numeric");
        }
    }

    #[test]
    fn parse_number_accepts_partial_forms() {
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("-.25"), Some(-0.25));
        assert_eq!(parse_number("-0"), Some(-0.0));
        assert_eq!(parse_number("1.2.3"), None);
    }

    #[test]
    fn classify_tokens() {
        let toks = tokenize("12 ×  -3 ÷ . ");
        assert_eq!(toks.len(), 5);
        assert_eq!(
            toks[0],
            Token::Number {
                text: "12",
                value: 12.0
            }
        );
        assert_eq!(toks[1], Token::Operator(Operator::Multiply));
        assert!(toks[2].is_number());
        assert!(toks[3].is_operator());
        assert_eq!(toks[4], Token::Other("."));
    }

    #[test]
    fn minus_alone_is_operator_not_number() {
        assert_eq!(Token::classify("-"), Token::Operator(Operator::Subtract));
    }

    #[test]
    fn trailing_segment_cases() {
        assert_eq!(trailing_segment("12"), "12");
        assert_eq!(trailing_segment("1 + 2.5"), "2.5");
        assert_eq!(trailing_segment("1 + "), "");
    }

    #[test]
    fn ends_with_operator_ignores_trailing_space() {
        assert!(ends_with_operator("1 + "));
        assert!(ends_with_operator("1 ÷"));
        assert!(!ends_with_operator("1 + -2"));
        assert!(!ends_with_operator("0"));
    }

    #[test]
    fn divide_by_zero_is_nan() {
        assert!(Operator::Divide.apply(8.0, 0.0).is_nan());
        assert!(Operator::Divide.apply(8.0, -0.0).is_nan());
        assert_eq!(Operator::Divide.apply(8.0, 2.0), 4.0);
    }
}
