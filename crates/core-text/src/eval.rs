//! Left-to-right evaluation of a display buffer.
//!
//! No precedence: `2 + 3 × 4` reduces as `(2 + 3) × 4`. A single dangling
//! operator at the end (`"5 + "`) is left unconsumed and does not affect the
//! result. Division by zero is not an error at this layer; it yields NaN and
//! the formatter turns any non-finite value into the error sentinel.

use crate::token::{Token, tokenize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("malformed expression: unexpected token {token:?} at index {index}")]
    Malformed { index: usize, token: String },
}

impl EvalError {
    fn malformed(index: usize, token: &Token<'_>) -> Self {
        EvalError::Malformed {
            index,
            token: token.text().to_string(),
        }
    }
}

/// Reduce `buffer` strictly left to right.
pub fn evaluate(buffer: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(buffer);
    let Some(first) = tokens.first() else {
        return Err(EvalError::Empty);
    };
    let Token::Number { value: mut acc, .. } = *first else {
        return Err(EvalError::malformed(0, first));
    };

    let mut i = 1;
    while i + 1 < tokens.len() {
        let Token::Operator(op) = tokens[i] else {
            return Err(EvalError::malformed(i, &tokens[i]));
        };
        let Token::Number { value: rhs, .. } = tokens[i + 1] else {
            return Err(EvalError::malformed(i + 1, &tokens[i + 1]));
        };
        acc = op.apply(acc, rhs);
        i += 2;
    }

    // Anything left over must be the dangling operator.
    if let Some(rest) = tokens.get(i)
        && !rest.is_operator()
    {
        return Err(EvalError::malformed(i, rest));
    }

    tracing::trace!(target: "text.eval", tokens = tokens.len(), result = acc, "reduced");
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_number() {
        assert_eq!(evaluate("42"), Ok(42.0));
    }

    #[test]
    fn addition() {
        assert_eq!(evaluate("2 + 3"), Ok(5.0));
    }

    #[test]
    fn no_precedence() {
        assert_eq!(evaluate("2 + 3 × 4"), Ok(20.0));
        assert_eq!(evaluate("10 - 4 ÷ 2"), Ok(3.0));
    }

    #[test]
    fn dangling_operator_ignored() {
        assert_eq!(evaluate("7 × "), Ok(7.0));
        assert_eq!(evaluate("2 + 3 - "), Ok(5.0));
    }

    #[test]
    fn repeated_spaces_are_skipped() {
        assert_eq!(evaluate("  1   +  2 "), Ok(3.0));
    }

    #[test]
    fn division_by_zero_is_nan_not_error() {
        assert!(evaluate("8 ÷ 0").unwrap().is_nan());
        // NaN propagates through later steps.
        assert!(evaluate("8 ÷ 0 + 1").unwrap().is_nan());
    }

    #[test]
    fn overflow_is_infinite() {
        let big = format!("{:.0}", f64::MAX);
        let expr = format!("{big} × 10");
        assert!(evaluate(&expr).unwrap().is_infinite());
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(evaluate(""), Err(EvalError::Empty));
        assert_eq!(evaluate("   "), Err(EvalError::Empty));
    }

    #[test]
    fn leading_operator_is_malformed() {
        assert_eq!(
            evaluate("+ 3"),
            Err(EvalError::Malformed {
                index: 0,
                token: "+".into()
            })
        );
    }

    #[test]
    fn consecutive_operators_are_malformed() {
        assert_eq!(
            evaluate("1 + × 2"),
            Err(EvalError::Malformed {
                index: 2,
                token: "×".into()
            })
        );
    }

    #[test]
    fn lone_decimal_point_is_malformed() {
        assert!(matches!(
            evaluate("0 + ."),
            Err(EvalError::Malformed { index: 2, .. })
        ));
    }

    #[test]
    fn sentinel_text_is_malformed() {
        assert!(matches!(
            evaluate("Error"),
            Err(EvalError::Malformed { index: 0, .. })
        ));
    }

    #[test]
    fn error_display_names_token() {
        let err = evaluate("1 + × 2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed expression: unexpected token \"×\" at index 2"
        );
    }
}
