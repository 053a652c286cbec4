//! Expression text: tokens, left-to-right evaluation and result formatting.
//!
//! These are the leaf pieces of the calculator. They operate on plain `&str`
//! buffers and know nothing about key events or calculator state, so each can be
//! exercised on its own.

pub mod eval;
pub mod format;
pub mod token;

pub use eval::{EvalError, evaluate};
pub use format::{
    DEFAULT_MAX_FRACTION_DIGITS, ERROR_SENTINEL, FormatOptions, format_value, format_value_with,
    group_thousands,
};
pub use token::{
    Operator, Token, ends_with_operator, is_numeric_literal, join, parse_number, tokenize,
    trailing_segment,
};
