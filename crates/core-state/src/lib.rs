//! Calculator state: the display buffer, the last evaluated expression, and
//! the just-calculated flag.
//!
//! `CalcState` is the single owner of the triple. It is mutated only through
//! `&mut` access from the dispatcher (`core-actions`), one action at a time;
//! invariants are expected to hold between dispatch calls, not inside them.
//!
//! Invariants:
//! * `display` is never empty.
//! * `display` is `"0"`, the error sentinel, or number/operator tokens
//!   separated by single spaces, optionally ending in an operator followed by
//!   one trailing space.
//! * `last_expression` is empty or the buffer exactly as it was at the most
//!   recent `=`.

use core_text::{ERROR_SENTINEL, Token, tokenize};

/// Initial / cleared buffer content.
pub const ZERO: &str = "0";

/// Coarse classification of the buffer, matching the calculator's states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferShape {
    Zero,
    Number,
    OperatorPending,
    Error,
}

/// Evaluation counters, reported by the front end on exit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CalcMetrics {
    pub evaluations: u64,
    pub errors: u64,
}

impl CalcMetrics {
    pub fn note_evaluation(&mut self, ok: bool) {
        self.evaluations += 1;
        if !ok {
            self.errors += 1;
        }
    }
}

#[derive(Debug, Clone)]
pub struct CalcState {
    display: String,
    last_expression: String,
    /// True right after `=`, whether or not the evaluation succeeded.
    pub just_calculated: bool,
    pub metrics: CalcMetrics,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    pub fn new() -> Self {
        Self {
            display: ZERO.to_string(),
            last_expression: String::new(),
            just_calculated: false,
            metrics: CalcMetrics::default(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn last_expression(&self) -> &str {
        &self.last_expression
    }

    pub fn is_zero(&self) -> bool {
        self.display == ZERO
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_SENTINEL
    }

    pub fn shape(&self) -> BufferShape {
        if self.is_zero() {
            BufferShape::Zero
        } else if self.is_error() {
            BufferShape::Error
        } else if core_text::ends_with_operator(&self.display) {
            BufferShape::OperatorPending
        } else {
            BufferShape::Number
        }
    }

    /// Reset the buffer to `"0"` and forget the last expression. Idempotent.
    pub fn clear(&mut self) {
        self.display.clear();
        self.display.push_str(ZERO);
        self.last_expression.clear();
    }

    /// Replace the whole buffer. An empty replacement collapses to `"0"`.
    pub fn set_display(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.display = ZERO.to_string();
        } else {
            self.display = text;
        }
    }

    pub fn push_display(&mut self, text: &str) {
        self.display.push_str(text);
    }

    /// Snapshot the current buffer as the last evaluated expression.
    pub fn record_expression(&mut self) {
        self.last_expression.clone_from(&self.display);
    }

    /// Tokens of the current buffer, classified.
    pub fn tokens(&self) -> Vec<Token<'_>> {
        tokenize(&self.display)
    }
}
