//! Calculator actions, label classification, key translation and dispatch.
//!
//! Every input reaches the state through [`dispatcher::dispatch`]. Labels
//! coming from a presentation layer are classified with
//! [`Action::from_label`]; terminal keys go through [`translate_key`].

use core_text::Operator;
use std::fmt;

pub mod dispatcher;
mod key_translator;

pub use dispatcher::{DispatchOptions, DispatchResult, dispatch};
pub use key_translator::translate_key;

/// Buffer edits routed to `dispatcher::edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// Decimal digit 0-9.
    Digit(u8),
    DecimalPoint,
    ToggleSign,
    Percent,
    Operator(Operator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Edit(EditKind),
    /// `AC`: buffer back to `"0"`, last expression forgotten.
    Clear,
    /// `=`.
    Evaluate,
    /// Front-end request to exit; never produced from a label.
    Quit,
}

impl Action {
    /// Classify a button label. Unknown labels yield `None` and must be
    /// ignored by the caller.
    pub fn from_label(label: &str) -> Option<Self> {
        let action = match label {
            "." => Action::Edit(EditKind::DecimalPoint),
            "AC" | "C" | "c" => Action::Clear,
            "+/-" | "±" => Action::Edit(EditKind::ToggleSign),
            "%" => Action::Edit(EditKind::Percent),
            "=" => Action::Evaluate,
            "*" | "x" => Action::Edit(EditKind::Operator(Operator::Multiply)),
            "/" => Action::Edit(EditKind::Operator(Operator::Divide)),
            other => {
                if let Some(op) = Operator::from_symbol(other) {
                    Action::Edit(EditKind::Operator(op))
                } else {
                    return digit_of(other).map(|d| Action::Edit(EditKind::Digit(d)));
                }
            }
        };
        Some(action)
    }

    /// Canonical label for this action (the inverse of `from_label` on
    /// canonical input).
    pub fn label(&self) -> &'static str {
        match self {
            Action::Edit(EditKind::Digit(d)) => DIGIT_LABELS[usize::from(*d % 10)],
            Action::Edit(EditKind::DecimalPoint) => ".",
            Action::Edit(EditKind::ToggleSign) => "+/-",
            Action::Edit(EditKind::Percent) => "%",
            Action::Edit(EditKind::Operator(op)) => op.symbol(),
            Action::Clear => "AC",
            Action::Evaluate => "=",
            Action::Quit => "quit",
        }
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

fn digit_of(label: &str) -> Option<u8> {
    match label.as_bytes() {
        [b] if b.is_ascii_digit() => Some(b - b'0'),
        _ => None,
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Observer hook notified before each dispatched action.
pub trait ActionObserver: Send + Sync {
    fn on_action(&self, action: &Action);
}
