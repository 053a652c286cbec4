//! Buffer edit handling (digits, decimal point, sign, percent, operators).
//!
//! Edits to the trailing operand go through the token list rather than byte
//! ranges: tokenize, replace the last token, rejoin with single spaces. The
//! buffer is kept single-spaced by construction, so rejoining never changes
//! the untouched prefix.

use super::{DispatchOptions, DispatchResult};
use crate::EditKind;
use core_state::{BufferShape, CalcState};
use core_text::{ERROR_SENTINEL, Operator, Token, format_value_with, join, trailing_segment};

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut CalcState,
    opts: &DispatchOptions,
) -> DispatchResult {
    match kind {
        EditKind::Digit(d) => append_digit(state, d),
        EditKind::DecimalPoint => append_decimal_point(state),
        EditKind::ToggleSign => map_trailing_number(state, opts, "toggle_sign", |v| -v),
        EditKind::Percent => map_trailing_number(state, opts, "percent", |v| v / 100.0),
        EditKind::Operator(op) => insert_operator(state, op),
    }
}

fn append_digit(state: &mut CalcState, digit: u8) -> DispatchResult {
    let ch = char::from(b'0' + digit % 10);
    match state.shape() {
        BufferShape::Zero | BufferShape::Error => state.set_display(ch.to_string()),
        BufferShape::Number | BufferShape::OperatorPending => {
            let mut buf = [0u8; 4];
            state.push_display(ch.encode_utf8(&mut buf));
        }
    }
    DispatchResult::dirty()
}

fn append_decimal_point(state: &mut CalcState) -> DispatchResult {
    if state.shape() == BufferShape::Error {
        state.set_display("0.");
        return DispatchResult::dirty();
    }
    if trailing_segment(state.display()).contains('.') {
        return DispatchResult::clean();
    }
    state.push_display(".");
    DispatchResult::dirty()
}

/// Replace the trailing numeric token with `f(value)`, formatted. No-op when
/// the buffer does not end in a number (dangling operator, sentinel) or when
/// `f(value)` is not finite; the sentinel only ever fills the whole buffer.
fn map_trailing_number(
    state: &mut CalcState,
    opts: &DispatchOptions,
    op: &'static str,
    f: impl FnOnce(f64) -> f64,
) -> DispatchResult {
    let tokens = state.tokens();
    let Some((Token::Number { value, .. }, prefix)) = tokens.split_last() else {
        tracing::trace!(target: "actions.dispatch", op, "no_trailing_number");
        return DispatchResult::clean();
    };
    let mapped = f(*value);
    if !mapped.is_finite() {
        tracing::trace!(target: "actions.dispatch", op, "non_finite_operand");
        return DispatchResult::clean();
    }
    let replacement = format_value_with(mapped, &opts.format);
    let rebuilt = join(
        prefix
            .iter()
            .map(Token::text)
            .chain(std::iter::once(replacement.as_str())),
    );
    let changed = rebuilt != state.display();
    state.set_display(rebuilt);
    if changed {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

fn insert_operator(state: &mut CalcState, op: Operator) -> DispatchResult {
    match state.shape() {
        BufferShape::Zero | BufferShape::Error => state.set_display(format!("0 {op} ")),
        BufferShape::OperatorPending => {
            let tokens = state.tokens();
            let prefix = &tokens[..tokens.len().saturating_sub(1)];
            let mut rebuilt = join(
                prefix
                    .iter()
                    .map(Token::text)
                    .chain(std::iter::once(op.symbol())),
            );
            rebuilt.push(' ');
            state.set_display(rebuilt);
        }
        BufferShape::Number => state.push_display(&format!(" {op} ")),
    }
    debug_assert_ne!(state.display(), ERROR_SENTINEL);
    DispatchResult::dirty()
}
