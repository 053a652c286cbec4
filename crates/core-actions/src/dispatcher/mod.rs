//! Dispatcher applying `Action` to calculator state.
//!
//! Sub-modules:
//! * `edit`     - buffer mutation (digits, decimal point, sign, percent, operators)
//! * `evaluate` - `=` handling: evaluation, formatting, last-expression bookkeeping
//!
//! `dispatch` runs to completion for every action; the buffer invariants of
//! `CalcState` hold between calls, never inside one.
//!
//! Post-calculation rule: when `just_calculated` is set, any action other than
//! `=` first clears the buffer and last expression, then drops the flag. The
//! optional `continue_after_result` policy lets an operator build on a numeric
//! result instead.

use crate::{Action, ActionObserver, EditKind};
use core_state::CalcState;
use core_text::FormatOptions;

mod edit;
mod evaluate;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Display or last expression changed; the front end should redraw.
    pub dirty: bool,
    /// An `=` was processed (successful or not).
    pub evaluated: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            evaluated: false,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            evaluated: false,
            quit: false,
        }
    }
    pub fn evaluated() -> Self {
        Self {
            dirty: true,
            evaluated: true,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: false,
            evaluated: false,
            quit: true,
        }
    }

    fn or_dirty(mut self, dirty: bool) -> Self {
        self.dirty |= dirty;
        self
    }
}

/// Policy knobs supplied by the front end (usually from `core-config`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOptions {
    pub format: FormatOptions,
    /// Operator right after `=` continues from the result instead of clearing.
    pub continue_after_result: bool,
}

/// Apply an action to calculator state.
pub fn dispatch(
    action: Action,
    state: &mut CalcState,
    opts: &DispatchOptions,
    observers: &[Box<dyn ActionObserver>],
) -> DispatchResult {
    for obs in observers {
        obs.on_action(&action);
    }

    if matches!(action, Action::Quit) {
        return DispatchResult::quit();
    }

    let mut cleared = false;
    if state.just_calculated && !matches!(action, Action::Evaluate) {
        if !continues_from_result(action, state, opts) {
            cleared = !state.is_zero() || !state.last_expression().is_empty();
            state.clear();
        }
        state.just_calculated = false;
    }

    let result = match action {
        Action::Edit(kind) => edit::handle_edit(kind, state, opts),
        Action::Clear => {
            let changed = !state.is_zero() || !state.last_expression().is_empty();
            state.clear();
            if changed {
                DispatchResult::dirty()
            } else {
                DispatchResult::clean()
            }
        }
        Action::Evaluate => evaluate::handle_evaluate(state, opts),
        Action::Quit => DispatchResult::quit(),
    }
    .or_dirty(cleared);

    tracing::trace!(
        target: "actions.dispatch",
        op = action.label(),
        display = state.display(),
        dirty = result.dirty,
        "dispatch"
    );
    result
}

fn continues_from_result(action: Action, state: &CalcState, opts: &DispatchOptions) -> bool {
    opts.continue_after_result
        && matches!(action, Action::Edit(EditKind::Operator(_)))
        && !state.is_error()
}
