//! `=` handling.
//!
//! The pre-evaluation buffer becomes the last expression and the
//! just-calculated flag is set whether or not evaluation succeeds; a failed
//! `=` therefore behaves like a finished calculation for the next key.

use super::{DispatchOptions, DispatchResult};
use core_state::CalcState;
use core_text::{ERROR_SENTINEL, evaluate, format_value_with};

pub(crate) fn handle_evaluate(state: &mut CalcState, opts: &DispatchOptions) -> DispatchResult {
    state.record_expression();
    let shown = match evaluate(state.display()) {
        Ok(value) => format_value_with(value, &opts.format),
        Err(err) => {
            tracing::debug!(
                target: "actions.eval",
                expression = state.display(),
                %err,
                "evaluation_failed"
            );
            ERROR_SENTINEL.to_string()
        }
    };
    let ok = shown != ERROR_SENTINEL;
    if ok {
        tracing::debug!(
            target: "actions.eval",
            expression = state.display(),
            result = shown.as_str(),
            "evaluated"
        );
    } else {
        tracing::debug!(
            target: "actions.eval",
            expression = state.display(),
            "non_finite_or_malformed"
        );
    }
    state.set_display(shown);
    state.just_calculated = true;
    state.metrics.note_evaluation(ok);
    DispatchResult::evaluated()
}
