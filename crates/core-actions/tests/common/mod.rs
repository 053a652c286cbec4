#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{Action, DispatchOptions, DispatchResult, dispatch, translate_key};
use core_events::KeyEvent;
use core_state::CalcState;

/// Scenario step: button labels, raw keys, or a direct action.
#[derive(Debug, Clone)]
pub enum Step<'a> {
    /// e.g. `&["1", "+", "2", "="]`
    Labels(&'a [&'a str]),
    /// Literal key characters like `"12+3="`.
    Keys(&'a str),
    Action(Action),
}

#[derive(Debug, Default, Clone)]
pub struct ScenarioExpect {
    pub display: Option<&'static str>,
    pub last_expression: Option<&'static str>,
    pub just_calculated: Option<bool>,
}

/// Feed labels through `Action::from_label`; unknown labels are skipped the
/// same way a front end would drop them.
pub fn apply_labels(
    state: &mut CalcState,
    opts: &DispatchOptions,
    labels: &[&str],
) -> DispatchResult {
    let mut last = DispatchResult::clean();
    for label in labels {
        if let Some(action) = Action::from_label(label) {
            last = dispatch(action, state, opts, &[]);
        }
    }
    last
}

pub fn run_labels(labels: &[&str]) -> CalcState {
    let mut state = CalcState::new();
    apply_labels(&mut state, &DispatchOptions::default(), labels);
    state
}

pub fn run_keys(keys: &str) -> CalcState {
    let mut state = CalcState::new();
    let opts = DispatchOptions::default();
    for ch in keys.chars() {
        if let Some(action) = translate_key(&KeyEvent::char(ch)) {
            let res = dispatch(action, &mut state, &opts, &[]);
            if res.quit {
                break;
            }
        }
    }
    state
}

/// Runs a scenario from the initial state and checks the expected end state.
pub fn run_scenario(steps: &[Step<'_>], expect: ScenarioExpect) -> CalcState {
    let mut state = CalcState::new();
    let opts = DispatchOptions::default();
    for step in steps {
        match step {
            Step::Labels(labels) => {
                apply_labels(&mut state, &opts, labels);
            }
            Step::Keys(seq) => {
                for ch in seq.chars() {
                    if let Some(action) = translate_key(&KeyEvent::char(ch)) {
                        dispatch(action, &mut state, &opts, &[]);
                    }
                }
            }
            Step::Action(action) => {
                dispatch(*action, &mut state, &opts, &[]);
            }
        }
    }

    if let Some(display) = expect.display {
        pretty_assertions::assert_eq!(state.display(), display, "display mismatch");
    }
    if let Some(last) = expect.last_expression {
        pretty_assertions::assert_eq!(state.last_expression(), last, "last expression mismatch");
    }
    if let Some(flag) = expect.just_calculated {
        assert_eq!(state.just_calculated, flag, "just_calculated mismatch");
    }
    state
}
