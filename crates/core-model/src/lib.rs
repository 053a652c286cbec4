//! High-level calculator model: the single entry point for front ends.
//!
//! `CalcModel` owns the `CalcState` together with dispatch options and any
//! registered observers. It exposes the presentation contract:
//!
//! * `on_token(label)` - one call per button press; unknown labels are ignored.
//! * `current_display()` - never empty.
//! * `last_expression()` - empty, or the buffer as it was at the last `=`.
//!
//! Rendering concerns (thousands grouping, hiding the expression line) live
//! in `DisplayView`, derived on demand and never written back into the state.

use core_actions::{Action, ActionObserver, DispatchOptions, DispatchResult, dispatch};
use core_state::CalcState;
use core_text::group_thousands;

mod view;
pub use view::{DisplayView, ViewOptions};

pub struct CalcModel {
    state: CalcState,
    options: DispatchOptions,
    observers: Vec<Box<dyn ActionObserver>>,
}

impl Default for CalcModel {
    fn default() -> Self {
        Self::new(DispatchOptions::default())
    }
}

impl CalcModel {
    pub fn new(options: DispatchOptions) -> Self {
        Self {
            state: CalcState::new(),
            options,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn ActionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Handle one button label. Unrecognized labels are a no-op.
    pub fn on_token(&mut self, label: &str) -> DispatchResult {
        match Action::from_label(label) {
            Some(action) => self.dispatch(action),
            None => {
                tracing::trace!(target: "actions.dispatch", label, "unrecognized_label");
                DispatchResult::clean()
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        dispatch(action, &mut self.state, &self.options, &self.observers)
    }

    pub fn current_display(&self) -> &str {
        self.state.display()
    }

    pub fn last_expression(&self) -> &str {
        self.state.last_expression()
    }

    /// Presentation snapshot of both display lines.
    pub fn view(&self, opts: &ViewOptions) -> DisplayView {
        let group = |s: &str| {
            if opts.group_thousands {
                group_thousands(s)
            } else {
                s.to_string()
            }
        };
        DisplayView {
            expression: if opts.show_last_expression {
                group(self.last_expression())
            } else {
                String::new()
            },
            display: group(self.current_display()),
        }
    }
}
