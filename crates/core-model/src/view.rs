//! Presentation snapshot of the two display lines.

/// Rendering switches, usually taken from the `[display]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub group_thousands: bool,
    pub show_last_expression: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            group_thousands: false,
            show_last_expression: true,
        }
    }
}

/// The upper (last expression) and main (current buffer) lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayView {
    pub expression: String,
    pub display: String,
}
