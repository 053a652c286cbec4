//! Terminal backend abstraction and crossterm implementation.
//!
//! The backend owns raw-mode / alternate-screen lifecycle; `input` converts
//! crossterm events into `core_events` so nothing above this crate sees
//! crossterm types.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::{Write, stdout};
use unicode_width::UnicodeWidthStr;

pub mod input;
pub use input::{map_event, read_event};

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Clear the screen and draw `lines` from the top, each right-aligned to `width`.
    fn draw_right_aligned(&mut self, lines: &[&str], width: u16) -> Result<()>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
    active: bool,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard {
            backend: self,
            active: true,
        })
    }
}

impl<'a> TerminalGuard<'a> {
    pub fn backend(&mut self) -> &mut CrosstermBackend {
        &mut *self.backend
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
            self.entered = true;
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            disable_raw_mode()?;
            self.entered = false;
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }

    fn draw_right_aligned(&mut self, lines: &[&str], width: u16) -> Result<()> {
        let mut out = stdout();
        queue!(out, Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            let col = right_aligned_column(line, width);
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(out, MoveTo(col, row), Print(line))?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl<'a> Drop for TerminalGuard<'a> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.backend.leave();
        }
    }
}

/// Start column that puts `line` flush against the right edge of a `width`
/// column terminal. Lines wider than the terminal start at column 0.
pub fn right_aligned_column(line: &str, width: u16) -> u16 {
    let cols = u16::try_from(UnicodeWidthStr::width(line)).unwrap_or(u16::MAX);
    width.saturating_sub(cols)
}

/// Current terminal width in columns.
pub fn terminal_width() -> Result<u16> {
    let (cols, _rows) = crossterm::terminal::size()?;
    Ok(cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_operator_glyphs_are_one_column() {
        assert_eq!(right_aligned_column("8 ÷ 0", 20), 15);
        assert_eq!(right_aligned_column("2 × 3", 5), 0);
    }

    #[test]
    fn wide_glyphs_take_two_columns() {
        // Fullwidth digits occupy two terminal cells each.
        assert_eq!(right_aligned_column("１２", 10), 6);
    }

    #[test]
    fn overlong_line_starts_at_left_edge() {
        assert_eq!(right_aligned_column("1234567890", 4), 0);
    }
}
