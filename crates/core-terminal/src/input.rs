//! crossterm -> `core_events` conversion.

use anyhow::Result;
use core_events::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{self as ct, KeyCode as CCode, KeyEventKind, KeyModifiers as CMods};

/// Block until the next terminal event and convert it. Events without a
/// calculator meaning (mouse, focus, key releases) yield `None`.
pub fn read_event() -> Result<Option<InputEvent>> {
    let raw = ct::read()?;
    Ok(map_event(raw))
}

pub fn map_event(raw: ct::Event) -> Option<InputEvent> {
    match raw {
        ct::Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            let code = map_code(key.code)?;
            Some(InputEvent::Key(KeyEvent {
                code,
                mods: map_mods(key.modifiers),
            }))
        }
        ct::Event::Resize(cols, rows) => Some(InputEvent::Resize(cols, rows)),
        _ => None,
    }
}

fn map_code(code: CCode) -> Option<KeyCode> {
    Some(match code {
        CCode::Char(c) => KeyCode::Char(c),
        CCode::Enter => KeyCode::Enter,
        CCode::Esc => KeyCode::Esc,
        CCode::Backspace => KeyCode::Backspace,
        CCode::Tab => KeyCode::Tab,
        CCode::Delete => KeyCode::Delete,
        _ => return None,
    })
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}
