//! Key -> Action translation for keyboard-driven front ends.
//!
//! Stateless: every calculator key maps to exactly one action, so there is no
//! pending/count state to carry between presses.
//!
//! Bindings:
//! * `0`-`9` digits, `.` or `,` decimal point
//! * `+` `-` `*`/`x` `/` operators, `%` percent, `n`/`_` sign toggle
//! * `=` or Enter evaluate
//! * Esc, Delete, `c`/`C` clear
//! * `q` or Ctrl-C quit

use crate::{Action, EditKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_text::Operator;

pub fn translate_key(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::CTRL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Quit),
            _ => None,
        };
    }
    let action = match key.code {
        KeyCode::Char(c) => return translate_char(c),
        KeyCode::Enter => Action::Evaluate,
        KeyCode::Esc | KeyCode::Delete => Action::Clear,
        KeyCode::Backspace | KeyCode::Tab => return None,
    };
    Some(action)
}

fn translate_char(c: char) -> Option<Action> {
    let edit = |kind| Some(Action::Edit(kind));
    match c {
        '0'..='9' => edit(EditKind::Digit(c as u8 - b'0')),
        '.' | ',' => edit(EditKind::DecimalPoint),
        '+' => edit(EditKind::Operator(Operator::Add)),
        '-' => edit(EditKind::Operator(Operator::Subtract)),
        '*' | 'x' | 'X' | '×' => edit(EditKind::Operator(Operator::Multiply)),
        '/' | '÷' => edit(EditKind::Operator(Operator::Divide)),
        '%' => edit(EditKind::Percent),
        'n' | 'N' | '_' | '±' => edit(EditKind::ToggleSign),
        '=' => Some(Action::Evaluate),
        'c' | 'C' => Some(Action::Clear),
        'q' | 'Q' => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> Option<Action> {
        translate_key(&KeyEvent::char(c))
    }

    #[test]
    fn digits_map_to_digit_edits() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(key(c), Some(Action::Edit(EditKind::Digit(i as u8))));
        }
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_clears() {
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            mods: KeyModifiers::CTRL,
        };
        assert_eq!(translate_key(&ctrl_c), Some(Action::Quit));
        assert_eq!(key('c'), Some(Action::Clear));
    }

    #[test]
    fn named_keys() {
        assert_eq!(
            translate_key(&KeyEvent::plain(KeyCode::Enter)),
            Some(Action::Evaluate)
        );
        assert_eq!(
            translate_key(&KeyEvent::plain(KeyCode::Esc)),
            Some(Action::Clear)
        );
        assert_eq!(translate_key(&KeyEvent::plain(KeyCode::Backspace)), None);
    }

    #[test]
    fn comma_is_decimal_point() {
        assert_eq!(key(','), Some(Action::Edit(EditKind::DecimalPoint)));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        for c in ['a', '(', ' ', '^'] {
            assert_eq!(key(c), None, "{c:?}");
        }
    }
}
