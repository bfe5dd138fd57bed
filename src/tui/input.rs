//! # Keyboard Map
//!
//! Turns keyboard `TuiEvent`s into core `Action`s.
//!
//! | Key                 | Action                 |
//! |---------------------|------------------------|
//! | `0`-`9`             | `Digit`                |
//! | `.` `,`             | `Point`                |
//! | `+` `-` `*` `x` `/` | `SetOperator`          |
//! | `Enter` `=`         | `Evaluate`             |
//! | `Esc`               | `ClearAll`             |
//! | `Backspace`         | `Backspace`            |
//! | `Delete`            | `ClearEntry`           |
//! | `Ctrl+P` `F2`       | `TogglePower`          |
//! | `q` `Ctrl+C`        | `Quit`                 |
//!
//! Calculator keys are dropped while the power is off. Power and quit
//! always go through.

use crate::core::action::Action;
use crate::core::arithmetic::Operator;
use crate::tui::event::TuiEvent;

pub fn action_for(event: &TuiEvent, powered: bool) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::Char('q' | 'Q') => Some(Action::Quit),
        TuiEvent::TogglePower => Some(Action::TogglePower),
        _ if !powered => None,
        TuiEvent::Char(c) => char_action(*c),
        TuiEvent::Enter => Some(Action::Evaluate),
        TuiEvent::Escape => Some(Action::ClearAll),
        TuiEvent::Backspace => Some(Action::Backspace),
        TuiEvent::Delete => Some(Action::ClearEntry),
        _ => None,
    }
}

fn char_action(c: char) -> Option<Action> {
    if let Some(d) = c.to_digit(10) {
        return Some(Action::Digit(d as u8));
    }
    match c {
        '.' | ',' => Some(Action::Point),
        '=' => Some(Action::Evaluate),
        _ => Operator::from_char(c).map(Action::SetOperator),
    }
}
