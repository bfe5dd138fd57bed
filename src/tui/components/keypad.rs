//! # Keypad Component
//!
//! The clickable button grid. It is the pointer half of the input adapter;
//! keyboard input is mapped in `tui::input`.
//!
//! ```text
//! [ON/OFF] [  C  ] [ CE  ] [  ⌫  ]
//! [  7   ] [  8  ] [  9  ] [  ÷  ]
//! [  4   ] [  5  ] [  6  ] [  ×  ]
//! [  1   ] [  2  ] [  3  ] [  −  ]
//! [  0   ] [  .  ] [  =  ] [  +  ]
//! ```
//!
//! Button rectangles are recorded during render and reused for hit testing,
//! so clicks always match what is on screen.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::arithmetic::Operator;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

/// How long a pressed button stays highlighted.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Power,
    Clear,
    ClearEntry,
    Backspace,
    Digit(u8),
    Point,
    Operator(Operator),
    Equals,
}

const ROWS: usize = 5;
const COLS: usize = 4;

pub const LAYOUT: [[Key; COLS]; ROWS] = [
    [Key::Power, Key::Clear, Key::ClearEntry, Key::Backspace],
    [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Operator(Operator::Div)],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Operator(Operator::Mul)],
    [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Operator(Operator::Sub)],
    [Key::Digit(0), Key::Point, Key::Equals, Key::Operator(Operator::Add)],
];

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Key {
    pub fn label(self) -> &'static str {
        match self {
            Key::Power => "ON/OFF",
            Key::Clear => "C",
            Key::ClearEntry => "CE",
            Key::Backspace => "⌫",
            Key::Digit(d) => DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?"),
            Key::Point => ".",
            Key::Operator(op) => op.symbol(),
            Key::Equals => "=",
        }
    }

    pub fn action(self) -> Action {
        match self {
            Key::Power => Action::TogglePower,
            Key::Clear => Action::ClearAll,
            Key::ClearEntry => Action::ClearEntry,
            Key::Backspace => Action::Backspace,
            Key::Digit(d) => Action::Digit(d),
            Key::Point => Action::Point,
            Key::Operator(op) => Action::SetOperator(op),
            Key::Equals => Action::Evaluate,
        }
    }

    /// The button a keyboard action corresponds to, for highlighting.
    pub fn for_action(action: Action) -> Option<Self> {
        match action {
            Action::TogglePower => Some(Key::Power),
            Action::ClearAll => Some(Key::Clear),
            Action::ClearEntry => Some(Key::ClearEntry),
            Action::Backspace => Some(Key::Backspace),
            Action::Digit(d) => Some(Key::Digit(d)),
            Action::Point => Some(Key::Point),
            Action::SetOperator(op) => Some(Key::Operator(op)),
            Action::Evaluate => Some(Key::Equals),
            Action::ErrorTimeout { .. } | Action::Quit => None,
        }
    }

    fn style(self, palette: &Palette) -> Style {
        match self {
            Key::Digit(_) | Key::Point => palette.digit_key,
            Key::Operator(_) | Key::Equals => palette.operator_key,
            Key::Power | Key::Clear | Key::ClearEntry | Key::Backspace => palette.control_key,
        }
    }
}

/// Splits `area` into the button grid, row-major.
pub fn button_rects(area: Rect) -> Vec<(Key, Rect)> {
    let rows = Layout::vertical([Constraint::Fill(1); ROWS]).split(area);
    let mut buttons = Vec::with_capacity(ROWS * COLS);
    for (row_keys, row_area) in LAYOUT.iter().zip(rows.iter()) {
        let cols = Layout::horizontal([Constraint::Fill(1); COLS]).split(*row_area);
        for (key, rect) in row_keys.iter().zip(cols.iter()) {
            buttons.push((*key, *rect));
        }
    }
    buttons
}

/// Persistent keypad state: last rendered geometry and the pressed button.
#[derive(Debug, Default)]
pub struct KeypadState {
    buttons: Vec<(Key, Rect)>,
    pressed: Option<(Key, Instant)>,
}

impl KeypadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the button geometry for `area`.
    pub fn layout(&mut self, area: Rect) {
        self.buttons = button_rects(area);
    }

    pub fn key_at(&self, column: u16, row: u16) -> Option<Key> {
        let position = Position::new(column, row);
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(key, _)| *key)
    }

    pub fn press(&mut self, key: Key) {
        self.pressed = Some((key, Instant::now()));
    }

    /// Highlights the button matching a keyboard action, if any.
    pub fn highlight_action(&mut self, action: Action) {
        if let Some(key) = Key::for_action(action) {
            self.press(key);
        }
    }

    pub fn pressed_key(&self) -> Option<Key> {
        self.pressed
            .filter(|(_, at)| at.elapsed() < HIGHLIGHT_DURATION)
            .map(|(key, _)| key)
    }

    pub fn is_highlighting(&self) -> bool {
        self.pressed_key().is_some()
    }
}

impl EventHandler for KeypadState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::MouseDown(column, row) => {
                let key = self.key_at(*column, *row)?;
                log::debug!("Keypad click: {:?}", key);
                self.press(key);
                Some(key.action())
            }
            _ => None,
        }
    }
}

/// Render-time view over `KeypadState`.
pub struct Keypad<'a> {
    pub state: &'a mut KeypadState,
    pub palette: &'a Palette,
    pub powered: bool,
}

impl Component for Keypad<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.layout(area);
        let pressed = self.state.pressed_key();

        for (key, rect) in &self.state.buttons {
            let mut style = key.style(self.palette);
            if !self.powered && *key != Key::Power {
                style = style.add_modifier(Modifier::DIM);
            }
            if pressed == Some(*key) {
                style = self.palette.pressed_key;
            }

            // Vertically centre the label inside the border
            let inner_height = rect.height.saturating_sub(2);
            let padding = inner_height.saturating_sub(1) / 2;
            let block = Block::bordered()
                .border_style(self.palette.border)
                .padding(Padding::top(padding));
            let button = Paragraph::new(key.label())
                .alignment(Alignment::Center)
                .style(style)
                .block(block);
            frame.render_widget(button, *rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_layout_has_every_digit_once() {
        for d in 0..=9u8 {
            let count = LAYOUT
                .iter()
                .flatten()
                .filter(|k| **k == Key::Digit(d))
                .count();
            assert_eq!(count, 1, "digit {d}");
        }
    }

    #[test]
    fn test_every_key_maps_back_from_its_action() {
        for key in LAYOUT.iter().flatten() {
            assert_eq!(Key::for_action(key.action()), Some(*key));
        }
    }

    #[test]
    fn test_key_at_corners() {
        let mut state = KeypadState::new();
        state.layout(Rect::new(0, 0, 40, 15));
        assert_eq!(state.key_at(0, 0), Some(Key::Power));
        assert_eq!(state.key_at(39, 14), Some(Key::Operator(Operator::Add)));
        assert_eq!(state.key_at(15, 4), Some(Key::Digit(8)));
        assert_eq!(state.key_at(40, 14), None);
    }

    #[test]
    fn test_click_emits_action_and_highlights() {
        let mut state = KeypadState::new();
        state.layout(Rect::new(10, 5, 40, 15));
        assert_eq!(state.handle_event(&TuiEvent::MouseDown(5, 5)), None);
        let action = state.handle_event(&TuiEvent::MouseDown(12, 18));
        assert_eq!(action, Some(Action::Digit(0)));
        assert_eq!(state.pressed_key(), Some(Key::Digit(0)));
        assert_eq!(state.handle_event(&TuiEvent::Char('1')), None);
    }

    #[test]
    fn test_highlight_action_ignores_timeouts() {
        let mut state = KeypadState::new();
        state.highlight_action(Action::ErrorTimeout { generation: 1 });
        assert!(!state.is_highlighting());
        state.highlight_action(Action::Evaluate);
        assert_eq!(state.pressed_key(), Some(Key::Equals));
    }

    #[test]
    fn test_render_shows_labels() {
        let backend = TestBackend::new(44, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = KeypadState::new();
        let palette = Palette::for_theme(crate::core::theme::Theme::Dark);
        terminal
            .draw(|f| {
                let area = f.area();
                Keypad {
                    state: &mut state,
                    palette: &palette,
                    powered: true,
                }
                .render(f, area);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("ON/OFF"));
        assert!(text.contains("CE"));
        assert!(text.contains('÷'));
        assert_eq!(state.buttons.len(), 20);
    }
}
