//! # TitleBar Component
//!
//! Top status line: power state, the pending expression, and the theme.
//!
//! The text changes based on state:
//!
//! 1. **Off**: `" Calcpad ○ OFF  ·  theme: light"`
//! 2. **On, operator pending**: `" Calcpad ● ON  ·  12 ×  ·  theme: dark"`
//! 3. **On, nothing pending**: `" Calcpad ● ON  ·  theme: dark"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct TitleBar<'a> {
    pub powered: bool,
    /// `"12 ×"` while an operator is pending.
    pub pending: Option<String>,
    pub theme: Theme,
    pub palette: &'a Palette,
}

impl TitleBar<'_> {
    pub fn text(&self) -> String {
        let power = if self.powered { "● ON" } else { "○ OFF" };
        match &self.pending {
            Some(expr) => format!(" Calcpad {power}  ·  {expr}  ·  theme: {}", self.theme),
            None => format!(" Calcpad {power}  ·  theme: {}", self.theme),
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(self.text(), self.palette.muted));
        frame.render_widget(line, area);
    }
}
