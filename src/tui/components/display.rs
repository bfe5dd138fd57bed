//! # Display Component
//!
//! The calculator's readout. Stateless: it renders whatever text and flags
//! it is given, right-aligned like a physical display.
//!
//! - Powered off: text is dimmed (the "disabled" projection of state).
//! - Error active: text uses the palette's error style.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::state::Calculator;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

/// Rows the display needs: one line of text plus borders.
pub const DISPLAY_HEIGHT: u16 = 3;

pub struct Display<'a> {
    pub text: &'a str,
    pub disabled: bool,
    pub error: bool,
    pub palette: &'a Palette,
}

impl<'a> Display<'a> {
    /// Projects the calculator state onto display props.
    pub fn from_state(calc: &'a Calculator, palette: &'a Palette) -> Self {
        Self {
            text: &calc.display,
            disabled: calc.is_disabled(),
            error: calc.error_active,
            palette,
        }
    }
}

impl Component for Display<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.disabled {
            self.palette.display_disabled
        } else if self.error {
            self.palette.error
        } else {
            self.palette.display
        };

        let block = Block::bordered()
            .border_style(self.palette.border)
            .padding(Padding::horizontal(1));
        let paragraph = Paragraph::new(self.text)
            .alignment(Alignment::Right)
            .style(style)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
