use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

use crate::core::state::Calculator;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DISPLAY_HEIGHT, Display, Keypad, TitleBar};

/// Widest the calculator body grows; extra terminal width is margin.
const BODY_MAX_WIDTH: u16 = 44;
/// Tallest the calculator body grows.
const BODY_MAX_HEIGHT: u16 = 26;

const HELP_TEXT: &str = "^P power · ^T theme · Esc C · Del CE · q quit";

pub fn draw_ui(frame: &mut Frame, calc: &Calculator, tui: &mut TuiState) {
    let palette = tui.palette;
    frame.render_widget(Block::default().style(palette.base), frame.area());

    let body = body_area(frame.area());
    use Constraint::{Fill, Length};
    let layout = Layout::vertical([Length(1), Length(DISPLAY_HEIGHT), Fill(1), Length(1)]);
    let [title_area, display_area, keypad_area, help_area] = layout.areas(body);

    TitleBar {
        powered: calc.power_on,
        pending: calc.pending_expression(),
        theme: tui.theme,
        palette: &palette,
    }
    .render(frame, title_area);

    Display::from_state(calc, &palette).render(frame, display_area);

    Keypad {
        state: &mut tui.keypad,
        palette: &palette,
        powered: calc.power_on,
    }
    .render(frame, keypad_area);

    let help = Line::from(Span::styled(HELP_TEXT, palette.muted)).centered();
    frame.render_widget(help, help_area);
}

/// Centres the calculator body inside the frame.
fn body_area(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(BODY_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [body] = Layout::vertical([Constraint::Length(BODY_MAX_HEIGHT)])
        .flex(Flex::Center)
        .areas(column);
    body
}
