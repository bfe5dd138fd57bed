//! Colours for each theme. The core only knows `Theme`; styles live here.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub base: Style,
    pub border: Style,
    pub display: Style,
    pub display_disabled: Style,
    pub error: Style,
    pub digit_key: Style,
    pub operator_key: Style,
    pub control_key: Style,
    pub pressed_key: Style,
    pub muted: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                border: Style::default().fg(Color::Gray),
                display: Style::default()
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                display_disabled: Style::default().fg(Color::Gray),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                digit_key: Style::default().fg(Color::Black),
                operator_key: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                control_key: Style::default().fg(Color::Magenta),
                pressed_key: Style::default().fg(Color::White).bg(Color::Blue),
                muted: Style::default().fg(Color::DarkGray),
            },
            Theme::Dark => Self {
                base: Style::default().fg(Color::White).bg(Color::Black),
                border: Style::default().fg(Color::DarkGray),
                display: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                display_disabled: Style::default().fg(Color::DarkGray),
                error: Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
                digit_key: Style::default().fg(Color::White),
                operator_key: Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
                control_key: Style::default().fg(Color::LightMagenta),
                pressed_key: Style::default().fg(Color::Black).bg(Color::LightCyan),
                muted: Style::default().fg(Color::Gray),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light, dark);
        assert_eq!(light.base.bg, Some(Color::White));
        assert_eq!(dark.base.bg, Some(Color::Black));
    }
}
