//! Color theme for the demo chrome (everything that is not the overlay; the
//! overlay styles itself from its own configuration).

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,
    pub title: Color,
    pub progress_filled: Color,
    pub progress_label: Color,
    pub hint_text: Color,
    pub status_text: Color,
    pub active: Color,
    pub inactive: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            title: Color::Cyan,
            progress_filled: Color::LightBlue,
            progress_label: Color::White,
            hint_text: Color::DarkGray,
            status_text: Color::Gray,
            active: Color::Green,
            inactive: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint_text)
    }

    pub fn status_style(&self) -> Style {
        Style::default()
            .fg(self.status_text)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn state_style(&self, active: bool) -> Style {
        Style::default().fg(if active { self.active } else { self.inactive })
    }
}
