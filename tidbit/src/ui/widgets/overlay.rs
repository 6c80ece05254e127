//! The floating fact overlay.
//!
//! Draws the presentation engine's state: a centered box with a spinner and
//! the current fact. "Opacity" is rendered by blending the text color toward
//! the box background, so cross-fades and hides read as real fades even
//! though terminals have no alpha channel.

use std::time::Instant;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use tidbit_core::{OverlayConfig, OverlayPhase, PresentationEngine, Rgb};

/// Braille spinner frames, advanced by the app's animation counter.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the overlay centered in `viewport` (the host's mount surface),
/// over whatever is beneath it. Does nothing when Absent.
pub fn render(
    f: &mut Frame,
    engine: &PresentationEngine,
    frame_count: u8,
    now: Instant,
    viewport: Rect,
) {
    if engine.phase() == OverlayPhase::Absent {
        return;
    }
    let Some(fact) = engine.current_fact() else {
        return;
    };

    let config = engine.config();
    let text = decorate(fact, config);
    let area = overlay_area(viewport, config, &text);
    if area.width < 6 || area.height < 4 {
        return;
    }

    let opacity = engine.opacity(now);
    let background = to_color(config.background);
    let text_color = to_color(config.background.blend(config.foreground, opacity));

    let mut text_style = Style::default().fg(text_color).bg(background);
    if config.bold {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    if config.italic {
        text_style = text_style.add_modifier(Modifier::ITALIC);
    }

    let spinner = SPINNER[usize::from(frame_count) % SPINNER.len()];
    let spinner_style = Style::default()
        .fg(to_color(config.background.blend(Rgb::new(173, 216, 230), opacity)))
        .bg(background);

    let lines = vec![
        Line::styled(spinner.to_string(), spinner_style),
        Line::default(),
        Line::styled(text, text_style),
    ];

    let block = Block::bordered()
        .border_style(Style::default().fg(text_color).bg(background))
        .style(Style::default().bg(background));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Apply the configured case transform and letter spacing.
fn decorate(fact: &str, config: &OverlayConfig) -> String {
    let text = config.transform.apply(fact);
    if config.letter_spacing == 0 {
        return text;
    }
    let pad = " ".repeat(usize::from(config.letter_spacing));
    let mut out = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 && ch != ' ' {
            out.push_str(&pad);
        }
        out.push(ch);
    }
    out
}

/// Centered rect sized to the text within the configured width bounds.
fn overlay_area(viewport: Rect, config: &OverlayConfig, text: &str) -> Rect {
    let text_len = text.chars().count() as u16;

    let max_width = config
        .max_width
        .min(viewport.width.saturating_sub(2))
        .max(config.min_width.min(viewport.width));
    let width = (text_len + 4).clamp(config.min_width.min(max_width), max_width);

    let inner = width.saturating_sub(4).max(1);
    let text_lines = text_len.div_ceil(inner);
    // Borders, spinner line, separator line, then the wrapped fact.
    let height = (text_lines + 4).min(viewport.height);

    let x = viewport.x + viewport.width.saturating_sub(width) / 2;
    let y = viewport.y + viewport.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
