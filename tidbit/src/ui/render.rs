//! Top-level rendering for the demo TUI.

use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets;

pub fn render(f: &mut Frame, app: &App, now: Instant) {
    let [header, body, footer] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(4)])
            .areas(f.area());

    render_header(f, app, header);
    render_body(f, app, body, now);
    render_footer(f, app, footer);

    // The overlay floats above everything else, mounted on the full frame.
    widgets::overlay::render(f, app.loader.engine(), app.animation_frame, now, f.area());
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let state = if app.loader.is_active() {
        let category = app.loader.current_category().unwrap_or("?");
        Span::styled(
            format!(" rotating \"{category}\" "),
            app.theme.state_style(true),
        )
    } else {
        Span::styled(" idle ", app.theme.state_style(false))
    };

    let title = Line::from(vec![
        Span::styled(" tidbit", app.theme.title_style()),
        Span::raw(" -"),
        state,
    ]);

    f.render_widget(
        Paragraph::new(title)
            .block(Block::bordered().border_style(app.theme.border_style()))
            .alignment(Alignment::Left),
        area,
    );
}

fn render_body(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let [_, gauge_area, info_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Fill(2),
    ])
    .areas(area);

    let gauge_area = center_horizontally(gauge_area, 50);
    let progress = app.progress(now);

    f.render_widget(
        Gauge::default()
            .block(
                Block::bordered()
                    .title(" simulated job ")
                    .border_style(app.theme.border_style()),
            )
            .gauge_style(ratatui::style::Style::default().fg(app.theme.progress_filled))
            .ratio(progress)
            .label(Span::styled(
                format!("{:>3.0}%", progress * 100.0),
                ratatui::style::Style::default().fg(app.theme.progress_label),
            )),
        gauge_area,
    );

    let info = Line::from(vec![
        Span::styled("next category: ", app.theme.hint_style()),
        Span::raw(app.selected_category().to_string()),
        Span::styled("   interval: ", app.theme.hint_style()),
        Span::raw(format!("{:.1}s", app.loader.interval().as_secs_f32())),
    ]);
    f.render_widget(
        Paragraph::new(info).alignment(Alignment::Center),
        info_area,
    );
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = Line::styled(
        " s start  x stop  c category  +/- interval  b bold  q quit",
        app.theme.hint_style(),
    );
    let status = Line::styled(
        format!(" {}", app.status_message().unwrap_or("")),
        app.theme.status_style(),
    );

    f.render_widget(
        Paragraph::new(vec![hints, status])
            .block(Block::bordered().border_style(app.theme.border_style())),
        area,
    );
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use tidbit_core::FactLoader;

    fn header_row(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let now = Instant::now();
        terminal.draw(|f| render(f, app, now)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..80).map(|x| buffer[(x, 1)].symbol()).collect()
    }

    #[test]
    fn test_header_shows_idle_state_with_spaced_separator() {
        let app = App::new(FactLoader::default(), Instant::now());
        assert!(header_row(&app).contains("tidbit - idle"));
    }

    #[test]
    fn test_header_shows_active_category() {
        let now = Instant::now();
        let mut app = App::new(FactLoader::default(), now);
        app.start_rotation(now);
        assert!(header_row(&app).contains("tidbit - rotating \"general\""));
    }
}
