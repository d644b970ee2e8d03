//! Screen layout: title, last render, key help, status bar.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::KEY_HELP;
use super::app::App;

pub fn render(frame: &mut Frame, app: &App<'_>) {
    let [body_area, help_area, status_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let corpus = app.session.corpus();
    let body = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("corpus ", Style::default().fg(Color::DarkGray)),
            Span::raw(corpus.name()),
        ]),
        Line::from(app.last_render()),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(" inkstep "));
    frame.render_widget(body, body_area);

    frame.render_widget(
        Paragraph::new(KEY_HELP).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    frame.render_widget(
        Paragraph::new(app.status_text()).style(Style::default().fg(Color::Black).bg(Color::Cyan)),
        status_area,
    );
}
