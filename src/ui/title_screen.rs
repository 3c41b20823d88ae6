//! Start screen shown before the first round, over the scrolling backdrop.

use super::background::Background;
use super::game_common::render_centered_lines;
use super::round_scene::{render_backdrop, Viewport};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

pub fn render_title(
    frame: &mut Frame,
    area: Rect,
    high_score: u32,
    background: &Background,
    viewport: Viewport,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_backdrop(frame, inner, background, viewport);

    let lines = vec![
        Line::from(Span::styled(
            "Flappy Bird",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("High Score: {}", high_score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Any Key to Start",
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            "[Esc/q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_centered_lines(frame, inner, lines);
}
