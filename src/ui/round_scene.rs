//! UI rendering for a round: play area, info panel, game-over overlay.

use super::background::Background;
use super::game_common::{
    centered_modal, create_game_layout, render_centered_lines, render_info_panel_frame,
    render_status_bar, stat_line,
};
use crate::round::{BoundingBox, RoundOverCause, RoundSnapshot};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Decor(char),
    Pipe,
    PipeLip,
    Avatar(char),
}

/// Viewport dimensions the snapshot coordinates refer to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Avatar glyph by vertical velocity.
fn avatar_glyph(velocity: f64) -> char {
    if velocity < -2.0 {
        '▲' // Rising
    } else if velocity > 4.0 {
        '▼' // Falling fast
    } else {
        '►'
    }
}

/// Just the scrolling backdrop on a `cols` x `rows` grid.
pub fn rasterize_backdrop(
    background: &Background,
    viewport: Viewport,
    cols: usize,
    rows: usize,
) -> Vec<Vec<Cell>> {
    let mut grid = vec![vec![Cell::Empty; cols]; rows];
    if cols == 0 || rows == 0 {
        return grid;
    }
    let cell_w = viewport.width / cols as f64;

    for (x, fy, glyph) in background.decorations() {
        if x < 0.0 || x >= viewport.width {
            continue;
        }
        let col = (x / cell_w) as usize;
        let row = (fy * rows as f64) as usize;
        if row < rows && col < cols {
            grid[row][col] = Cell::Decor(glyph);
        }
    }
    grid
}

/// Map the round onto a `cols` x `rows` grid of cells.
///
/// Each cell samples the viewport at its center point. The avatar is always
/// drawn in the cell holding its center, even when its hitbox is smaller
/// than a cell.
pub fn rasterize(
    snapshot: &RoundSnapshot,
    background: &Background,
    viewport: Viewport,
    cols: usize,
    rows: usize,
) -> Vec<Vec<Cell>> {
    let mut grid = rasterize_backdrop(background, viewport, cols, rows);
    if cols == 0 || rows == 0 {
        return grid;
    }
    let cell_w = viewport.width / cols as f64;
    let cell_h = viewport.height / rows as f64;

    let contains = |bbox: &BoundingBox, x: f64, y: f64| {
        x >= bbox.left && x < bbox.right() && y >= bbox.top && y < bbox.bottom()
    };

    for (row, line) in grid.iter_mut().enumerate() {
        let y = (row as f64 + 0.5) * cell_h;
        for (col, cell) in line.iter_mut().enumerate() {
            let x = (col as f64 + 0.5) * cell_w;
            for obstacle in &snapshot.obstacles {
                if contains(&obstacle.top, x, y) {
                    // Last row of the top pipe is its lip.
                    *cell = if y + cell_h >= obstacle.top.bottom() {
                        Cell::PipeLip
                    } else {
                        Cell::Pipe
                    };
                    break;
                }
                if contains(&obstacle.bottom, x, y) {
                    *cell = if y - cell_h < obstacle.bottom.top {
                        Cell::PipeLip
                    } else {
                        Cell::Pipe
                    };
                    break;
                }
            }
        }
    }

    let avatar = snapshot.avatar;
    let center_x = avatar.left + avatar.width / 2.0;
    let center_y = avatar.top + avatar.height / 2.0;
    if center_x >= 0.0 && center_y >= 0.0 {
        let col = (center_x / cell_w) as usize;
        let row = (center_y / cell_h) as usize;
        if row < rows && col < cols {
            grid[row][col] = Cell::Avatar(avatar_glyph(snapshot.avatar_velocity));
        }
    }

    grid
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::raw(" "),
        Cell::Decor(c) => Span::styled(c.to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
        Cell::PipeLip => Span::styled("▓", Style::default().fg(Color::LightGreen)),
        Cell::Avatar(c) => Span::styled(
            c.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// Render the round: play area, status bar and info panel.
pub fn render_round(
    frame: &mut Frame,
    area: Rect,
    snapshot: &RoundSnapshot,
    background: &Background,
    viewport: Viewport,
) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 22);

    render_play_area(frame, layout.content, snapshot, background, viewport);

    render_status_bar(
        frame,
        layout.status_bar,
        &format!("Score: {}", snapshot.score),
        Color::Green,
        &[("[Any key]", "Flap"), ("[Esc/q]", "Quit")],
    );

    render_info_panel(frame, layout.info_panel, snapshot);
}

fn render_play_area(
    frame: &mut Frame,
    area: Rect,
    snapshot: &RoundSnapshot,
    background: &Background,
    viewport: Viewport,
) {
    let grid = rasterize(
        snapshot,
        background,
        viewport,
        area.width as usize,
        area.height as usize,
    );
    render_grid(frame, area, grid);
}

/// Draw the scrolling backdrop alone, filling `area`.
pub fn render_backdrop(
    frame: &mut Frame,
    area: Rect,
    background: &Background,
    viewport: Viewport,
) {
    let grid = rasterize_backdrop(
        background,
        viewport,
        area.width as usize,
        area.height as usize,
    );
    render_grid(frame, area, grid);
}

fn render_grid(frame: &mut Frame, area: Rect, grid: Vec<Vec<Cell>>) {
    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| Line::from(row.into_iter().map(cell_span).collect::<Vec<_>>()))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &RoundSnapshot) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        stat_line("Score", snapshot.score.to_string(), Color::White),
        stat_line("Best", snapshot.high_score.to_string(), Color::Yellow),
        Line::from(""),
        stat_line("Pipes", snapshot.obstacles.len().to_string(), Color::Green),
        stat_line("Tick", snapshot.tick.to_string(), Color::DarkGray),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the round frozen behind a game-over modal.
pub fn render_game_over(
    frame: &mut Frame,
    area: Rect,
    snapshot: &RoundSnapshot,
    background: &Background,
    viewport: Viewport,
    cause: Option<RoundOverCause>,
) {
    render_round(frame, area, snapshot, background, viewport);

    let inner = centered_modal(frame, area, 36, 11, Color::Red);
    let reason = match cause {
        Some(RoundOverCause::Bounds) => "You flew out of the sky.",
        Some(RoundOverCause::Obstacle) => "You hit a pipe.",
        None => "",
    };
    let new_best = snapshot.score > 0 && snapshot.score == snapshot.high_score;

    let mut lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(reason, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(format!("High Score: {}", snapshot.high_score)),
    ];
    if new_best {
        lines.push(Line::from(Span::styled(
            "New high score!",
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to restart",
        Style::default().fg(Color::Green),
    )));

    render_centered_lines(frame, inner, lines);
}
