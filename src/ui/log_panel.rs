//! The System log: the scrolling record of everything that happened.

use crate::core::game_state::{GameState, LogKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn log_color(kind: LogKind) -> Color {
    match kind {
        LogKind::Info => Color::Gray,
        LogKind::System => Color::Cyan,
        LogKind::Combat => Color::White,
        LogKind::Gain => Color::Green,
        LogKind::Danger => Color::Red,
    }
}

/// Draws the log panel, newest entries at the bottom.
pub fn draw_log_panel(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title(" System Log ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let lines: Vec<Line> = game_state
        .log
        .iter()
        .rev()
        .take(visible)
        .map(|entry| {
            Line::from(Span::styled(
                entry.text.clone(),
                Style::default().fg(log_color(entry.kind)),
            ))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
