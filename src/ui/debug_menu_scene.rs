//! Debug menu UI rendering.

use crate::utils::debug_menu::{DebugMenu, DEBUG_OPTIONS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the debug menu as a centered overlay.
pub fn render_debug_menu(frame: &mut Frame, area: Rect, menu: &DebugMenu) {
    let longest = DEBUG_OPTIONS
        .iter()
        .map(|option| option.len())
        .max()
        .unwrap_or(0) as u16;
    let menu_width = (longest + 8).max(34);
    let menu_height = DEBUG_OPTIONS.len() as u16 + 4;

    let menu_area = Rect {
        x: area.x + area.width.saturating_sub(menu_width) / 2,
        y: area.y + area.height.saturating_sub(menu_height) / 2,
        width: menu_width.min(area.width),
        height: menu_height.min(area.height),
    };

    frame.render_widget(Clear, menu_area);

    let block = Block::default()
        .title(" Debug Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(menu_area);
    frame.render_widget(block, menu_area);

    let mut lines: Vec<Line> = DEBUG_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if i == menu.selected_index {
                Line::from(Span::styled(
                    format!("> {option}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {option}"),
                    Style::default().fg(Color::White),
                ))
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Up/Down] Navigate  [Enter] Trigger  [`] Close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the debug mode indicator in the top-right corner.
pub fn render_debug_indicator(frame: &mut Frame, area: Rect) {
    let label = "[DEBUG]";
    let width = label.len() as u16;
    let indicator_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y,
        width: width.min(area.width),
        height: 1,
    };
    let indicator = Paragraph::new(label).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(indicator, indicator_area);
}
