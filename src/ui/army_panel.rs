//! The shadow army panel.

use crate::army::types::{total_attack_bonus, ShadowRole};
use crate::core::game_state::GameState;
use crate::ui::{rank_color, SideTab, UiState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draws the shadow roster and the army's total attack contribution.
pub fn draw_army_panel(frame: &mut Frame, area: Rect, game_state: &GameState, ui: &UiState) {
    let shadows = &game_state.player.shadows;
    let block = Block::default().borders(Borders::ALL).title(format!(
        " {} ({}) ",
        SideTab::Army.title(),
        shadows.len()
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if shadows.is_empty() {
        let text = if game_state.player.job.can_extract() {
            "No shadows yet. Defeat a gate and use [e] to extract."
        } else {
            "The army awakens at level 10."
        };
        let empty = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let on_tab = ui.tab == SideTab::Army;
    let items: Vec<ListItem> = shadows
        .iter()
        .enumerate()
        .map(|(i, shadow)| {
            let selected = on_tab && i == ui.army_cursor;
            let cursor = if selected { "> " } else { "  " };
            let role_glyph = match shadow.role {
                ShadowRole::Knight => "K",
                ShadowRole::Soldier => "s",
            };
            let name_style = if selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::raw(cursor),
                Span::styled(
                    format!("[{}] ", shadow.rank.letter()),
                    Style::default().fg(rank_color(shadow.rank)),
                ),
                Span::styled(format!("({role_glyph}) "), Style::default().fg(Color::Magenta)),
                Span::styled(shadow.name.clone(), name_style),
                Span::styled(
                    format!("  +{} ATK", shadow.attack_bonus),
                    Style::default().fg(Color::Red),
                ),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), chunks[0]);

    let total = Paragraph::new(Line::from(Span::styled(
        format!("Army attack bonus: +{}", total_attack_bonus(shadows)),
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(total, chunks[1]);
}
