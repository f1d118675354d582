//! The inventory panel: owned items, equip markers, item detail.

use crate::core::game_state::GameState;
use crate::items::types::{ItemKind, OwnedItem};
use crate::ui::{SideTab, UiState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn kind_tag(item: &OwnedItem) -> (&'static str, Color) {
    match item.kind {
        ItemKind::Consumable(_) => ("use", Color::Green),
        ItemKind::Weapon { .. } => ("wpn", Color::Red),
        ItemKind::Armor { .. } => ("arm", Color::Blue),
    }
}

/// Draws the inventory list with equip markers and a detail line for
/// the selected item.
pub fn draw_inventory_panel(frame: &mut Frame, area: Rect, game_state: &GameState, ui: &UiState) {
    let inventory = &game_state.player.inventory;
    let block = Block::default().borders(Borders::ALL).title(format!(
        " {} ({}) ",
        SideTab::Inventory.title(),
        inventory.len()
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inventory.is_empty() {
        let empty = Paragraph::new("Nothing here yet. Visit the shop with [s].")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    let on_tab = ui.tab == SideTab::Inventory;
    let items: Vec<ListItem> = inventory
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = on_tab && i == ui.inventory_cursor;
            let cursor = if selected { "> " } else { "  " };
            let equip_marker = if item.equipped { "[E] " } else { "    " };
            let (tag, tag_color) = kind_tag(item);
            let name_style = if selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::raw(cursor),
                Span::styled(equip_marker, Style::default().fg(Color::Cyan)),
                Span::styled(format!("[{tag}] "), Style::default().fg(tag_color)),
                Span::styled(item.name.clone(), name_style),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), chunks[0]);

    // Detail line for the selected item
    let detail = inventory
        .get(ui.inventory_cursor)
        .map(|item| item.description.clone())
        .unwrap_or_default();
    let hint = Line::from(Span::styled(
        "[Enter] equip/use",
        Style::default().fg(Color::DarkGray),
    ));
    let detail_widget = Paragraph::new(vec![
        Line::from(Span::styled(detail, Style::default().fg(Color::Gray))),
        hint,
    ]);
    frame.render_widget(detail_widget, chunks[1]);
}
