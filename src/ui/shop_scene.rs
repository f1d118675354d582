//! The hunter shop: catalog browsing and purchases.

use crate::core::game_state::GameState;
use crate::items::types::{ItemCategory, ItemKind, ItemTemplate};
use crate::ui::UiState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn stat_summary(template: &ItemTemplate) -> String {
    match template.kind {
        ItemKind::Consumable(_) => template.description.clone(),
        ItemKind::Weapon { attack_bonus } => format!("ATK +{attack_bonus}"),
        ItemKind::Armor {
            slot,
            defense_bonus,
        } => format!("{} DEF +{defense_bonus}", slot.name()),
    }
}

/// Draws the shop in place of the gate scene while it is open.
pub fn draw_shop(frame: &mut Frame, area: Rect, game_state: &GameState, ui: &UiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Hunter Shop ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter tabs
            Constraint::Min(1),    // Item rows
            Constraint::Length(1), // Gold
        ])
        .split(inner);

    draw_filter_tabs(frame, chunks[0], ui);
    draw_rows(frame, chunks[1], game_state, ui);

    let gold = Paragraph::new(Line::from(Span::styled(
        format!("Gold: {}", game_state.player.gold),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(gold, chunks[2]);
}

fn draw_filter_tabs(frame: &mut Frame, area: Rect, ui: &UiState) {
    let mut spans = Vec::new();
    let mut push_tab = |spans: &mut Vec<Span>, label: &'static str, active: bool| {
        let style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    };

    push_tab(&mut spans, "All", ui.shop_filter.is_none());
    for category in ItemCategory::all() {
        push_tab(
            &mut spans,
            category.name(),
            ui.shop_filter == Some(category),
        );
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_rows(frame: &mut Frame, area: Rect, game_state: &GameState, ui: &UiState) {
    let rows = ui.visible_shop_items();
    if rows.is_empty() {
        let empty =
            Paragraph::new("Nothing in this category.").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor on screen.
    let view = area.height as usize;
    let offset = if ui.shop_cursor >= view {
        ui.shop_cursor + 1 - view
    } else {
        0
    };

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(view)
        .map(|(i, template)| {
            let selected = i == ui.shop_cursor;
            let cursor = if selected { "> " } else { "  " };
            let affordable = game_state.player.gold >= template.price;
            let price_style = if affordable {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Red)
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
                Span::styled(format!("{:<24}", template.name), name_style),
                Span::styled(format!("{:>8}g  ", template.price), price_style),
                Span::styled(stat_summary(template), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), area);
}
