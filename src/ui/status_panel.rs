//! The hunter status panel: identity, resource gauges, attributes.

use crate::character::attributes::AttributeType;
use crate::combat::logic::{attack_power, crit_chance, defense_value};
use crate::core::game_state::GameState;
use crate::ui::{SideTab, UiState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the status panel: identity header, HP/MP/EXP gauges,
/// attributes with the allocation cursor, and derived combat numbers.
pub fn draw_status_panel(frame: &mut Frame, area: Rect, game_state: &GameState, ui: &UiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", SideTab::Status.title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Identity
            Constraint::Length(2), // HP gauge
            Constraint::Length(2), // MP gauge
            Constraint::Length(2), // EXP gauge
            Constraint::Length(7), // Attributes
            Constraint::Min(2),    // Derived numbers
        ])
        .split(inner);

    draw_identity(frame, chunks[0], game_state);
    draw_hp_gauge(frame, chunks[1], game_state);
    draw_mp_gauge(frame, chunks[2], game_state);
    draw_exp_gauge(frame, chunks[3], game_state);
    draw_attributes(frame, chunks[4], game_state, ui);
    draw_derived(frame, chunks[5], game_state);
}

fn draw_identity(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = &game_state.player;
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", player.name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("\"{}\"", player.title),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("Lv.{}", player.level),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(player.job.name(), Style::default().fg(Color::Magenta)),
            Span::raw("  "),
            Span::styled(
                format!("{} gold", player.gold),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_hp_gauge(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = &game_state.player;
    let ratio = if player.max_hp > 0 {
        (player.hp as f64 / player.max_hp as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let color = if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .label(format!("HP {}/{}", player.hp, player.max_hp))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn draw_mp_gauge(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = &game_state.player;
    let ratio = if player.max_mp > 0 {
        (player.mp as f64 / player.max_mp as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue))
        .label(format!("MP {}/{}", player.mp, player.max_mp))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn draw_exp_gauge(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = &game_state.player;
    let ratio = if player.max_exp > 0 {
        (player.exp as f64 / player.max_exp as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::LightYellow))
        .label(format!("EXP {}/{}", player.exp, player.max_exp))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn attribute_color(attribute: AttributeType) -> Color {
    match attribute {
        AttributeType::Strength => Color::Red,
        AttributeType::Agility => Color::Green,
        AttributeType::Sense => Color::Yellow,
        AttributeType::Vitality => Color::Magenta,
        AttributeType::Intelligence => Color::Blue,
    }
}

fn draw_attributes(frame: &mut Frame, area: Rect, game_state: &GameState, ui: &UiState) {
    let player = &game_state.player;
    let on_status_tab = ui.tab == SideTab::Status;

    let mut lines = Vec::new();
    for (i, attribute) in AttributeType::all().into_iter().enumerate() {
        let selected = on_status_tab && i == ui.stat_cursor;
        let cursor = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(attribute_color(attribute))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(attribute_color(attribute))
        };
        lines.push(Line::from(vec![
            Span::raw(cursor),
            Span::styled(format!("{:<4}", attribute.abbrev()), style),
            Span::styled(
                format!("{:>4}", player.attributes.get(attribute)),
                style,
            ),
        ]));
    }

    let points_line = if player.stat_points > 0 {
        Line::from(Span::styled(
            format!("Points: {}  [Enter] to spend", player.stat_points),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "No points to spend",
            Style::default().fg(Color::DarkGray),
        ))
    };
    lines.push(Line::from(""));
    lines.push(points_line);

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_derived(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = &game_state.player;
    let lines = vec![
        Line::from(vec![
            Span::styled("ATK ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("{}", attack_power(player)),
                Style::default().fg(Color::Red),
            ),
            Span::raw("   "),
            Span::styled("DEF ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("{}", defense_value(player)),
                Style::default().fg(Color::Green),
            ),
            Span::raw("   "),
            Span::styled("CRIT ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("{:.0}%", crit_chance(player) * 100.0),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "Shadows: {}   Rank: {}",
                player.shadows.len(),
                player.rank.letter()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
