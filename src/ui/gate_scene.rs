//! The right-hand gate scene: selection grid, live combat, or spoils.

use crate::core::game_state::{GameState, GateActivity};
use crate::core::scheduler::StepKind;
use crate::combat::types::{GateRun, Spoils};
use crate::core::constants::EXTRACTION_MP_COST;
use crate::gates::{get_enemy_pool, Rank};
use crate::ui::rank_color;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the gate scene for the current activity.
pub fn draw_gate_scene(frame: &mut Frame, area: Rect, game_state: &GameState) {
    match &game_state.activity {
        GateActivity::Idle => draw_gate_selection(frame, area),
        GateActivity::Combat(run) => draw_combat(frame, area, game_state, run),
        GateActivity::Victory(spoils) => draw_victory(frame, area, game_state, spoils),
    }
}

/// The idle view: one row per rank with its monster pool.
fn draw_gate_selection(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Gates ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Choose a gate to enter.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for (i, rank) in Rank::all().into_iter().enumerate() {
        let pool = get_enemy_pool(rank);
        let names = pool
            .iter()
            .map(|template| template.name)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] {}-rank Gate", i + 1, rank.letter()),
                Style::default()
                    .fg(rank_color(rank))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {names}"), Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[s] Hunter Shop",
        Style::default().fg(Color::Yellow),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// The live combat view: wave progress, the enemy, and what is coming.
fn draw_combat(frame: &mut Frame, area: Rect, game_state: &GameState, run: &GateRun) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(rank_color(run.rank)))
        .title(format!(
            " {}-rank Gate - Wave {}/{} ",
            run.rank.letter(),
            run.wave,
            run.total_waves
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Enemy name
            Constraint::Length(3), // Enemy HP gauge
            Constraint::Min(1),    // Status line
        ])
        .split(inner);

    match &run.enemy {
        Some(enemy) => {
            let name_style = if enemy.is_boss || run.is_final_wave() {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let name = Paragraph::new(Line::from(Span::styled(
                enemy.display_name.clone(),
                name_style,
            )))
            .alignment(Alignment::Center);
            frame.render_widget(name, chunks[0]);

            let ratio = if enemy.max_hp > 0 {
                (enemy.current_hp as f64 / enemy.max_hp as f64).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::ALL))
                .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .label(format!("{}/{}", enemy.current_hp, enemy.max_hp))
                .ratio(ratio);
            frame.render_widget(gauge, chunks[1]);
        }
        None => {
            let waiting = Paragraph::new(Line::from(Span::styled(
                "The gate trembles...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(waiting, chunks[0]);
        }
    }

    let status = if pending(game_state, StepKind::EnemyCounterattack) {
        Span::styled(
            "The enemy readies its attack...",
            Style::default().fg(Color::Red),
        )
    } else if pending(game_state, StepKind::SpawnNextWave) {
        Span::styled(
            "The next wave stirs...",
            Style::default().fg(Color::Yellow),
        )
    } else if run.enemy.is_some() {
        Span::styled(
            "[Space] Attack",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("")
    };
    let status_widget = Paragraph::new(Line::from(status)).alignment(Alignment::Center);
    frame.render_widget(status_widget, chunks[2]);
}

/// The spoils view after the final wave falls.
fn draw_victory(frame: &mut Frame, area: Rect, game_state: &GameState, spoils: &Spoils) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Gate Cleared ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "All enemies eliminated.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Final kill: "),
            Span::styled(
                spoils.slain.display_name.clone(),
                Style::default().fg(rank_color(spoils.rank)),
            ),
        ]),
        Line::from(""),
    ];

    if spoils.extracting {
        lines.push(Line::from(Span::styled(
            "\"Arise.\"  The shadow struggles...",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        )));
    } else if game_state.player.job.can_extract() {
        let affordable = game_state.player.mp >= EXTRACTION_MP_COST;
        let style = if affordable {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!("[e] Arise ({EXTRACTION_MP_COST} MP)"),
            style,
        )));
        lines.push(Line::from(Span::styled(
            "[g] Leave gate",
            Style::default().fg(Color::Gray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "The corpse is still. (Extraction unlocks at level 10.)",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "[g] Leave gate",
            Style::default().fg(Color::Gray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn pending(game_state: &GameState, kind: StepKind) -> bool {
    game_state.pending.iter().any(|step| step.kind == kind)
}
