//! Input handling for the Game screen.
//!
//! Extracts the input dispatch logic from main.rs into a clean priority chain.

use crate::character::attributes::AttributeType;
use crate::core::actions::{apply_action, GameAction};
use crate::core::game_state::{GameState, GateActivity};
use crate::gates::Rank;
use crate::ui::{SideTab, UiState};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use ratatui::style::Color;

/// Result of handling one key event on the Game screen.
pub enum InputResult {
    /// Keep running the game loop.
    Continue,
    /// Tear down the terminal and exit.
    Quit,
}

/// Main dispatcher for Game screen input.
pub fn handle_game_input(
    key: KeyEvent,
    state: &mut GameState,
    ui: &mut UiState,
    rng: &mut impl Rng,
) -> InputResult {
    // 1. Debug menu (only reachable with --debug)
    if ui.debug_mode {
        if key.code == KeyCode::Char('`') {
            ui.debug.toggle();
            return InputResult::Continue;
        }
        if ui.debug.is_open {
            return handle_debug_menu(key, state, ui);
        }
    }

    // 2. Shop overlay swallows everything while open
    if ui.shop_open {
        return handle_shop(key, state, ui, rng);
    }

    // 3. Global keys
    match key.code {
        KeyCode::Tab => {
            ui.tab = ui.tab.next();
            return InputResult::Continue;
        }
        KeyCode::BackTab => {
            ui.tab = ui.tab.prev();
            return InputResult::Continue;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') if state.activity.is_idle() => {
            return InputResult::Quit;
        }
        _ => {}
    }

    // 4. Side panel navigation for the active tab
    if handle_panel(key, state, ui, rng) {
        return InputResult::Continue;
    }

    // 5. Phase actions (gate entry, attacking, extraction)
    handle_phase(key, state, ui, rng);
    InputResult::Continue
}

fn handle_debug_menu(key: KeyEvent, state: &mut GameState, ui: &mut UiState) -> InputResult {
    match key.code {
        KeyCode::Up => ui.debug.navigate_up(),
        KeyCode::Down => ui.debug.navigate_down(),
        KeyCode::Esc => ui.debug.close(),
        KeyCode::Enter => {
            let message = ui.debug.trigger_selected(state);
            ui.set_banner(message.to_string(), Color::Yellow);
        }
        _ => {}
    }
    InputResult::Continue
}

fn handle_shop(
    key: KeyEvent,
    state: &mut GameState,
    ui: &mut UiState,
    rng: &mut impl Rng,
) -> InputResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => {
            ui.shop_open = false;
        }
        KeyCode::Up => {
            ui.shop_cursor = ui.shop_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            let last = ui.visible_shop_items().len().saturating_sub(1);
            if ui.shop_cursor < last {
                ui.shop_cursor += 1;
            }
        }
        KeyCode::Left => {
            ui.prev_shop_filter();
        }
        KeyCode::Right => {
            ui.next_shop_filter();
        }
        KeyCode::Enter => {
            let item_id = ui
                .visible_shop_items()
                .get(ui.shop_cursor)
                .map(|template| template.id.clone());
            if let Some(item_id) = item_id {
                let events = apply_action(state, GameAction::Purchase { item_id }, rng);
                ui.note_events(&events);
            }
        }
        _ => {}
    }
    InputResult::Continue
}

/// Up/Down/Enter for whichever side panel is showing. Returns true when the
/// key was consumed so phase actions never see panel navigation.
fn handle_panel(
    key: KeyEvent,
    state: &mut GameState,
    ui: &mut UiState,
    rng: &mut impl Rng,
) -> bool {
    match (ui.tab, key.code) {
        (SideTab::Status, KeyCode::Up) => {
            ui.stat_cursor = ui.stat_cursor.saturating_sub(1);
            true
        }
        (SideTab::Status, KeyCode::Down) => {
            if ui.stat_cursor + 1 < AttributeType::all().len() {
                ui.stat_cursor += 1;
            }
            true
        }
        (SideTab::Status, KeyCode::Enter) => {
            let attribute = AttributeType::all()[ui.stat_cursor];
            let events = apply_action(state, GameAction::AllocateStat(attribute), rng);
            ui.note_events(&events);
            true
        }
        (SideTab::Inventory, KeyCode::Up) => {
            ui.inventory_cursor = ui.inventory_cursor.saturating_sub(1);
            true
        }
        (SideTab::Inventory, KeyCode::Down) => {
            let last = state.player.inventory.len().saturating_sub(1);
            if ui.inventory_cursor < last {
                ui.inventory_cursor += 1;
            }
            true
        }
        (SideTab::Inventory, KeyCode::Enter) => {
            let target = state
                .player
                .inventory
                .get(ui.inventory_cursor)
                .map(|item| (item.uid, item.kind.is_equippable()));
            if let Some((uid, equippable)) = target {
                let action = if equippable {
                    GameAction::ToggleEquip { uid }
                } else {
                    GameAction::UseItem { uid }
                };
                let events = apply_action(state, action, rng);
                ui.note_events(&events);
                ui.clamp_cursors(state);
            }
            true
        }
        (SideTab::Army, KeyCode::Up) => {
            ui.army_cursor = ui.army_cursor.saturating_sub(1);
            true
        }
        (SideTab::Army, KeyCode::Down) => {
            let last = state.player.shadows.len().saturating_sub(1);
            if ui.army_cursor < last {
                ui.army_cursor += 1;
            }
            true
        }
        _ => false,
    }
}

fn handle_phase(key: KeyEvent, state: &mut GameState, ui: &mut UiState, rng: &mut impl Rng) {
    let action = match (&state.activity, key.code) {
        (GateActivity::Idle, KeyCode::Char(c @ '1'..='6')) => {
            let rank = Rank::all()[c as usize - '1' as usize];
            Some(GameAction::EnterGate(rank))
        }
        (GateActivity::Idle, KeyCode::Char('s') | KeyCode::Char('S')) => {
            ui.shop_open = true;
            ui.shop_cursor = 0;
            None
        }
        (GateActivity::Combat(_), KeyCode::Char(' ') | KeyCode::Char('a') | KeyCode::Char('A')) => {
            Some(GameAction::Attack)
        }
        (GateActivity::Victory(_), KeyCode::Char('e') | KeyCode::Char('E')) => {
            Some(GameAction::BeginExtraction)
        }
        (GateActivity::Victory(_), KeyCode::Char('g') | KeyCode::Char('G')) => {
            Some(GameAction::ExitGate)
        }
        _ => None,
    };
    if let Some(action) = action {
        let events = apply_action(state, action, rng);
        ui.note_events(&events);
    }
}
