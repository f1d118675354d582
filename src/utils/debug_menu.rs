//! Debug menu for skipping the grind while testing.
//!
//! Activated with `--debug` flag. Press backtick to toggle menu.

use crate::character::player::Job;
use crate::core::constants::AWAKENING_TITLE;
use crate::core::game_state::GameState;

/// Menu options available in debug mode
pub const DEBUG_OPTIONS: &[&str] = &[
    "Grant 10,000 gold",
    "Grant 1,000 EXP",
    "Restore HP and MP",
    "Force awakening",
    "Monarch mode",
];

/// Debug menu state
#[derive(Debug, Clone, Default)]
pub struct DebugMenu {
    pub is_open: bool,
    pub selected_index: usize,
}

impl DebugMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.selected_index = 0;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn navigate_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn navigate_down(&mut self) {
        if self.selected_index + 1 < DEBUG_OPTIONS.len() {
            self.selected_index += 1;
        }
    }

    /// Trigger the selected debug action. Returns a message describing what happened.
    pub fn trigger_selected(&mut self, state: &mut GameState) -> &'static str {
        let msg = match self.selected_index {
            0 => grant_gold(state),
            1 => grant_exp(state),
            2 => restore_resources(state),
            3 => force_awakening(state),
            4 => engage_monarch_mode(state),
            _ => "Unknown option",
        };
        self.close();
        msg
    }
}

fn grant_gold(state: &mut GameState) -> &'static str {
    state.player.gold += 10_000;
    "Granted 10,000 gold!"
}

fn grant_exp(state: &mut GameState) -> &'static str {
    // Routed through the normal pipeline so level-ups and the
    // awakening still fire.
    let _ = state.grant_exp(1_000);
    "Granted 1,000 EXP!"
}

fn restore_resources(state: &mut GameState) -> &'static str {
    state.player.hp = state.player.max_hp;
    state.player.mp = state.player.max_mp;
    "HP and MP restored!"
}

fn force_awakening(state: &mut GameState) -> &'static str {
    if state.player.job.can_extract() {
        return "Already awakened!";
    }
    state.player.job = Job::Necromancer;
    state.player.title = AWAKENING_TITLE.to_string();
    "Awakened as a Necromancer!"
}

fn engage_monarch_mode(state: &mut GameState) -> &'static str {
    use crate::character::attributes::AttributeType;

    let player = &mut state.player;
    player.level = 99;
    for attribute in AttributeType::all() {
        player.attributes.set(attribute, 999);
    }
    player.max_hp = 50_000;
    player.hp = player.max_hp;
    player.max_mp = 10_000;
    player.mp = player.max_mp;
    player.gold = 9_999_999;
    player.job = Job::ShadowMonarch;
    player.title = AWAKENING_TITLE.to_string();
    "Monarch mode engaged!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_navigation() {
        let mut menu = DebugMenu::new();
        menu.open();
        assert_eq!(menu.selected_index, 0);

        menu.navigate_down();
        assert_eq!(menu.selected_index, 1);

        menu.navigate_down();
        menu.navigate_down();
        menu.navigate_down();
        assert_eq!(menu.selected_index, 4);

        // Can't go past end
        menu.navigate_down();
        assert_eq!(menu.selected_index, 4);

        menu.navigate_up();
        assert_eq!(menu.selected_index, 3);

        // Can't go before start
        menu.navigate_up();
        menu.navigate_up();
        menu.navigate_up();
        menu.navigate_up();
        assert_eq!(menu.selected_index, 0);
    }

    #[test]
    fn test_toggle() {
        let mut menu = DebugMenu::new();
        assert!(!menu.is_open);

        menu.toggle();
        assert!(menu.is_open);

        menu.toggle();
        assert!(!menu.is_open);
    }

    #[test]
    fn test_grant_gold() {
        let mut state = GameState::new("Test");
        let msg = grant_gold(&mut state);
        assert_eq!(msg, "Granted 10,000 gold!");
        assert_eq!(state.player.gold, 12_000);
    }

    #[test]
    fn test_grant_exp_levels_up() {
        let mut state = GameState::new("Test");
        let msg = grant_exp(&mut state);
        assert_eq!(msg, "Granted 1,000 EXP!");
        // 1000 EXP clears the 100/130/169/219/284 thresholds
        assert_eq!(state.player.level, 6);
        assert_eq!(state.player.exp, 98);
        assert_eq!(state.player.stat_points, 25);
    }

    #[test]
    fn test_restore_resources() {
        let mut state = GameState::new("Test");
        state.player.hp = 1;
        state.player.mp = 0;

        let msg = restore_resources(&mut state);
        assert_eq!(msg, "HP and MP restored!");
        assert_eq!(state.player.hp, state.player.max_hp);
        assert_eq!(state.player.mp, state.player.max_mp);
    }

    #[test]
    fn test_force_awakening() {
        let mut state = GameState::new("Test");
        let msg = force_awakening(&mut state);
        assert_eq!(msg, "Awakened as a Necromancer!");
        assert_eq!(state.player.job, Job::Necromancer);
        assert_eq!(state.player.title, AWAKENING_TITLE);

        // Can't awaken twice
        let msg = force_awakening(&mut state);
        assert_eq!(msg, "Already awakened!");
    }

    #[test]
    fn test_monarch_mode() {
        let mut state = GameState::new("Test");
        let msg = engage_monarch_mode(&mut state);
        assert_eq!(msg, "Monarch mode engaged!");
        assert_eq!(state.player.level, 99);
        assert_eq!(state.player.job, Job::ShadowMonarch);
        assert_eq!(state.player.hp, 50_000);
        assert_eq!(state.player.gold, 9_999_999);
    }

    #[test]
    fn test_trigger_selected_closes_the_menu() {
        let mut menu = DebugMenu::new();
        let mut state = GameState::new("Test");
        menu.open();

        let msg = menu.trigger_selected(&mut state);
        assert_eq!(msg, "Granted 10,000 gold!");
        assert!(!menu.is_open);
    }
}
