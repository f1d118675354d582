//! Player commands as data.
//!
//! The input layer translates keys into [`GameAction`]s and everything
//! funnels through [`apply_action`], which keeps the rules in one place
//! and makes whole sessions replayable from an action list.

use rand::Rng;
use uuid::Uuid;

use crate::army::extraction::begin_extraction;
use crate::character::attributes::AttributeType;
use crate::combat::logic::{enter_gate, exit_gate, player_attack};
use crate::core::events::GameEvent;
use crate::core::game_state::GameState;
use crate::gates::Rank;
use crate::items::logic::{purchase, toggle_equip, use_consumable};

/// Everything the player can do.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    EnterGate(Rank),
    Attack,
    ExitGate,
    BeginExtraction,
    Purchase { item_id: String },
    ToggleEquip { uid: Uuid },
    UseItem { uid: Uuid },
    AllocateStat(AttributeType),
}

/// Applies one action to the state and reports what happened.
/// Actions illegal in the current phase degrade to silent no-ops.
pub fn apply_action(
    state: &mut GameState,
    action: GameAction,
    rng: &mut impl Rng,
) -> Vec<GameEvent> {
    match action {
        GameAction::EnterGate(rank) => enter_gate(state, rank, rng),
        GameAction::Attack => player_attack(state, rng),
        GameAction::ExitGate => exit_gate(state),
        GameAction::BeginExtraction => begin_extraction(state),
        GameAction::Purchase { item_id } => {
            // The shop only trades while the player is out of a gate.
            if !state.activity.is_idle() {
                return Vec::new();
            }
            purchase(state, &item_id)
        }
        GameAction::ToggleEquip { uid } => toggle_equip(state, uid),
        GameAction::UseItem { uid } => use_consumable(state, uid),
        GameAction::AllocateStat(attribute) => {
            if state.player.allocate_stat(attribute) {
                vec![GameEvent::StatAllocated {
                    attribute,
                    new_value: state.player.attributes.get(attribute),
                }]
            } else {
                Vec::new()
            }
        }
    }
}
