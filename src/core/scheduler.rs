//! Deferred combat steps.
//!
//! Enemy counterattacks, wave spawns, and extraction results do not
//! resolve on the input that caused them; they are queued with a delay
//! and fire from the tick loop. The queue lives inside the game state
//! so a serialized mid-combat game resumes exactly where it stopped.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::army::extraction;
use crate::combat::logic;
use crate::core::events::GameEvent;
use crate::core::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    EnemyCounterattack,
    SpawnNextWave,
    ResolveExtraction,
}

/// One queued step. `remaining` counts down in seconds of game time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingStep {
    pub kind: StepKind,
    pub remaining: f64,
}

/// Advances every queued step by `delta` seconds and fires the ones
/// that reach zero, in the order they were queued. Steps validate the
/// current phase themselves and no-op if it no longer matches.
pub fn advance(state: &mut GameState, delta: f64, rng: &mut impl Rng) -> Vec<GameEvent> {
    for step in &mut state.pending {
        step.remaining -= delta;
    }

    let mut due = Vec::new();
    let mut i = 0;
    while i < state.pending.len() {
        if state.pending[i].remaining <= 0.0 {
            due.push(state.pending.remove(i).kind);
        } else {
            i += 1;
        }
    }

    let mut events = Vec::new();
    for kind in due {
        match kind {
            StepKind::EnemyCounterattack => {
                events.extend(logic::enemy_counterattack(state));
            }
            StepKind::SpawnNextWave => {
                events.extend(logic::spawn_next_wave(state, rng));
            }
            StepKind::ResolveExtraction => {
                events.extend(extraction::resolve_extraction(state, rng));
            }
        }
    }
    events
}
