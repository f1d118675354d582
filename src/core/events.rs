//! Events surfaced by game transitions.
//!
//! Transitions write their own log lines into the game state as they
//! run; the events returned alongside carry the structured view of the
//! same outcomes for UI effects and test assertions.

use crate::character::attributes::AttributeType;
use crate::character::player::Job;
use crate::gates::Rank;
use crate::items::types::ConsumableEffect;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // ── Gates and combat ─────────────────────────────────────────
    GateEntered { rank: Rank, total_waves: u32 },
    WaveSpawned { wave: u32, enemy_name: String },
    PlayerAttack { damage: u32, is_crit: bool },
    EnemyAttack { enemy_name: String, damage: u32 },
    EmergencyRecovery { restored_hp: u32, gold_lost: u64 },
    WaveCleared { wave: u32, healed: u32 },
    GateCleared { exp: u64, gold: u64 },
    GateExited,

    // ── Progression ──────────────────────────────────────────────
    LeveledUp { new_level: u32 },
    Awakened { job: Job },
    StatAllocated { attribute: AttributeType, new_value: u32 },

    // ── Shadow army ──────────────────────────────────────────────
    ExtractionStarted,
    ExtractionSucceeded { shadow_name: String },
    ExtractionFailed,
    NotEnoughMana,

    // ── Items and shop ───────────────────────────────────────────
    ItemPurchased { item_name: String, price: u64 },
    NotEnoughGold { item_name: String },
    ItemEquipped { item_name: String },
    ItemUnequipped { item_name: String },
    ItemUsed { item_name: String, effect: ConsumableEffect },
}
