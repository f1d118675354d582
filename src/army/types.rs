use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::combat::types::Enemy;
use crate::core::constants::SHADOW_ATTACK_FRACTION;
use crate::gates::Rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadowRole {
    Soldier,
    Knight,
}

impl ShadowRole {
    pub fn name(&self) -> &'static str {
        match self {
            ShadowRole::Soldier => "Soldier",
            ShadowRole::Knight => "Knight",
        }
    }
}

/// A member of the shadow army, risen from a slain enemy. Its attack
/// bonus feeds straight into the player's damage formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub id: Uuid,
    pub name: String,
    pub rank: Rank,
    pub attack_bonus: u32,
    pub role: ShadowRole,
}

impl Shadow {
    /// Raises a shadow from a slain enemy. Boss-template kills yield
    /// knights; everything else marches as a soldier.
    pub fn rise_from(enemy: &Enemy, rank: Rank) -> Self {
        let role = if enemy.is_boss {
            ShadowRole::Knight
        } else {
            ShadowRole::Soldier
        };
        Self {
            id: Uuid::new_v4(),
            name: format!("Shadow {}", enemy.base_name),
            rank,
            attack_bonus: (enemy.attack as f64 * SHADOW_ATTACK_FRACTION).floor() as u32,
            role,
        }
    }
}

/// Flat attack the whole army adds to the player's damage.
pub fn total_attack_bonus(shadows: &[Shadow]) -> u32 {
    shadows.iter().map(|s| s.attack_bonus).sum()
}
