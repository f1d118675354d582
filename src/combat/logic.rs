//! Turn resolution for gate combat.
//!
//! The player always swings first; everything the enemy does comes back
//! through the pending-step queue so a run can be saved and resumed
//! mid-exchange. All randomness flows through the injected `Rng`.

use rand::Rng;

use crate::army::types::total_attack_bonus;
use crate::character::attributes::AttributeType;
use crate::character::player::Player;
use crate::combat::types::{spawn_wave_enemy, GateRun, Spoils};
use crate::core::constants::*;
use crate::core::events::GameEvent;
use crate::core::game_state::{GameState, GateActivity, LogKind};
use crate::core::scheduler::StepKind;
use crate::gates::Rank;
use crate::items::logic::{equipped_armor_bonus, equipped_weapon_bonus};

/// Outcome of a single player attack roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    pub damage: u32,
    pub is_crit: bool,
}

/// Flat attack power: strength and agility, plus the shadow army and
/// every equipped weapon.
pub fn attack_power(player: &Player) -> u32 {
    let strength = player.attributes.get(AttributeType::Strength);
    let agility = player.attributes.get(AttributeType::Agility);
    strength * STRENGTH_DAMAGE_FACTOR
        + agility * AGILITY_DAMAGE_FACTOR
        + total_attack_bonus(&player.shadows)
        + equipped_weapon_bonus(&player.inventory)
}

/// Critical hit chance from sense, capped at [`CRIT_CHANCE_CAP`].
pub fn crit_chance(player: &Player) -> f64 {
    let sense = player.attributes.get(AttributeType::Sense);
    (sense as f64 * CRIT_CHANCE_PER_SENSE).min(CRIT_CHANCE_CAP)
}

/// Damage soak: vitality plus every equipped piece of armor.
pub fn defense_value(player: &Player) -> u32 {
    player.attributes.get(AttributeType::Vitality) * VITALITY_DEFENSE_FACTOR
        + equipped_armor_bonus(&player.inventory)
}

/// Rolls one player attack: uniform variance on the flat power, then
/// the crit multiplier on a successful sense roll. Both intermediate
/// results are floored.
pub fn calculate_player_attack(power: u32, crit_chance: f64, rng: &mut impl Rng) -> AttackRoll {
    let variance = rng.gen_range(DAMAGE_VARIANCE_MIN..DAMAGE_VARIANCE_MAX);
    let mut damage = (power as f64 * variance).floor() as u32;
    let is_crit = rng.gen::<f64>() < crit_chance;
    if is_crit {
        damage = (damage as f64 * CRIT_MULTIPLIER).floor() as u32;
    }
    AttackRoll { damage, is_crit }
}

/// Incoming damage after defense, floored at [`MIN_ENEMY_DAMAGE`].
pub fn calculate_damage_taken(enemy_attack: u32, defense: u32) -> u32 {
    enemy_attack.saturating_sub(defense).max(MIN_ENEMY_DAMAGE)
}

/// Experience awarded for clearing a gate, from the final enemy's bulk.
pub fn victory_exp(final_enemy_max_hp: u32) -> u64 {
    (final_enemy_max_hp as f64 * VICTORY_EXP_FACTOR).floor() as u64
}

/// Gold awarded for clearing a gate, from the final enemy's bulk.
pub fn victory_gold(final_enemy_max_hp: u32) -> u64 {
    (final_enemy_max_hp as f64 * VICTORY_GOLD_FACTOR).floor() as u64
}

/// Starts a gate run: rolls the wave count, spawns the first wave and
/// moves the phase to combat. A no-op unless the player is idle.
pub fn enter_gate(state: &mut GameState, rank: Rank, rng: &mut impl Rng) -> Vec<GameEvent> {
    if !state.activity.is_idle() {
        return Vec::new();
    }

    let total_waves = rng.gen_range(MIN_GATE_WAVES..=MAX_GATE_WAVES);
    let enemy = spawn_wave_enemy(rank, 1, total_waves, rng);
    let enemy_name = enemy.base_name.clone();

    state.activity = GateActivity::Combat(GateRun {
        rank,
        wave: 1,
        total_waves,
        enemy: Some(enemy),
    });
    state.push_log(
        LogKind::System,
        format!(
            "Entered the {}-rank gate. ({total_waves} waves)",
            rank.letter()
        ),
    );
    state.push_log(LogKind::Combat, format!("Wave 1: {enemy_name} appears."));

    vec![
        GameEvent::GateEntered { rank, total_waves },
        GameEvent::WaveSpawned {
            wave: 1,
            enemy_name,
        },
    ]
}

/// Resolves one player attack. Legal only mid-combat with a live enemy
/// and nothing already scheduled; anything else is a silent no-op.
pub fn player_attack(state: &mut GameState, rng: &mut impl Rng) -> Vec<GameEvent> {
    if state.is_action_pending() {
        return Vec::new();
    }

    let power = attack_power(&state.player);
    let chance = crit_chance(&state.player);

    let GateActivity::Combat(run) = &mut state.activity else {
        return Vec::new();
    };
    let Some(enemy) = run.enemy.as_mut() else {
        return Vec::new();
    };

    let roll = calculate_player_attack(power, chance, rng);
    enemy.take_damage(roll.damage);
    let enemy_display = enemy.display_name.clone();
    let enemy_down = !enemy.is_alive();

    let rank = run.rank;
    let wave = run.wave;
    let final_wave = run.is_final_wave();
    let slain = if enemy_down { run.enemy.take() } else { None };

    let mut events = vec![GameEvent::PlayerAttack {
        damage: roll.damage,
        is_crit: roll.is_crit,
    }];
    if roll.is_crit {
        state.push_log(
            LogKind::Danger,
            format!(
                "Dealt {} damage to {enemy_display}. Critical hit!",
                roll.damage
            ),
        );
    } else {
        state.push_log(
            LogKind::Combat,
            format!("Dealt {} damage to {enemy_display}.", roll.damage),
        );
    }

    if !enemy_down {
        state.schedule(StepKind::EnemyCounterattack, ENEMY_TURN_DELAY_SECONDS);
        return events;
    }

    if final_wave {
        if let Some(slain) = slain {
            let exp = victory_exp(slain.max_hp);
            let gold = victory_gold(slain.max_hp);
            state.player.gold += gold;
            state.push_log(
                LogKind::System,
                "Gate cleared. All enemies eliminated.".to_string(),
            );
            state.push_log(LogKind::Gain, format!("Gained +{exp} EXP and +{gold} gold."));
            state.activity = GateActivity::Victory(Spoils {
                rank,
                slain,
                extracting: false,
            });
            events.push(GameEvent::GateCleared { exp, gold });
            events.extend(state.grant_exp(exp));
        }
    } else {
        let heal = (state.player.max_hp as f64 * WAVE_CLEAR_HEAL_FRACTION).floor() as u32;
        let healed = state.player.restore_hp(heal);
        state.push_log(
            LogKind::Gain,
            "Wave cleared. Recovering some health.".to_string(),
        );
        if let GateActivity::Combat(run) = &mut state.activity {
            run.wave += 1;
        }
        state.schedule(StepKind::SpawnNextWave, NEXT_WAVE_DELAY_SECONDS);
        events.push(GameEvent::WaveCleared { wave, healed });
    }
    events
}

/// The enemy's scheduled counterattack. Lethal damage is intercepted by
/// an emergency recovery instead of ending the run.
pub fn enemy_counterattack(state: &mut GameState) -> Vec<GameEvent> {
    let defense = defense_value(&state.player);

    let GateActivity::Combat(run) = &state.activity else {
        return Vec::new();
    };
    let Some(enemy) = run.enemy.as_ref() else {
        return Vec::new();
    };

    let damage = calculate_damage_taken(enemy.attack, defense);
    let enemy_display = enemy.display_name.clone();

    let mut events = vec![GameEvent::EnemyAttack {
        enemy_name: enemy_display.clone(),
        damage,
    }];
    state.push_log(
        LogKind::Danger,
        format!("{enemy_display} attacks! You take {damage} damage."),
    );

    if state.player.hp <= damage {
        let restored_hp = (state.player.max_hp as f64 * RECOVERY_HP_FRACTION).floor() as u32;
        let kept_gold = (state.player.gold as f64 * RECOVERY_GOLD_KEPT_FRACTION).floor() as u64;
        let gold_lost = state.player.gold - kept_gold;
        state.player.hp = restored_hp;
        state.player.gold = kept_gold;
        state.push_log(
            LogKind::Danger,
            "Fatal damage! The System initiates an emergency recovery.".to_string(),
        );
        events.push(GameEvent::EmergencyRecovery {
            restored_hp,
            gold_lost,
        });
    } else {
        state.player.hp -= damage;
    }
    events
}

/// Spawns the next wave once its delay has elapsed. A no-op if combat
/// ended in the meantime or an enemy is somehow still up.
pub fn spawn_next_wave(state: &mut GameState, rng: &mut impl Rng) -> Vec<GameEvent> {
    let GateActivity::Combat(run) = &mut state.activity else {
        return Vec::new();
    };
    if run.enemy.is_some() {
        return Vec::new();
    }

    let enemy = spawn_wave_enemy(run.rank, run.wave, run.total_waves, rng);
    let enemy_name = enemy.base_name.clone();
    let wave = run.wave;
    run.enemy = Some(enemy);

    state.push_log(LogKind::Combat, format!("Wave {wave}: {enemy_name} appears."));
    vec![GameEvent::WaveSpawned { wave, enemy_name }]
}

/// Leaves a cleared gate. Blocked while an extraction is in flight and
/// a no-op outside the victory phase.
pub fn exit_gate(state: &mut GameState) -> Vec<GameEvent> {
    match &state.activity {
        GateActivity::Victory(spoils) if !spoils.extracting => {
            state.activity = GateActivity::Idle;
            state.pending.clear();
            vec![GameEvent::GateExited]
        }
        _ => Vec::new(),
    }
}
