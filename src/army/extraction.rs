//! Shadow extraction: the post-victory gamble that grows the army.
//!
//! An attempt spends mana up front and resolves on a delay through the
//! pending-step queue, so the roll itself happens a couple of seconds
//! after the chant. Success or failure, the gate closes behind it.

use rand::Rng;

use crate::army::types::Shadow;
use crate::character::attributes::AttributeType;
use crate::core::constants::*;
use crate::core::events::GameEvent;
use crate::core::game_state::{GameState, GateActivity, LogKind};
use crate::core::scheduler::StepKind;

/// Extraction success chance for a given intelligence score.
pub fn extraction_chance(intelligence: u32) -> f64 {
    EXTRACTION_BASE_CHANCE + intelligence as f64 * EXTRACTION_CHANCE_PER_INT
}

/// Starts an extraction attempt over the freshly slain enemy.
///
/// Silently refused without the necromancer job, outside the victory
/// phase, or while an attempt is already in flight. Running out of mana
/// is the one refusal the player is told about.
pub fn begin_extraction(state: &mut GameState) -> Vec<GameEvent> {
    if !state.player.job.can_extract() {
        return Vec::new();
    }
    let GateActivity::Victory(spoils) = &mut state.activity else {
        return Vec::new();
    };
    if spoils.extracting {
        return Vec::new();
    }
    if state.player.mp < EXTRACTION_MP_COST {
        state.push_log(
            LogKind::Info,
            "Not enough mana to attempt an extraction.".to_string(),
        );
        return vec![GameEvent::NotEnoughMana];
    }

    spoils.extracting = true;
    state.player.mp -= EXTRACTION_MP_COST;
    state.schedule(StepKind::ResolveExtraction, EXTRACTION_DELAY_SECONDS);
    state.push_log(LogKind::System, "\"Arise.\"".to_string());
    vec![GameEvent::ExtractionStarted]
}

/// Resolves a pending extraction. Either way the gate is done and the
/// player returns to idle.
pub fn resolve_extraction(state: &mut GameState, rng: &mut impl Rng) -> Vec<GameEvent> {
    let spoils = match std::mem::replace(&mut state.activity, GateActivity::Idle) {
        GateActivity::Victory(spoils) if spoils.extracting => spoils,
        other => {
            state.activity = other;
            return Vec::new();
        }
    };

    let intelligence = state.player.attributes.get(AttributeType::Intelligence);
    if rng.gen::<f64>() < extraction_chance(intelligence) {
        let shadow = Shadow::rise_from(&spoils.slain, spoils.rank);
        let shadow_name = shadow.name.clone();
        state.push_log(
            LogKind::Gain,
            format!("Shadow extraction succeeded: {shadow_name}"),
        );
        state.player.shadows.push(shadow);
        vec![GameEvent::ExtractionSucceeded { shadow_name }]
    } else {
        state.push_log(
            LogKind::Info,
            "The shadow resists. Extraction failed.".to_string(),
        );
        vec![GameEvent::ExtractionFailed]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::army::types::ShadowRole;
    use crate::character::player::Job;
    use crate::combat::types::{Enemy, Spoils};
    use crate::gates::Rank;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn slain_enemy(is_boss: bool) -> Enemy {
        Enemy {
            base_name: "Hobgoblin".to_string(),
            display_name: "Hobgoblin (W.5)".to_string(),
            max_hp: 200,
            current_hp: 0,
            attack: 25,
            is_boss,
        }
    }

    fn awakened_at_victory(slain: Enemy) -> GameState {
        let mut state = GameState::new("Tester");
        state.player.job = Job::Necromancer;
        state.activity = GateActivity::Victory(Spoils {
            rank: Rank::D,
            slain,
            extracting: false,
        });
        state
    }

    #[test]
    fn chance_grows_with_intelligence() {
        assert!((extraction_chance(0) - 0.3).abs() < 1e-9);
        assert!((extraction_chance(10) - 0.45).abs() < 1e-9);
        assert!(extraction_chance(47) > 1.0);
    }

    #[test]
    fn extraction_needs_the_job() {
        let mut state = awakened_at_victory(slain_enemy(false));
        state.player.job = Job::None;

        assert!(begin_extraction(&mut state).is_empty());
        assert_eq!(state.player.mp, state.player.max_mp);
    }

    #[test]
    fn extraction_needs_a_fresh_kill() {
        let mut state = GameState::new("Tester");
        state.player.job = Job::Necromancer;

        assert!(begin_extraction(&mut state).is_empty());
    }

    #[test]
    fn extraction_without_mana_is_called_out() {
        let mut state = awakened_at_victory(slain_enemy(false));
        state.player.mp = EXTRACTION_MP_COST - 1;

        let events = begin_extraction(&mut state);

        assert!(matches!(events[0], GameEvent::NotEnoughMana));
        assert_eq!(state.player.mp, EXTRACTION_MP_COST - 1);
        let GateActivity::Victory(spoils) = &state.activity else {
            panic!("phase must be untouched");
        };
        assert!(!spoils.extracting);
        assert!(state
            .log
            .iter()
            .any(|entry| entry.text.contains("Not enough mana")));
    }

    #[test]
    fn extraction_spends_mana_and_schedules_the_roll() {
        let mut state = awakened_at_victory(slain_enemy(false));

        let events = begin_extraction(&mut state);

        assert!(matches!(events[0], GameEvent::ExtractionStarted));
        assert_eq!(state.player.mp, state.player.max_mp - EXTRACTION_MP_COST);
        assert_eq!(state.pending.len(), 1);
        assert_eq!(state.pending[0].kind, StepKind::ResolveExtraction);
        let GateActivity::Victory(spoils) = &state.activity else {
            panic!("expected victory phase");
        };
        assert!(spoils.extracting);
        assert!(state.log.iter().any(|entry| entry.text == "\"Arise.\""));
    }

    #[test]
    fn only_one_attempt_per_kill() {
        let mut state = awakened_at_victory(slain_enemy(false));
        begin_extraction(&mut state);

        assert!(begin_extraction(&mut state).is_empty());
        assert_eq!(state.player.mp, state.player.max_mp - EXTRACTION_MP_COST);
    }

    #[test]
    fn successful_extraction_raises_a_shadow() {
        let mut state = awakened_at_victory(slain_enemy(false));
        // 0.3 + 47 * 0.015 > 1.0, so every roll succeeds
        state
            .player
            .attributes
            .set(AttributeType::Intelligence, 47);
        begin_extraction(&mut state);

        let events = resolve_extraction(&mut state, &mut rng(5));

        assert!(matches!(events[0], GameEvent::ExtractionSucceeded { .. }));
        assert!(state.activity.is_idle());
        assert_eq!(state.player.shadows.len(), 1);

        let shadow = &state.player.shadows[0];
        assert_eq!(shadow.name, "Shadow Hobgoblin");
        assert_eq!(shadow.rank, Rank::D);
        // floor(25 * 0.35)
        assert_eq!(shadow.attack_bonus, 8);
        assert_eq!(shadow.role, ShadowRole::Soldier);
        assert!(state
            .log
            .iter()
            .any(|entry| entry.text.contains("extraction succeeded")));
    }

    #[test]
    fn boss_shadows_rise_as_knights() {
        let mut state = awakened_at_victory(slain_enemy(true));
        state
            .player
            .attributes
            .set(AttributeType::Intelligence, 47);
        begin_extraction(&mut state);

        resolve_extraction(&mut state, &mut rng(5));

        assert_eq!(state.player.shadows[0].role, ShadowRole::Knight);
    }

    #[test]
    fn failed_extraction_leaves_the_army_alone() {
        // 30% success chance; scanning a handful of seeds is certain to
        // hit at least one failing roll.
        let mut saw_failure = false;
        for seed in 0..20 {
            let mut state = awakened_at_victory(slain_enemy(false));
            state.player.attributes.set(AttributeType::Intelligence, 0);
            begin_extraction(&mut state);

            let events = resolve_extraction(&mut state, &mut rng(seed));
            if matches!(events[0], GameEvent::ExtractionFailed) {
                assert!(state.player.shadows.is_empty());
                assert!(state.activity.is_idle());
                assert!(state
                    .log
                    .iter()
                    .any(|entry| entry.text.contains("Extraction failed")));
                saw_failure = true;
                break;
            }
        }
        assert!(saw_failure, "no failing roll across 20 seeds");
    }

    #[test]
    fn resolve_requires_an_attempt_in_flight() {
        let mut state = awakened_at_victory(slain_enemy(false));

        assert!(resolve_extraction(&mut state, &mut rng(5)).is_empty());
        assert!(matches!(state.activity, GateActivity::Victory(_)));
    }
}
