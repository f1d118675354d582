//! Central game state: the hunter, the current gate phase, queued
//! combat steps, and the game log. The whole struct serializes to
//! JSON, mid-combat or not.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::character::player::Player;
use crate::combat::types::{GateRun, Spoils};
use crate::core::constants::GAME_LOG_CAPACITY;
use crate::core::events::GameEvent;
use crate::core::scheduler::{PendingStep, StepKind};

/// What the hunter is currently doing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateActivity {
    Idle,
    Combat(GateRun),
    Victory(Spoils),
}

impl GateActivity {
    pub fn is_idle(&self) -> bool {
        matches!(self, GateActivity::Idle)
    }
}

/// Log line severity, used only for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    Info,
    System,
    Combat,
    Gain,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub kind: LogKind,
    pub text: String,
    /// Unix millis at the time of the entry; display only.
    pub timestamp_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub activity: GateActivity,
    /// Deferred combat steps, drained by the tick loop.
    pub pending: Vec<PendingStep>,
    /// Rolling game log, newest last.
    pub log: VecDeque<LogEntry>,
    next_log_id: u64,
}

impl GameState {
    pub fn new(name: &str) -> Self {
        let mut state = Self {
            player: Player::new(name),
            activity: GateActivity::Idle,
            pending: Vec::new(),
            log: VecDeque::with_capacity(GAME_LOG_CAPACITY),
            next_log_id: 1,
        };
        state.push_log(
            LogKind::System,
            "The System has been activated. Begin your growth.".to_string(),
        );
        state
    }

    /// Appends a log line, dropping the oldest once the ring is full.
    pub fn push_log(&mut self, kind: LogKind, text: String) {
        if self.log.len() >= GAME_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(LogEntry {
            id: self.next_log_id,
            kind,
            text,
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        });
        self.next_log_id += 1;
    }

    pub fn last_log(&self) -> Option<&LogEntry> {
        self.log.back()
    }

    /// Queues a deferred step to fire after `delay_seconds`.
    pub fn schedule(&mut self, kind: StepKind, delay_seconds: f64) {
        self.pending.push(PendingStep {
            kind,
            remaining: delay_seconds,
        });
    }

    /// True while a deferred step is outstanding. Combat actions stay
    /// disabled until the queue drains.
    pub fn is_action_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Grants EXP and announces each level-up and any awakening in the
    /// log. Returns the matching events.
    pub fn grant_exp(&mut self, amount: u64) -> Vec<GameEvent> {
        let gain = self.player.grant_exp(amount);
        let mut events = Vec::new();

        let first_new_level = gain.new_level - gain.levels_gained + 1;
        for level in first_new_level..=gain.new_level {
            self.push_log(
                LogKind::System,
                format!("[LEVEL UP] Reached level {level}. All resources restored."),
            );
            events.push(GameEvent::LeveledUp { new_level: level });
        }
        if gain.awakened {
            self.push_log(
                LogKind::System,
                format!(
                    "[JOB CHANGE] You have awakened as a {}. Shadow extraction unlocked.",
                    self.player.job.name()
                ),
            );
            events.push(GameEvent::Awakened {
                job: self.player.job,
            });
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::player::Job;

    #[test]
    fn test_new_state_starts_idle_with_system_log() {
        let state = GameState::new("Jinwoo");
        assert!(state.activity.is_idle());
        assert!(state.pending.is_empty());
        assert_eq!(state.log.len(), 1);
        let entry = state.last_log().unwrap();
        assert_eq!(entry.kind, LogKind::System);
        assert!(entry.text.contains("System has been activated"));
        assert!(entry.timestamp_ms > 0);
    }

    #[test]
    fn test_log_ring_caps_and_keeps_newest() {
        let mut state = GameState::new("Test");
        for i in 0..60 {
            state.push_log(LogKind::Info, format!("line {i}"));
        }
        assert_eq!(state.log.len(), GAME_LOG_CAPACITY);
        // 61 entries total (seed line + 60); the newest 50 survive
        assert_eq!(state.log.front().unwrap().text, "line 10");
        assert_eq!(state.log.back().unwrap().text, "line 59");
    }

    #[test]
    fn test_log_ids_monotonic() {
        let mut state = GameState::new("Test");
        state.push_log(LogKind::Combat, "a".to_string());
        state.push_log(LogKind::Gain, "b".to_string());
        let ids: Vec<u64> = state.log.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_schedule_and_pending_flag() {
        let mut state = GameState::new("Test");
        assert!(!state.is_action_pending());
        state.schedule(StepKind::EnemyCounterattack, 0.3);
        assert!(state.is_action_pending());
        assert_eq!(state.pending.len(), 1);
        assert_eq!(state.pending[0].kind, StepKind::EnemyCounterattack);
    }

    #[test]
    fn test_grant_exp_announces_each_level() {
        let mut state = GameState::new("Test");
        // 100 + 130 EXP crosses two thresholds exactly
        let events = state.grant_exp(230);
        assert_eq!(
            events,
            vec![
                GameEvent::LeveledUp { new_level: 2 },
                GameEvent::LeveledUp { new_level: 3 },
            ]
        );
        let texts: Vec<&str> = state.log.iter().map(|e| e.text.as_str()).collect();
        assert!(texts.iter().any(|t| t.contains("Reached level 2")));
        assert!(texts.iter().any(|t| t.contains("Reached level 3")));
    }

    #[test]
    fn test_grant_exp_announces_awakening() {
        let mut state = GameState::new("Test");
        while state.player.level < 9 {
            let shortfall = state.player.max_exp - state.player.exp;
            state.grant_exp(shortfall);
        }
        let events = state.grant_exp(state.player.max_exp - state.player.exp);
        assert!(events.contains(&GameEvent::Awakened {
            job: Job::Necromancer
        }));
        assert!(state
            .last_log()
            .unwrap()
            .text
            .contains("awakened as a Necromancer"));
    }

    #[test]
    fn test_grant_exp_without_level_up_is_quiet() {
        let mut state = GameState::new("Test");
        let log_len = state.log.len();
        let events = state.grant_exp(50);
        assert!(events.is_empty());
        assert_eq!(state.log.len(), log_len);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let mut state = GameState::new("Test");
        state.grant_exp(150);
        state.schedule(StepKind::SpawnNextWave, 0.6);

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
