//! The hunter: identity, resources, leveling, and stat allocation.

use serde::{Deserialize, Serialize};

use crate::army::types::Shadow;
use crate::character::attributes::{AttributeType, Attributes};
use crate::core::constants::*;
use crate::gates::Rank;
use crate::items::types::OwnedItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Job {
    None,
    Necromancer,
    ShadowMonarch,
}

impl Job {
    pub fn name(&self) -> &'static str {
        match self {
            Job::None => "None",
            Job::Necromancer => "Necromancer",
            Job::ShadowMonarch => "Shadow Monarch",
        }
    }

    /// Shadow extraction unlocks with the first job change.
    pub fn can_extract(&self) -> bool {
        !matches!(self, Job::None)
    }
}

/// Outcome of an EXP grant, for callers that announce level-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpGain {
    pub levels_gained: u32,
    pub new_level: u32,
    pub awakened: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub exp: u64,
    pub max_exp: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub gold: u64,
    pub attributes: Attributes,
    pub stat_points: u32,
    pub job: Job,
    pub title: String,
    pub rank: Rank,
    pub shadows: Vec<Shadow>,
    pub inventory: Vec<OwnedItem>,
    pub story_stage: u32,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            level: 1,
            exp: 0,
            max_exp: INITIAL_MAX_EXP,
            hp: INITIAL_MAX_HP,
            max_hp: INITIAL_MAX_HP,
            mp: INITIAL_MAX_MP,
            max_mp: INITIAL_MAX_MP,
            gold: INITIAL_GOLD,
            attributes: Attributes::new(),
            stat_points: 0,
            job: Job::None,
            title: INITIAL_TITLE.to_string(),
            rank: Rank::E,
            shadows: Vec::new(),
            inventory: Vec::new(),
            story_stage: 0,
        }
    }

    /// Grants EXP and processes any level-ups, carrying leftover EXP
    /// across thresholds. Each level raises the next threshold by x1.3
    /// (floored), grows max HP/MP, fully restores both, and awards stat
    /// points. The first time the hunter reaches level 10 they awaken
    /// as a Necromancer.
    pub fn grant_exp(&mut self, amount: u64) -> ExpGain {
        self.exp += amount;
        let mut levels_gained = 0;
        let mut awakened = false;

        while self.exp >= self.max_exp {
            self.exp -= self.max_exp;
            self.level += 1;
            self.max_exp = (self.max_exp as f64 * EXP_CURVE_GROWTH).floor() as u64;
            self.max_hp += LEVEL_UP_MAX_HP_GAIN;
            self.max_mp += LEVEL_UP_MAX_MP_GAIN;
            self.hp = self.max_hp;
            self.mp = self.max_mp;
            self.stat_points += LEVEL_UP_STAT_POINTS;
            levels_gained += 1;

            if self.level >= AWAKENING_LEVEL && self.job == Job::None {
                self.job = Job::Necromancer;
                self.title = AWAKENING_TITLE.to_string();
                awakened = true;
            }
        }

        ExpGain {
            levels_gained,
            new_level: self.level,
            awakened,
        }
    }

    /// Spends one stat point. Returns false when there is nothing to
    /// spend.
    pub fn allocate_stat(&mut self, attr: AttributeType) -> bool {
        if self.stat_points == 0 {
            return false;
        }
        self.stat_points -= 1;
        self.raise_attribute(attr);
        true
    }

    /// Raises an attribute by one point. Vitality also grows max HP and
    /// Intelligence max MP; current resources are left alone. Elixirs
    /// go through here too, without spending a stat point.
    pub fn raise_attribute(&mut self, attr: AttributeType) {
        self.attributes.increment(attr);
        match attr {
            AttributeType::Vitality => self.max_hp += VITALITY_MAX_HP_BONUS,
            AttributeType::Intelligence => self.max_mp += INTELLIGENCE_MAX_MP_BONUS,
            _ => {}
        }
    }

    /// Heals up to `amount`, capped at max HP. Returns the HP actually
    /// restored.
    pub fn restore_hp(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Restores up to `amount` MP, capped at max MP. Returns the MP
    /// actually restored.
    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        let before = self.mp;
        self.mp = self.mp.saturating_add(amount).min(self.max_mp);
        self.mp - before
    }
}
