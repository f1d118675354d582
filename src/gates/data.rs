//! Gate rank definitions and per-rank enemy pools.

use serde::{Deserialize, Serialize};

/// Threat classification shared by gates and hunters, E (weakest) through S.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Rank {
    pub fn all() -> [Rank; 6] {
        [Rank::E, Rank::D, Rank::C, Rank::B, Rank::A, Rank::S]
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
        }
    }
}

/// Monster archetype that can spawn inside a gate of a given rank.
///
/// `is_boss` marks named boss monsters; shadows extracted from them
/// serve as knights rather than soldiers.
#[derive(Debug, Clone)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub max_hp: u32,
    pub attack: u32,
    pub is_boss: bool,
}

/// Returns the spawn pool for a gate of the given rank.
pub fn get_enemy_pool(rank: Rank) -> Vec<EnemyTemplate> {
    match rank {
        Rank::E => vec![
            EnemyTemplate {
                name: "Hungry Goblin",
                max_hp: 60,
                attack: 10,
                is_boss: false,
            },
            EnemyTemplate {
                name: "Cave Spider",
                max_hp: 80,
                attack: 12,
                is_boss: false,
            },
            EnemyTemplate {
                name: "Slime",
                max_hp: 50,
                attack: 8,
                is_boss: false,
            },
        ],
        Rank::D => vec![
            EnemyTemplate {
                name: "Hobgoblin",
                max_hp: 200,
                attack: 25,
                is_boss: false,
            },
            EnemyTemplate {
                name: "Gray Wolf",
                max_hp: 180,
                attack: 30,
                is_boss: false,
            },
            EnemyTemplate {
                name: "Zombie Warrior",
                max_hp: 250,
                attack: 20,
                is_boss: false,
            },
        ],
        Rank::C => vec![
            EnemyTemplate {
                name: "Lizardman Scout",
                max_hp: 500,
                attack: 55,
                is_boss: false,
            },
            EnemyTemplate {
                name: "Black Tiger",
                max_hp: 600,
                attack: 65,
                is_boss: false,
            },
            EnemyTemplate {
                name: "Skeleton Knight",
                max_hp: 700,
                attack: 60,
                is_boss: false,
            },
        ],
        Rank::B => vec![
            EnemyTemplate {
                name: "Iron Golem",
                max_hp: 1500,
                attack: 100,
                is_boss: false,
            },
            EnemyTemplate {
                name: "Wyvern",
                max_hp: 1200,
                attack: 120,
                is_boss: false,
            },
            EnemyTemplate {
                name: "Ice Elf",
                max_hp: 1300,
                attack: 110,
                is_boss: false,
            },
        ],
        Rank::A => vec![
            EnemyTemplate {
                name: "High Orc Warrior",
                max_hp: 3500,
                attack: 200,
                is_boss: false,
            },
            EnemyTemplate {
                name: "Blood Vampire",
                max_hp: 3000,
                attack: 250,
                is_boss: false,
            },
            EnemyTemplate {
                name: "Hellhound of Sloth",
                max_hp: 4000,
                attack: 220,
                is_boss: false,
            },
        ],
        Rank::S => vec![
            EnemyTemplate {
                name: "Scion of the Ancient Dragon",
                max_hp: 12000,
                attack: 600,
                is_boss: false,
            },
            EnemyTemplate {
                name: "Kargalgan",
                max_hp: 20000,
                attack: 800,
                is_boss: true,
            },
            EnemyTemplate {
                name: "Beru",
                max_hp: 25000,
                attack: 950,
                is_boss: true,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rank_has_three_templates() {
        for rank in Rank::all() {
            assert_eq!(
                get_enemy_pool(rank).len(),
                3,
                "rank {} pool should have 3 templates",
                rank.letter()
            );
        }
    }

    #[test]
    fn test_bosses_only_in_s_rank() {
        for rank in Rank::all() {
            let bosses = get_enemy_pool(rank)
                .iter()
                .filter(|t| t.is_boss)
                .count();
            if rank == Rank::S {
                assert_eq!(bosses, 2, "S rank should have Kargalgan and Beru");
            } else {
                assert_eq!(bosses, 0, "rank {} should have no bosses", rank.letter());
            }
        }
    }

    #[test]
    fn test_pools_scale_with_rank() {
        let ranks = Rank::all();
        for pair in ranks.windows(2) {
            let weaker_max = get_enemy_pool(pair[0])
                .iter()
                .map(|t| t.max_hp)
                .max()
                .unwrap();
            let stronger_min = get_enemy_pool(pair[1])
                .iter()
                .map(|t| t.max_hp)
                .min()
                .unwrap();
            assert!(
                weaker_max < stronger_min,
                "{} pool should be strictly weaker than {} pool",
                pair[0].letter(),
                pair[1].letter()
            );
        }
    }

    #[test]
    fn test_template_stats_nonzero() {
        for rank in Rank::all() {
            for template in get_enemy_pool(rank) {
                assert!(template.max_hp > 0);
                assert!(template.attack > 0);
            }
        }
    }

    #[test]
    fn test_rank_letters() {
        let letters: Vec<&str> = Rank::all().iter().map(|r| r.letter()).collect();
        assert_eq!(letters, vec!["E", "D", "C", "B", "A", "S"]);
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::E < Rank::S);
        assert!(Rank::C < Rank::B);
    }
}
