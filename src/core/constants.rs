// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const ENEMY_TURN_DELAY_SECONDS: f64 = 0.3;
pub const NEXT_WAVE_DELAY_SECONDS: f64 = 0.6;
pub const EXTRACTION_DELAY_SECONDS: f64 = 2.0;

// Starting character sheet
pub const BASE_ATTRIBUTE_VALUE: u32 = 10;
pub const NUM_ATTRIBUTES: usize = 5;
pub const INITIAL_MAX_HP: u32 = 200;
pub const INITIAL_MAX_MP: u32 = 100;
pub const INITIAL_MAX_EXP: u64 = 100;
pub const INITIAL_GOLD: u64 = 2000;
pub const INITIAL_TITLE: &str = "The World's Weakest";

// Leveling
pub const EXP_CURVE_GROWTH: f64 = 1.3;
pub const LEVEL_UP_MAX_HP_GAIN: u32 = 50;
pub const LEVEL_UP_MAX_MP_GAIN: u32 = 20;
pub const LEVEL_UP_STAT_POINTS: u32 = 5;
pub const AWAKENING_LEVEL: u32 = 10;
pub const AWAKENING_TITLE: &str = "Shadow Monarch";

// Stat allocation side effects
pub const VITALITY_MAX_HP_BONUS: u32 = 20;
pub const INTELLIGENCE_MAX_MP_BONUS: u32 = 10;

// Player damage formula
pub const STRENGTH_DAMAGE_FACTOR: u32 = 6;
pub const AGILITY_DAMAGE_FACTOR: u32 = 3;
pub const DAMAGE_VARIANCE_MIN: f64 = 0.8;
pub const DAMAGE_VARIANCE_MAX: f64 = 1.2;
pub const CRIT_CHANCE_PER_SENSE: f64 = 0.01;
pub const CRIT_CHANCE_CAP: f64 = 0.5;
pub const CRIT_MULTIPLIER: f64 = 2.5;

// Incoming damage formula
pub const VITALITY_DEFENSE_FACTOR: u32 = 3;
pub const MIN_ENEMY_DAMAGE: u32 = 5;

// Gate runs
pub const MIN_GATE_WAVES: u32 = 5;
pub const MAX_GATE_WAVES: u32 = 10;
pub const WAVE_POWER_STEP: f64 = 0.15;
pub const WAVE_CLEAR_HEAL_FRACTION: f64 = 0.1;

// Victory spoils, from the final enemy's max HP
pub const VICTORY_EXP_FACTOR: f64 = 1.2;
pub const VICTORY_GOLD_FACTOR: f64 = 4.0;

// Emergency recovery after a lethal hit
pub const RECOVERY_HP_FRACTION: f64 = 0.2;
pub const RECOVERY_GOLD_KEPT_FRACTION: f64 = 0.9;

// Shadow extraction
pub const EXTRACTION_MP_COST: u32 = 50;
pub const EXTRACTION_BASE_CHANCE: f64 = 0.3;
pub const EXTRACTION_CHANCE_PER_INT: f64 = 0.015;
pub const SHADOW_ATTACK_FRACTION: f64 = 0.35;

// Shop catalog formulas
pub const WEAPON_BASE_ATTACK: f64 = 20.0;
pub const ARMOR_BASE_DEFENSE: f64 = 10.0;
pub const ELIXIR_PRICE: u64 = 5000;

// Game log
pub const GAME_LOG_CAPACITY: usize = 50;

// Character naming
pub const PLAYER_NAME_MAX_LENGTH: usize = 16;
