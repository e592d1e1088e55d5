// Mine dimensions
pub const TILE_ROWS: usize = 500;
pub const TILE_COLS: usize = 12;
pub const TILE_VARIANTS: u8 = 5;

// Pre-carved surface opening in row 0 (inclusive column range)
pub const OPENING_FIRST_COL: usize = 3;
pub const OPENING_LAST_COL: usize = 6;

// Guaranteed early rewards: one chest and a few minerals near the surface
pub const EARLY_REWARD_FIRST_ROW: usize = 3;
pub const EARLY_REWARD_LAST_ROW: usize = 14;
pub const EARLY_REWARD_EDGE_MARGIN: usize = 2;
pub const EARLY_REWARD_MINERALS: usize = 3;

// Tile probability bands: (min row exclusive, chance)
pub const GOLD_ORE_BAND: (usize, f64) = (75, 0.02);
pub const SILVER_ORE_BAND: (usize, f64) = (40, 0.03);
pub const MINERAL_BAND: (usize, f64) = (10, 0.08);
pub const CHEST_BAND: (usize, f64) = (20, 0.015);
pub const EASTER_EGG_BAND: (usize, f64) = (50, 0.005);
pub const STONE_SHARE: f64 = 0.4;

// Problem generation
pub const HINT_MAX_DEPTH: usize = 50;
pub const SUBTRACTION_MIN_DEPTH: usize = 15;
pub const MULTIPLICATION_MIN_DEPTH: usize = 30;
pub const DIVISION_MIN_DEPTH: usize = 45;
pub const DEFAULT_MATH_DIFFICULTY: u8 = 3;
pub const MIN_MATH_DIFFICULTY: u8 = 1;
pub const MAX_MATH_DIFFICULTY: u8 = 5;

// Resource multiplier slider
pub const MIN_RESOURCE_MULTIPLIER: u32 = 1;
pub const MAX_RESOURCE_MULTIPLIER: u32 = 10;
pub const MAX_TESTING_RESOURCE_MULTIPLIER: u32 = 100;

// Free upgrade cadence (inclusive)
pub const REWARD_DIG_COUNT_MIN: u32 = 20;
pub const REWARD_DIG_COUNT_MAX: u32 = 30;

// Equipment
pub const MAX_EQUIPMENT_LEVEL: u8 = 30;

// Hero base stats
pub const HERO_BASE_MAX_HP: u32 = 100;
pub const HERO_BASE_ATTACK: u32 = 5;
pub const HERO_BASE_DEFENSE: u32 = 2;
pub const HERO_BASE_EVASION: u32 = 1;
pub const HERO_BASE_CRIT_CHANCE: u32 = 5;

// Superpower buff
pub const SUPERPOWER_COOLDOWN_TURNS: u32 = 10;
pub const SUPERPOWER_DURATION_TURNS: u32 = 3;
pub const SUPERPOWER_EVASION_CAP: u32 = 95;
pub const SUPERPOWER_CRIT_CAP: u32 = 100;

// Combat resolution
pub const CRIT_POWER_MULTIPLIER: f64 = 1.5;
pub const MONSTER_EVASION_CAP: u32 = 50;
pub const MONSTER_CRIT_CAP: u32 = 40;

// Monster roster is generated eagerly up to this many entries
pub const EAGER_ROSTER_LEN: usize = 110;

// Saved monster indices past this are treated as corrupt
pub const MAX_MOB_INDEX: u64 = 100_000;

// Timing beats (virtual milliseconds)
pub const COMBAT_TICK_MS: u64 = 3000;
pub const ATTACK_WINDUP_MS: u64 = 400;
pub const ATTACK_RECOVERY_MS: u64 = 600;
pub const DEFEAT_DELAY_MS: u64 = 500;
pub const DIG_RESOLVE_MS: u64 = 600;

// Persistence
pub const SAVE_VERSION_MAGIC: u64 = 0x4D4D_494E_4552_0001;
pub const SAVE_FILE_NAME: &str = "save.dat";
