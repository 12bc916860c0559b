//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::Rules`].

// --- Playfield ---

/// Logical playfield width.
pub const GAME_WIDTH: f64 = 800.0;

/// Logical playfield height.
pub const GAME_HEIGHT: f64 = 600.0;

/// Reference frame length (ms) that speeds are normalized against.
pub const REFERENCE_FRAME_MS: f64 = 16.0;

// --- Threats ---

/// Slowest threat speed at wave 1 (progress per reference frame).
pub const THREAT_SPEED_MIN: f64 = 0.001;

/// Fastest threat speed at wave 1 (progress per reference frame).
pub const THREAT_SPEED_MAX: f64 = 0.0025;

/// Additional speed multiplier per wave beyond the first.
pub const THREAT_SPEED_STEP_PER_WAVE: f64 = 0.2;

/// Half-width of the axis-aligned box used to match an impact to a structure.
pub const IMPACT_TOLERANCE: f64 = 5.0;

// --- Interceptors ---

/// Interceptor speed (progress per reference frame).
pub const INTERCEPTOR_SPEED: f64 = 0.02;

// --- Blasts ---

/// Peak blast radius.
pub const BLAST_MAX_RADIUS: f64 = 40.0;

/// Total blast lifetime in ms (half growing, half shrinking).
pub const BLAST_DURATION_MS: f64 = 1000.0;

// --- Scoring ---

/// Score at which the session is won.
pub const WIN_SCORE: u32 = 5000;

/// Points per destroyed threat.
pub const POINTS_PER_THREAT: u32 = 20;

/// Bonus points per unused interceptor at wave end.
pub const POINTS_PER_UNUSED_ROUND: u32 = 5;

// --- Waves ---

/// Threats in wave 1.
pub const WAVE_THREATS_BASE: u32 = 10;

/// Extra threats per subsequent wave.
pub const WAVE_THREATS_INCREMENT: u32 = 5;

/// Spawn interval at wave 1 (ms).
pub const SPAWN_INTERVAL_BASE_MS: f64 = 2000.0;

/// Spawn interval reduction per wave (ms).
pub const SPAWN_INTERVAL_STEP_MS: f64 = 200.0;

/// Spawn interval floor (ms).
pub const SPAWN_INTERVAL_MIN_MS: f64 = 500.0;

// --- Layout ---

/// Rounds per turret magazine.
pub const TURRET_MAX_AMMO: u32 = 30;

/// Turret positions, left to right.
pub const TURRET_POSITIONS: [(f64, f64); 2] = [(50.0, 550.0), (750.0, 550.0)];

/// City positions, evenly spaced along the ground line.
pub const CITY_POSITIONS: [(f64, f64); 5] = [
    (200.0, 570.0),
    (300.0, 570.0),
    (400.0, 570.0),
    (500.0, 570.0),
    (600.0, 570.0),
];
