/// Piece dimension range [units], lower bound inclusive, upper exclusive
pub const MIN_PIECE_SIZE: u32 = 50;
pub const MAX_PIECE_SIZE: u32 = 100;

/// Hue range for piece colors [deg]
pub const HUE_RANGE: f64 = 360.0;
pub const PIECE_SATURATION: u8 = 50; // %
pub const PIECE_LIGHTNESS: u8 = 50; // %

/// Score range
pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 100;
pub const NEUTRAL_SCORE: u8 = 50; // empty room

/// Default room settings
pub const DEFAULT_PIECE_COUNT: usize = 5;
pub const DEFAULT_ROOM_WIDTH: f64 = 800.0;
pub const DEFAULT_ROOM_HEIGHT: f64 = 600.0;
pub const MAX_PIECE_COUNT: usize = 1000;

/// Environment variable holding a fallback RNG seed
pub const ENV_SEED: &str = "FENG_SHUI_SEED";
