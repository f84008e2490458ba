pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod interaction;
pub mod layout;

pub use config::Config;
pub use constants::{DEFAULT_PIECE_COUNT, MAX_SCORE, NEUTRAL_SCORE};
pub use error::{FengShuiError, Result};
pub use events::{read_events, read_events_file};
pub use interaction::{Board, DragEvent, DragState};
pub use layout::{Bounds, Hsl, Piece, PieceId, Point, move_piece, populate, score};
