pub mod mover;
pub mod populate;
pub mod score;
pub mod types;

pub use mover::move_piece;
pub use populate::populate;
pub use score::score;
pub use types::{Bounds, Hsl, Piece, PieceId, Point};
