use super::types::{Bounds, Piece, PieceId, Point};
use log::debug;

/// Moves piece `id` to `proposed`, clamped so it stays inside `bounds`.
///
/// Returns a new working set that differs from `pieces` only in the target's
/// position. An unknown `id` is not an error: the result is an unchanged copy.
/// When the piece is wider or taller than the room, that axis clamps to `0`.
pub fn move_piece(pieces: &[Piece], id: PieceId, proposed: Point, bounds: Bounds) -> Vec<Piece> {
    let Some(target) = pieces.iter().find(|p| p.id == id) else {
        debug!("Piece {id} not found, move ignored");
        return pieces.to_vec();
    };

    let origin = clamp_origin(proposed, target, bounds);
    debug!(
        "Piece {id}: proposed ({:.1}, {:.1}) -> placed ({:.1}, {:.1})",
        proposed.x, proposed.y, origin.x, origin.y
    );

    pieces
        .iter()
        .map(|p| {
            if p.id == id {
                p.moved_to(origin)
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Clamp a proposed top-left corner to `[0, bounds - size]` on each axis.
pub fn clamp_origin(proposed: Point, piece: &Piece, bounds: Bounds) -> Point {
    let limit = Point::new(bounds.width - piece.width, bounds.height - piece.height);
    // min before max: an inverted range (negative limit) lands on 0
    Point::new(
        proposed.x.min(limit.x).max(0.0),
        proposed.y.min(limit.y).max(0.0),
    )
}
