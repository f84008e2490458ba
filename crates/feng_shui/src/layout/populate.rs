use super::types::{Bounds, Hsl, Piece};
use crate::constants::{HUE_RANGE, MAX_PIECE_SIZE, MIN_PIECE_SIZE};
use log::{debug, warn};
use rand::Rng;

/// Creates `count` randomly sized, placed and colored pieces inside `bounds`.
///
/// Sizes are whole units in `[MIN_PIECE_SIZE, MAX_PIECE_SIZE)`. Ids are
/// `0..count` in creation order. All randomness comes from `rng`, so a seeded
/// generator reproduces the same room.
///
/// Degenerate bounds produce an empty set. A piece larger than the room on
/// some axis is pinned to `0` on that axis instead of drawing from an empty
/// range.
pub fn populate<R: Rng + ?Sized>(count: usize, bounds: Bounds, rng: &mut R) -> Vec<Piece> {
    if bounds.is_degenerate() {
        warn!(
            "Cannot populate degenerate room {}x{}, returning no pieces",
            bounds.width, bounds.height
        );
        return Vec::new();
    }

    let mut pieces = Vec::with_capacity(count);
    for i in 0..count {
        let width = f64::from(rng.random_range(MIN_PIECE_SIZE..MAX_PIECE_SIZE));
        let height = f64::from(rng.random_range(MIN_PIECE_SIZE..MAX_PIECE_SIZE));
        let hue = rng.random_range(0.0..HUE_RANGE);

        let limit = bounds.max_origin(width, height);
        let x = random_offset(rng, limit.x);
        let y = random_offset(rng, limit.y);

        pieces.push(Piece {
            id: i,
            x,
            y,
            width,
            height,
            color: Hsl::from_hue(hue),
        });
    }

    debug!(
        "Populated {} pieces in {}x{} room",
        pieces.len(),
        bounds.width,
        bounds.height
    );
    pieces
}

// uniform in [0, span), or 0 when there is no room to move
fn random_offset<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    if span > 0.0 {
        rng.random_range(0.0..span)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::PieceId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_populate_ids_in_creation_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let pieces = populate(5, Bounds::new(800.0, 600.0), &mut rng);

        let ids: Vec<PieceId> = pieces.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_populate_ids_match_creation_index() {
        let mut rng = StdRng::seed_from_u64(21);
        let pieces = populate(1000, Bounds::new(800.0, 600.0), &mut rng);

        assert_eq!(pieces.len(), 1000);
        for (idx, p) in pieces.iter().enumerate() {
            assert_eq!(p.id, idx);
        }
    }

    #[test]
    fn test_populate_zero_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(populate(0, Bounds::new(800.0, 600.0), &mut rng).is_empty());
    }

    #[test]
    fn test_populate_same_seed_same_room() {
        let bounds = Bounds::new(640.0, 480.0);
        let a = populate(8, bounds, &mut StdRng::seed_from_u64(42));
        let b = populate(8, bounds, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_populate_sizes_and_colors_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let pieces = populate(200, Bounds::new(800.0, 600.0), &mut rng);

        for p in &pieces {
            for size in [p.width, p.height] {
                assert!((50.0..100.0).contains(&size), "size {size} out of range");
                assert_eq!(size.fract(), 0.0, "size {size} is not a whole unit");
            }
            assert!((0.0..360.0).contains(&p.color.hue));
            assert_eq!(p.color.saturation, 50);
            assert_eq!(p.color.lightness, 50);
        }
    }

    #[test]
    fn test_populate_pieces_stay_inside() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for bounds in [
                Bounds::new(800.0, 600.0),
                Bounds::new(400.0, 300.0),
                Bounds::new(100.0, 100.0),
            ] {
                for p in populate(10, bounds, &mut rng) {
                    assert!(p.x >= 0.0 && p.x <= bounds.width - p.width);
                    assert!(p.y >= 0.0 && p.y <= bounds.height - p.height);
                }
            }
        }
    }

    #[test]
    fn test_populate_degenerate_bounds_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(populate(5, Bounds::new(0.0, 600.0), &mut rng).is_empty());
        assert!(populate(5, Bounds::new(800.0, -10.0), &mut rng).is_empty());
        assert!(populate(5, Bounds::new(f64::NAN, 600.0), &mut rng).is_empty());
    }

    #[test]
    fn test_populate_oversized_piece_pinned_to_origin() {
        // Every drawn size is at least 50, so nothing fits a 40-wide room.
        let mut rng = StdRng::seed_from_u64(9);
        let pieces = populate(10, Bounds::new(40.0, 600.0), &mut rng);

        assert_eq!(pieces.len(), 10);
        for p in &pieces {
            assert_eq!(p.x, 0.0);
            assert!(p.y >= 0.0 && p.y <= 600.0 - p.height);
        }
    }
}
