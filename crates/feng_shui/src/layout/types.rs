use crate::constants::{PIECE_LIGHTNESS, PIECE_SATURATION};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Piece identifier, unique within a working set
pub type PieceId = usize;

/// 2D point in room coordinates (origin at the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Size of the room the pieces live in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Zero, negative or non-finite dimensions
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Checks if a room-relative point lies inside the room (edges included).
    pub fn contains(&self, point: Point) -> bool {
        let within_x = point.x >= 0.0 && point.x <= self.width;
        let within_y = point.y >= 0.0 && point.y <= self.height;
        within_x && within_y
    }

    /// Largest top-left position that keeps a `width` x `height` piece inside.
    /// Never negative: an oversized piece is pinned to the origin on that axis.
    pub fn max_origin(&self, width: f64, height: f64) -> Point {
        Point::new(
            (self.width - width).max(0.0),
            (self.height - height).max(0.0),
        )
    }
}

/// HSL display color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,       // [0, 360)
    pub saturation: u8, // %
    pub lightness: u8,  // %
}

impl Hsl {
    /// Piece color with the fixed saturation/lightness
    pub fn from_hue(hue: f64) -> Self {
        Self {
            hue,
            saturation: PIECE_SATURATION,
            lightness: PIECE_LIGHTNESS,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// A furniture piece: an axis-aligned rectangle placed in the room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub x: f64, // top-left
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Hsl,
}

impl Piece {
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same piece moved to a new top-left position
    pub fn moved_to(&self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self.clone()
        }
    }

    /// Whether the piece lies fully inside the room
    pub fn fits_in(&self, bounds: Bounds) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= bounds.width
            && self.y + self.height <= bounds.height
    }
}
