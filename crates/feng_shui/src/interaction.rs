use crate::layout::{Bounds, Piece, PieceId, Point, move_piece, populate, score};
use log::{debug, info, warn};
use rand::Rng;

/// Drag gesture state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        target: PieceId,
        /// Pointer offset from the piece's top-left corner at drag start
        offset: Point,
    },
}

/// Pointer events coming from the UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Begin { id: PieceId, offset: Point },
    Over,
    /// `pointer` and `container_origin` share the page coordinate frame.
    Drop { pointer: Point, container_origin: Point },
}

/// A room plus the drag gesture in progress.
///
/// Pieces and score are replaced together on every drop, so a reader never
/// sees a score that belongs to another arrangement.
#[derive(Debug, Clone)]
pub struct Board {
    bounds: Bounds,
    pieces: Vec<Piece>,
    score: u8,
    state: DragState,
}

impl Board {
    pub fn new(pieces: Vec<Piece>, bounds: Bounds) -> Self {
        let score = score(&pieces, bounds);
        Self {
            bounds,
            pieces,
            score,
            state: DragState::Idle,
        }
    }

    /// Seeds a fresh room with `count` random pieces.
    pub fn populated<R: Rng + ?Sized>(count: usize, bounds: Bounds, rng: &mut R) -> Self {
        let board = Self::new(populate(count, bounds, rng), bounds);
        info!(
            "Room {}x{} furnished with {} pieces, score {}",
            bounds.width,
            bounds.height,
            board.pieces.len(),
            board.score
        );
        board
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    pub fn score(&self) -> u8 {
        self.score
    }
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Starts dragging piece `id`. A gesture already in progress is dropped.
    pub fn begin_drag(&mut self, id: PieceId, offset: Point) {
        if let DragState::Dragging { target, .. } = self.state {
            debug!("Abandoning drag of piece {target}");
        }
        self.state = DragState::Dragging { target: id, offset };
    }

    /// Drag-over signal; only tells the caller whether a drop is possible.
    pub fn drag_over(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Completes a drag gesture.
    ///
    /// Returns `true` when a piece was moved. Without an active drag, with
    /// the pointer outside the room, or when the dragged piece is not in the
    /// room, nothing changes and the drag (if any) stays active.
    pub fn drop_at(&mut self, pointer: Point, container_origin: Point) -> bool {
        let DragState::Dragging { target, offset } = self.state else {
            warn!("Drop without an active drag ignored");
            return false;
        };

        let local = Point::new(
            pointer.x - container_origin.x,
            pointer.y - container_origin.y,
        );
        if !self.bounds.contains(local) {
            warn!(
                "Drop at ({:.1}, {:.1}) is outside the room, ignored",
                local.x, local.y
            );
            return false;
        }

        if !self.pieces.iter().any(|p| p.id == target) {
            warn!("Dragged piece {target} is not in the room, drop ignored");
            return false;
        }

        let proposed = Point::new(local.x - offset.x, local.y - offset.y);
        self.pieces = move_piece(&self.pieces, target, proposed, self.bounds);
        self.score = score(&self.pieces, self.bounds);
        self.state = DragState::Idle;
        info!("Piece {target} dropped, score {}", self.score);
        true
    }

    /// Applies one event; returns `true` if the pieces or score were updated.
    pub fn handle(&mut self, event: DragEvent) -> bool {
        match event {
            DragEvent::Begin { id, offset } => {
                self.begin_drag(id, offset);
                false
            }
            DragEvent::Over => {
                self.drag_over();
                false
            }
            DragEvent::Drop {
                pointer,
                container_origin,
            } => self.drop_at(pointer, container_origin),
        }
    }
}
