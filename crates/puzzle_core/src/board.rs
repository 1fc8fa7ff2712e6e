use std::collections::HashMap;

use crate::coord::Coord;
use crate::outcome::{MoveError, MoveOutcome};
use crate::piece::Piece;

/// The board: a `num_rows x num_cols` grid where every cell holds at most
/// one piece.
///
/// The board owns its pieces. Invariant: for every entry, the stored
/// piece's `position` equals the cell it occupies, before and after every
/// public operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    num_rows: i32,
    num_cols: i32,
    pieces: HashMap<Coord, Piece>,
}

impl Board {
    /// An empty board. Dimensions must be positive; the setup parser
    /// guarantees that before constructing one.
    pub fn new(num_rows: i32, num_cols: i32) -> Self {
        assert!(
            num_rows > 0 && num_cols > 0,
            "board dimensions must be positive, got {num_rows}x{num_cols}"
        );
        Self {
            num_rows,
            num_cols,
            pieces: HashMap::new(),
        }
    }

    pub fn num_rows(&self) -> i32 {
        self.num_rows
    }

    pub fn num_cols(&self) -> i32 {
        self.num_cols
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        (0..self.num_rows).contains(&pos.row) && (0..self.num_cols).contains(&pos.col)
    }

    pub fn is_occupied(&self, pos: Coord) -> bool {
        self.pieces.contains_key(&pos)
    }

    pub fn piece_at(&self, pos: Coord) -> Option<&Piece> {
        self.pieces.get(&pos)
    }

    /// Put `piece` at `pos`, erasing any piece that is already there
    /// (capture-by-overwrite). Also records the new position on the piece.
    ///
    /// Used during setup and internally when a move commits.
    pub fn place(&mut self, pos: Coord, mut piece: Piece) {
        piece.position = pos;
        self.pieces.insert(pos, piece);
    }

    /// Remove any occupant of `pos`, e.g. due to capture.
    pub fn clear(&mut self, pos: Coord) {
        self.pieces.remove(&pos);
    }

    /// Can a piece travel in a straight line from `start` to `end` without
    /// encountering other pieces along the way? The endpoints themselves
    /// are not examined.
    ///
    /// Preconditions (upheld by the sliding pieces, the only callers):
    /// both endpoints are in bounds and the line between them is
    /// horizontal, vertical, or an exact 45° diagonal.
    pub fn is_clear_path(&self, start: Coord, end: Coord) -> bool {
        let step = start.delta(end).direction();
        let mut pos = start.plus(step);
        while pos != end {
            debug_assert!(self.in_bounds(pos), "is_clear_path preconditions violated");
            if self.is_occupied(pos) {
                return false;
            }
            pos = pos.plus(step);
        }
        true
    }

    /// Attempt to move the piece at `start` to `end`. The sole mutating
    /// entry point for gameplay.
    ///
    /// Bounds and occupancy are checked here; the piece itself judges the
    /// geometry. Nothing mutates until legality is confirmed, so a failed
    /// move leaves the board exactly as it was. A piece already sitting at
    /// `end` is captured and dropped.
    pub fn make_move(&mut self, start: Coord, end: Coord) -> MoveOutcome {
        if !self.in_bounds(start) {
            return Err(MoveError::NoSuchPosition(start));
        }
        if !self.in_bounds(end) {
            return Err(MoveError::NoSuchDestination(end));
        }

        // Clone the mover up front so the legality check can borrow the
        // whole board.
        let mover = match self.pieces.get(&start) {
            Some(piece) => piece.clone(),
            None => return Err(MoveError::NoSuchPiece(start)),
        };
        mover.check_move(self, end)?;

        // Legality confirmed; the move commits as a whole from here.
        self.clear(start);
        if let Some(victim) = self.pieces.remove(&end) {
            log::info!("{} takes {}: {}", mover.label, victim.label, end);
        }
        self.place(end, mover);
        Ok(())
    }

    /// All pieces currently on the board, in no particular order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }
}
