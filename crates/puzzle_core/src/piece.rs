use crate::board::Board;
use crate::coord::Coord;
use crate::outcome::{MoveError, MoveOutcome};

/// The six kinds of piece in the puzzle variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Pawn,
}

impl PieceKind {
    /// Setup-file letter mapping: R-rook, N-knight, B-bishop, Q-queen,
    /// K-king, P-pawn. Either case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Lowercase kind name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
            PieceKind::Pawn => "pawn",
        }
    }
}

/// A piece on the board.
///
/// `label` is the display name exactly as it appeared in the setup file
/// (normally 1-2 characters). `position` is updated only by the board when
/// a move commits; a piece never repositions itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub label: String,
    pub position: Coord,
}

impl Piece {
    pub fn new(kind: PieceKind, label: impl Into<String>, position: Coord) -> Self {
        Self {
            kind,
            label: label.into(),
            position,
        }
    }

    /// Check whether moving this piece to `target` is legal.
    ///
    /// Pure with respect to the board: the borrow is only used to test path
    /// obstruction for the sliding pieces. Bounds checks are the board's
    /// job and have already happened by the time this runs.
    pub fn check_move(&self, board: &Board, target: Coord) -> MoveOutcome {
        let delta = self.position.delta(target);
        let (dr, dc) = (delta.row, delta.col);

        match self.kind {
            PieceKind::Rook => self.sliding_move(board, target, rook_aligned(dr, dc)),
            PieceKind::Bishop => self.sliding_move(board, target, bishop_aligned(dr, dc)),
            PieceKind::Queen => {
                self.sliding_move(board, target, rook_aligned(dr, dc) || bishop_aligned(dr, dc))
            }
            // Any of the 8 neighboring cells; staying put is not a move.
            PieceKind::King if dr.abs().max(dc.abs()) == 1 => Ok(()),
            PieceKind::Knight if (dr.abs(), dc.abs()) == (1, 2) => Ok(()),
            PieceKind::Knight if (dr.abs(), dc.abs()) == (2, 1) => Ok(()),
            // One row toward row index 0, same column. No double-step, no
            // diagonal capture, no backward move: the variant's pawn is
            // deliberately this simple.
            PieceKind::Pawn if dr == -1 && dc == 0 => Ok(()),
            kind => Err(MoveError::IllegalMove { kind, to: target }),
        }
    }

    /// Shared rook/bishop/queen check: wrong alignment is an illegal move,
    /// right alignment with an occupied intermediate cell is a blocked one.
    fn sliding_move(&self, board: &Board, target: Coord, aligned: bool) -> MoveOutcome {
        if !aligned {
            return Err(MoveError::IllegalMove {
                kind: self.kind,
                to: target,
            });
        }
        if !board.is_clear_path(self.position, target) {
            return Err(MoveError::Blocked {
                from: self.position,
                to: target,
            });
        }
        Ok(())
    }
}

// Exactly one axis moves: a rank or file line, but not a non-move.
fn rook_aligned(dr: i32, dc: i32) -> bool {
    (dr == 0) != (dc == 0)
}

// A 45° diagonal, non-move excluded.
fn bishop_aligned(dr: i32, dc: i32) -> bool {
    dr != 0 && dr.abs() == dc.abs()
}
