use thiserror::Error;

use crate::coord::Coord;
use crate::piece::PieceKind;

/// Result of attempting a move: either it happened, or the board is
/// untouched and the error says why.
pub type MoveOutcome = Result<(), MoveError>;

/// Every way a move command can fail.
///
/// The `Display` messages are user-facing; the command loop prints them
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The start coordinate is outside the board.
    #[error("No such position: {0}")]
    NoSuchPosition(Coord),

    /// The destination coordinate is outside the board.
    #[error("No such destination: {0}")]
    NoSuchDestination(Coord),

    /// There is no piece at the start coordinate.
    #[error("No such piece: {0}")]
    NoSuchPiece(Coord),

    /// The destination violates the piece's movement shape.
    #[error("Illegal {} move {to}", .kind.name())]
    IllegalMove { kind: PieceKind, to: Coord },

    /// The geometry is right but an occupied cell sits in between.
    /// Only sliding pieces (rook, bishop, queen) can hit this.
    #[error("The way is blocked: {from} -> {to}")]
    Blocked { from: Coord, to: Coord },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_piece_and_destination() {
        let err = MoveError::IllegalMove {
            kind: PieceKind::Knight,
            to: Coord::new(4, 4),
        };
        assert_eq!(err.to_string(), "Illegal knight move (4, 4)");
    }

    #[test]
    fn blocked_message_names_both_endpoints() {
        let err = MoveError::Blocked {
            from: Coord::new(0, 0),
            to: Coord::new(8, 8),
        };
        assert_eq!(err.to_string(), "The way is blocked: (0, 0) -> (8, 8)");
    }
}
