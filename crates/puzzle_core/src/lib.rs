// Core puzzle game logic modules
pub mod board;
pub mod coord;
pub mod outcome;
pub mod piece;

// Re-export main types for convenience
pub use board::Board;
pub use coord::Coord;
pub use outcome::{MoveError, MoveOutcome};
pub use piece::{Piece, PieceKind};
