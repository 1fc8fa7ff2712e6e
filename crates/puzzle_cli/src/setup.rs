use puzzle_core::{Board, Coord, Piece, PieceKind};
use thiserror::Error;

/// A line in the setup file that starts with this character is ignored.
pub const COMMENT: char = '#';

/// Fatal setup problems. Only the dimensions line can abort setup; bad
/// piece lines are logged and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("Improper first line of config file: {line}")]
    BadDimensions { line: String },

    #[error("config file has no dimensions line")]
    MissingDimensions,
}

/// Build a board from setup text.
///
/// The first significant (non-blank, non-comment) line holds the board
/// dimensions as `numRows numCols`; each further significant line holds
/// `<label> <row> <col>` where the label's first letter picks the piece
/// kind. Malformed piece lines are reported and skipped; a later piece on
/// an already-used cell simply replaces the earlier one.
pub fn parse_setup(text: &str) -> Result<Board, SetupError> {
    let mut lines = text.lines().filter(|line| is_significant(line));

    let first = lines.next().ok_or(SetupError::MissingDimensions)?;
    let (num_rows, num_cols) = parse_dimensions(first).ok_or_else(|| SetupError::BadDimensions {
        line: first.to_string(),
    })?;

    let mut board = Board::new(num_rows, num_cols);
    for line in lines {
        if let Some((pos, piece)) = parse_piece_line(line, &board) {
            board.place(pos, piece);
        }
    }
    Ok(board)
}

fn is_significant(line: &str) -> bool {
    let trimmed = line.trim_start();
    !trimmed.is_empty() && !trimmed.starts_with(COMMENT)
}

fn parse_dimensions(line: &str) -> Option<(i32, i32)> {
    let dims: Vec<&str> = line.split_whitespace().collect();
    let [rows, cols] = dims.as_slice() else {
        return None;
    };
    match (rows.parse::<i32>(), cols.parse::<i32>()) {
        (Ok(rows), Ok(cols)) if rows > 0 && cols > 0 => Some((rows, cols)),
        _ => None,
    }
}

/// One piece line. `None` means the line was bad in some way; the
/// reason has been logged and setup carries on.
fn parse_piece_line(line: &str, board: &Board) -> Option<(Coord, Piece)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [label, row, col] = parts.as_slice() else {
        log::warn!("Improper config line: {line}");
        return None;
    };

    // Non-integer coordinates are a skipped line, not a crash.
    let (Ok(row), Ok(col)) = (row.parse::<i32>(), col.parse::<i32>()) else {
        log::warn!("Improper config line: {line}");
        return None;
    };

    if row < 0 || row >= board.num_rows() {
        log::warn!("Illegal row: {line}");
        return None;
    }
    if col < 0 || col >= board.num_cols() {
        log::warn!("Illegal column: {line}");
        return None;
    }

    let letter = label.chars().next()?;
    let Some(kind) = PieceKind::from_letter(letter) else {
        log::warn!("Unknown piece in config line: {line}");
        return None;
    };

    let pos = Coord::new(row, col);
    Some((pos, Piece::new(kind, *label, pos)))
}
