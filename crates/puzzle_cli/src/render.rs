use puzzle_core::{Board, Coord};

/// How an empty cell shows up on the rendered board.
const EMPTY_CELL: &str = "__ ";

/// Render the whole board with coordinates as display text.
///
/// A header row of column indices, then one row per board row with the row
/// index on the left. Cells are 3-wide fields; labels wider than two
/// characters would break the alignment, so the setup convention keeps
/// them at 1-2 characters.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    out.push('\n');

    out.push_str("    ");
    for col in 0..board.num_cols() {
        out.push_str(&format!("{col:2} "));
    }
    out.push('\n');

    for row in 0..board.num_rows() {
        out.push_str(&format!("{row:2}  "));
        for col in 0..board.num_cols() {
            match board.piece_at(Coord::new(row, col)) {
                Some(piece) => out.push_str(&format!("{:<3}", piece.label)),
                None => out.push_str(EMPTY_CELL),
            }
        }
        out.push('\n');
    }

    out.push('\n');
    out
}
