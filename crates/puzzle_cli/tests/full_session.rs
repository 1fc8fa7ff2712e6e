//! End-to-end: parse a setup file, feed a scripted command session, and
//! check what came out the other side.

use puzzle_cli::session::{run_session, SessionConfig};
use puzzle_cli::setup::parse_setup;
use puzzle_core::{Coord, PieceKind};

const SETUP_13X13: &str = "\
# 13x13 piece-movement test board
13 13
B 2 2
R 2 5
Q 2 8
N 3 2
K 5 4
P 8 8
";

fn play(commands: &str) -> (puzzle_core::Board, String) {
    let mut board = parse_setup(SETUP_13X13).unwrap();
    let mut output = Vec::new();
    run_session(
        &mut board,
        SessionConfig::default(),
        commands.as_bytes(),
        &mut output,
    )
    .unwrap();
    (board, String::from_utf8(output).unwrap())
}

#[test]
fn a_full_little_game() {
    let commands = "\
2 2 0 0
0 0 8 8
2 5 0 5
quit
";
    let (board, output) = play(commands);

    // The bishop ended up where the pawn was, the rook moved up its file.
    assert_eq!(
        board.piece_at(Coord::new(8, 8)).map(|p| p.kind),
        Some(PieceKind::Bishop)
    );
    assert_eq!(
        board.piece_at(Coord::new(0, 5)).map(|p| p.kind),
        Some(PieceKind::Rook)
    );
    assert!(!board.pieces().any(|p| p.kind == PieceKind::Pawn));

    // No error messages anywhere in the transcript.
    assert!(!output.contains("Illegal"));
    assert!(!output.contains("No such"));
    assert!(!output.contains("blocked"));
}

#[test]
fn failures_are_printed_and_harmless() {
    let commands = "\
9 9 0 0
20 1 0 0
2 8 20 8
2 2 2 4
2 8 2 2
quit
";
    let (board, output) = play(commands);

    assert!(output.contains("No such piece: (9, 9)"));
    assert!(output.contains("No such position: (20, 1)"));
    assert!(output.contains("No such destination: (20, 8)"));
    assert!(output.contains("Illegal bishop move (2, 4)"));
    assert!(output.contains("The way is blocked: (2, 8) -> (2, 2)"));

    // Six pieces, all where the setup put them.
    assert_eq!(board.pieces().count(), 6);
    assert_eq!(board, parse_setup(SETUP_13X13).unwrap());
}

#[test]
fn board_rendering_shows_labels_and_placeholders() {
    let (_, output) = play("quit\n");
    // Column header plus the row that holds the king.
    assert!(output.contains(" 0  1  2  3  4"));
    assert!(output.contains(" 5  __ __ __ __ K  "));
}

#[test]
fn session_survives_arbitrary_garbage() {
    let commands = "\
move the rook please
2 5
2 5 0 five
2 5 0 5
QUIT
";
    let (board, output) = play(commands);
    assert!(output.contains("Illegal move specification: move the rook please"));
    assert!(output.contains("Illegal move specification: 2 5"));
    assert!(output.contains("Illegal move specification: 2 5 0 five"));
    assert_eq!(
        board.piece_at(Coord::new(0, 5)).map(|p| p.kind),
        Some(PieceKind::Rook)
    );
}
