use std::io::{self, BufRead, Write};

use puzzle_core::{Board, Coord};

use crate::render::render;

/// What the user types to end the session.
pub const END_GAME: &str = "quit";

/// Session options, threaded through explicitly instead of living in
/// process-wide state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Echo each input line before processing it. Useful when commands
    /// come from a file instead of an actual console.
    pub echo: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Move { start: Coord, end: Coord },
    Malformed,
}

/// The main game loop.
///
/// Reads whitespace-separated commands from `input` until end of input or
/// `quit`: four integers (`startRow startCol endRow endCol`) attempt a
/// move, anything else is reported as a format error without touching the
/// board. The board is shown before the first command and after every
/// attempted move.
pub fn run_session<R, W>(
    board: &mut Board,
    config: SessionConfig,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    show_board_and_prompt(board, &mut output)?;

    for line in input.lines() {
        let line = line?;
        if config.echo {
            writeln!(output, "{line}")?;
        }

        match parse_command(&line) {
            Command::Quit => break,
            Command::Malformed => {
                // Just have the user try again.
                writeln!(output, "Illegal move specification: {line}")?;
                continue;
            }
            Command::Move { start, end } => {
                if let Err(err) = board.make_move(start, end) {
                    writeln!(output, "{err}")?;
                }
            }
        }

        show_board_and_prompt(board, &mut output)?;
    }
    Ok(())
}

fn show_board_and_prompt<W: Write>(board: &Board, output: &mut W) -> io::Result<()> {
    write!(output, "{}", render(board))?;
    write!(output, "\n> ")?;
    output.flush()
}

/// Classify one input line. Non-integer coordinate tokens make the command
/// malformed rather than ending the session.
fn parse_command(line: &str) -> Command {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if let [token] = tokens.as_slice() {
        if token.eq_ignore_ascii_case(END_GAME) {
            return Command::Quit;
        }
    }

    let [start_row, start_col, end_row, end_col] = tokens.as_slice() else {
        return Command::Malformed;
    };
    match (
        start_row.parse::<i32>(),
        start_col.parse::<i32>(),
        end_row.parse::<i32>(),
        end_col.parse::<i32>(),
    ) {
        (Ok(sr), Ok(sc), Ok(er), Ok(ec)) => Command::Move {
            start: Coord::new(sr, sc),
            end: Coord::new(er, ec),
        },
        _ => Command::Malformed,
    }
}
