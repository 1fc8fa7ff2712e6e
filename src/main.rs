use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use puzzle_cli::session::{run_session, SessionConfig};
use puzzle_cli::setup::parse_setup;

/// Failure code when the board setup file cannot be used.
const BAD_CONFIG_FILE: u8 = 2;

/// Solitaire chess puzzle: load a board setup file, then play move
/// commands from standard input.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Board setup (configuration) file.
    setup_file: PathBuf,

    /// Echo all user input on the output. Use this when commands come
    /// from a test file instead of an actual console.
    #[arg(long)]
    echo: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(BAD_CONFIG_FILE)
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.setup_file)
        .with_context(|| format!("cannot read setup file {}", args.setup_file.display()))?;
    let mut board = parse_setup(&text)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &mut board,
        SessionConfig { echo: args.echo },
        stdin.lock(),
        stdout.lock(),
    )?;
    Ok(())
}
