use clap::Parser;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use link_board::{BoardConfig, BoardSession};

#[derive(Parser, Debug)]
#[command(
    name = "board_cli",
    about = "Build a link-game board from a JSON config and print it",
    version
)]
struct Cli {
    /// Path to a JSON board config (see BoardConfig)
    #[arg(short = 'c', long = "config")]
    config: PathBuf,

    /// Write the rendered board here instead of stdout
    #[arg(short = 'o', long = "out")]
    out: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = BoardConfig::from_path(&cli.config)?;

    let mut session = BoardSession::new();
    session.initialize(config.into_source())?;
    let table = session.table()?;

    let rendered = table.render();
    match &cli.out {
        Some(path) => fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }

    eprintln!("built {}x{} board", table.rows(), table.cols());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("board build failed: {e}");
            ExitCode::FAILURE
        }
    }
}
