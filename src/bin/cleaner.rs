use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use cleaner::parser::{read_plan, Plan};
use cleaner::{Coverage, Result, Tracker};
use log::{error, info};

/// Counts the distinct cells a cleaning robot passes over.
///
/// Input: the number of moves, the starting `x y`, then one `<E|W|N|S> <steps>`
/// per line.
#[derive(Parser)]
#[command(name = "cleaner")]
struct Cli {
    /// File with the moves, or "-" for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Log every move to stderr
    #[arg(short, long)]
    verbose: bool,
}

pub fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    match run(&cli) {
        Ok(count) => println!("=> Cleaned: {count}"),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<u64> {
    let Plan { origin, moves } = if cli.input.as_os_str() == "-" {
        read_plan(std::io::stdin().lock())?
    } else {
        read_plan(File::open(&cli.input)?)?
    };

    info!("{} moves from {origin:?}", moves.len());

    Tracker::new(origin).apply_all(moves)
}
