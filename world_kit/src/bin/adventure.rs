
//! Plays a world kit level on the console. Without `--level` the built in first level is played.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use log::{error, info, LevelFilter};

use world_kit::{level1, Game, Level, Result};

#[derive(Parser, Debug)]
#[command(version, about = "A tiny text adventure")]
struct Args {
    /// Log more details. Can be given up to three times.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Play a level loaded from this file instead of the built in one
    #[arg(long, value_name = "FILE")]
    level: Option<PathBuf>,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn load_level(args: &Args) -> Result<Level> {
    match args.level {
        Some(ref path) => {
            info!("Loading level from {}", path.display());
            let source = fs::read_to_string(path)?;
            Level::from_toml(&source)
        },
        None => level1(),
    }
}

fn run(args: &Args) -> Result<()> {
    let level = load_level(args)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = Game::new(level, stdin.lock(), stdout.lock());
    game.run()
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity() {
        let args = Args::parse_from(&["adventure", "-vv", "--level", "cellar.toml"]);
        assert_eq!(2, args.verbose);
        assert_eq!(Some(PathBuf::from("cellar.toml")), args.level);
        assert_eq!(LevelFilter::Debug, log_level(args.verbose));

        assert_eq!(LevelFilter::Warn, log_level(0));
        assert_eq!(LevelFilter::Trace, log_level(7));
    }
}
