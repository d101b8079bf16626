use std::path::PathBuf;
use std::process;

use anyhow::{Result, bail};

use ascii_leaderboard::{
    assets::Assets, config::BoardConfig, display, logging, session::Session,
};

const USAGE: &str = "ascii-leaderboard [config.json]";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let config = match args.next().as_deref() {
        None => BoardConfig::default(),
        Some("-h" | "--help") => bail!("Animated terminal leaderboard\n\nUsage:\n  {USAGE}"),
        Some(path) => BoardConfig::load(&PathBuf::from(path))?,
    };
    if args.next().is_some() {
        bail!("Too many arguments\n\nUsage:\n  {USAGE}");
    }

    let _guard = logging::init(&config.log_file);
    tracing::info!(teams = config.team_count, title = %config.title, "starting leaderboard");

    let assets = Assets::load(&config.assets);
    let mut session = Session::new(config, assets);
    display::play(&mut session)
}
