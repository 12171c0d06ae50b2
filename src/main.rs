use std::io;

use anyhow::Result;
use tracing::{Level, info};

use kingsafe_play::{Game, PlayConfig};

fn main() -> Result<()> {
    let config = PlayConfig::from_args(std::env::args().skip(1))?;

    let level = if config.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    info!("kingsafe starting");

    let mut game = Game::with_config(config);
    let outcome = game.run(io::stdin().lock(), io::stdout().lock())?;
    info!(?outcome, "kingsafe exiting");
    Ok(())
}
