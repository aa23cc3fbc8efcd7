//! Dungeon game client binary.
//!
//! Builds a session from the environment and replays the command words given
//! on the command line:
//!
//! ```bash
//! DUNGEON_SEED=7 cargo run -p dungeon-client -- right right down wait
//! ```

use anyhow::Result;

use dungeon_client::{ClientConfig, log_summary, logging, parse_commands, replay};
use runtime::GameSession;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let commands = parse_commands(std::env::args().skip(1))?;

    tracing::info!("Starting Dungeon client");
    tracing::info!("Content: {:?}", config.runtime.content_dir);

    let mut session = GameSession::builder()
        .runtime_config(config.runtime)
        .build()?;

    session.subscribe(|| tracing::trace!("session changed"));

    let applied = replay(&mut session, &commands)?;
    tracing::info!("Applied {} of {} command(s)", applied, commands.len());

    log_summary(&session);
    Ok(())
}
