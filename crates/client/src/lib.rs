//! Headless driver for the dungeon session.
//!
//! Replays a scripted list of command words against a [`GameSession`]. This is
//! a smoke driver, not an input layer: words map one-to-one onto the session
//! operations.
pub mod config;
pub mod logging;

use game_core::{GameConfig, MovementVector};
use runtime::GameSession;

pub use config::ClientConfig;

/// One scripted command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    #[strum(to_string = "wait", serialize = "stay")]
    Wait,
    /// Debug shortcut: end the session as a loss.
    #[strum(to_string = "force-game-over", serialize = "g")]
    ForceGameOver,
    /// Debug shortcut: end the session as a win.
    #[strum(to_string = "force-victory", serialize = "v")]
    ForceVictory,
}

impl Command {
    /// Movement vector for the move words; `None` for the forcing words.
    pub fn movement(self) -> Option<MovementVector> {
        match self {
            Command::Up => Some(MovementVector::UP),
            Command::Down => Some(MovementVector::DOWN),
            Command::Left => Some(MovementVector::LEFT),
            Command::Right => Some(MovementVector::RIGHT),
            Command::Wait => Some(MovementVector::STAY),
            Command::ForceGameOver | Command::ForceVictory => None,
        }
    }
}

/// Parses command words, failing on the first unknown one.
pub fn parse_commands<I, S>(words: I) -> anyhow::Result<Vec<Command>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| {
            let word = word.as_ref();
            word.parse::<Command>()
                .map_err(|_| anyhow::anyhow!("Unknown command {:?}", word))
        })
        .collect()
}

/// Applies commands in order until they run out or the session finishes.
/// Returns how many commands were applied.
pub fn replay(session: &mut GameSession, commands: &[Command]) -> runtime::Result<usize> {
    let mut applied = 0;

    for &command in commands {
        if session.is_terminal() {
            tracing::info!(
                "session finished; skipping {} remaining command(s)",
                commands.len() - applied
            );
            break;
        }

        tracing::debug!("command: {}", command);
        match command.movement() {
            Some(movement) => {
                session.advance_turn(movement)?;
            }
            None if command == Command::ForceGameOver => {
                session.force_game_over()?;
            }
            None => {
                session.force_victory()?;
            }
        }
        applied += 1;
    }

    Ok(applied)
}

/// Logs a summary of the session: outcome, level and every character's
/// stats as bars on the stat scale.
pub fn log_summary(session: &GameSession) {
    tracing::info!(
        level = session.level(),
        outcome = ?session.outcome(),
        "final state"
    );

    for character in session.characters() {
        let label = match character.enemy_kind() {
            Some(kind) => kind.to_string(),
            None => "hero".to_string(),
        };
        tracing::info!(
            "{} {:<7} at {} vit {} atk {} spd {}",
            character.id(),
            label,
            character.position(),
            bar(character.vitality()),
            bar(character.attack()),
            bar(character.speed()),
        );
    }
}

fn bar(value: u32) -> String {
    let filled = value.min(GameConfig::STAT_SCALE) as usize;
    let empty = GameConfig::STAT_SCALE as usize - filled;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(empty))
}
