//! Game session: the owner of one game's state.
//!
//! A session is built explicitly through [`SessionBuilder`]; there is no
//! global instance. Every mutation goes through `&mut self`, resolves to
//! completion, and then notifies listeners once.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use game_content::{ContentFactory, Scenario, builtin};
use game_core::{
    ChasePolicy, Character, CharacterId, EnemyPolicy, ErrorSeverity, GameConfig, GameEngine,
    GameError, GameState, GridMap, MovementVector, Outcome, TurnEvent, TurnOutcome,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::events::{ChangeNotifier, SubscriptionId};

/// One running game.
pub struct GameSession {
    state: GameState,
    /// Snapshot restored by [`reset`](Self::reset).
    initial: GameState,
    config: GameConfig,
    policy: Box<dyn EnemyPolicy>,
    notifier: ChangeNotifier,
}

impl GameSession {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Resolves one turn with the hero's movement vector.
    ///
    /// Listeners are notified once when the turn resolves. A finished session
    /// ignores the request and notifies nobody. Invalid vectors are rejected
    /// before anything changes.
    pub fn advance_turn(&mut self, movement: MovementVector) -> Result<TurnOutcome> {
        let result =
            GameEngine::new(&mut self.state).advance_turn(movement, self.policy.as_ref());

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                match error.severity() {
                    ErrorSeverity::Validation => warn!(
                        target: "runtime::session",
                        code = error.error_code(),
                        "rejected movement {}: {}",
                        movement,
                        error
                    ),
                    _ => tracing::error!(
                        target: "runtime::session",
                        code = error.error_code(),
                        "turn failed: {}",
                        error
                    ),
                }
                return Err(error.into());
            }
        };

        match &outcome {
            TurnOutcome::Ignored(terminal) => {
                debug!(
                    target: "runtime::session",
                    ?terminal,
                    "session finished; movement {} ignored",
                    movement
                );
            }
            TurnOutcome::Resolved(report) => {
                for event in &report.events {
                    log_event(event);
                }
                info!(
                    target: "runtime::session",
                    level = report.level,
                    outcome = ?report.outcome,
                    hero_vitality = self.state.hero().vitality(),
                    "turn resolved"
                );
                self.notifier.notify();
            }
        }

        Ok(outcome)
    }

    /// Ends the session as a loss. Returns `false` if it had already ended.
    pub fn force_game_over(&mut self) -> Result<bool> {
        let applied = GameEngine::new(&mut self.state).force_game_over()?;
        self.after_forcing(applied, Outcome::GameOver);
        Ok(applied)
    }

    /// Ends the session as a win. Returns `false` if it had already ended.
    pub fn force_victory(&mut self) -> Result<bool> {
        let applied = GameEngine::new(&mut self.state).force_victory()?;
        self.after_forcing(applied, Outcome::Victory);
        Ok(applied)
    }

    /// Restores the state the session was built with and notifies listeners.
    /// Subscriptions survive the reset.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        info!(target: "runtime::session", "session reset");
        self.notifier.notify();
    }

    fn after_forcing(&mut self, applied: bool, outcome: Outcome) {
        if applied {
            info!(target: "runtime::session", ?outcome, "outcome forced");
            self.notifier.notify();
        } else {
            debug!(
                target: "runtime::session",
                current = ?self.state.outcome(),
                "session already finished; forcing ignored"
            );
        }
    }

    /// Registers a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut() + Send + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn map(&self) -> &GridMap {
        self.state.map()
    }

    /// Every character, dead ones included, in priority order.
    pub fn characters(&self) -> impl Iterator<Item = &Character> + '_ {
        self.state.characters()
    }

    pub fn hero(&self) -> &Character {
        self.state.hero()
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.state.character(id)
    }

    pub fn level(&self) -> u64 {
        self.state.level()
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn is_victory(&self) -> bool {
        self.state.is_victory()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("level", &self.state.level())
            .field("outcome", &self.state.outcome())
            .field("config", &self.config)
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

fn log_event(event: &TurnEvent) {
    match *event {
        TurnEvent::Moved {
            character,
            from,
            to,
        } => debug!(target: "runtime::session", "{} moved {} -> {}", character, from, to),
        TurnEvent::Blocked { character, target } => {
            debug!(target: "runtime::session", "{} blocked at {}", character, target)
        }
        TurnEvent::Attacked {
            attacker,
            defender,
            damage,
            remaining,
        } => debug!(
            target: "runtime::session",
            "{} hit {} for {} ({} left)",
            attacker,
            defender,
            damage,
            remaining
        ),
        TurnEvent::Died {
            character,
            position,
        } => debug!(target: "runtime::session", "{} died at {}", character, position),
    }
}

/// Builder for [`GameSession`] with flexible configuration.
///
/// Where the initial state comes from, in order of precedence:
/// 1. an explicit [`state`](Self::state) or [`scenario`](Self::scenario)
/// 2. a content directory
/// 3. the built-in scenario
pub struct SessionBuilder {
    config: Option<GameConfig>,
    state: Option<GameState>,
    content_dir: Option<PathBuf>,
    overrides: RuntimeConfig,
    policy: Option<Box<dyn EnemyPolicy>>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: None,
            state: None,
            content_dir: None,
            overrides: RuntimeConfig::default(),
            policy: None,
        }
    }

    /// Override game configuration
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Provide initial game state
    pub fn state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Provide initial state and configuration together
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.state = Some(scenario.state);
        self.config = Some(scenario.config);
        self
    }

    /// Load content from a directory at build time
    pub fn content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = Some(dir.into());
        self
    }

    /// Apply environment-derived settings: content directory and overrides.
    pub fn runtime_config(mut self, runtime: RuntimeConfig) -> Self {
        if let Some(dir) = runtime.content_dir.clone() {
            self.content_dir = Some(dir);
        }
        self.overrides = runtime;
        self
    }

    /// Set the enemy policy (default: [`ChasePolicy`] from the config)
    pub fn policy(mut self, policy: impl EnemyPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Build the session
    pub fn build(self) -> Result<GameSession> {
        let (state, content_config) = match (self.state, self.content_dir) {
            (Some(state), _) => (state, None),
            (None, Some(dir)) => {
                info!(target: "runtime::session", dir = %dir.display(), "loading content");
                let scenario = ContentFactory::new(dir)
                    .load_scenario()
                    .map_err(RuntimeError::content)?;
                (scenario.state, Some(scenario.config))
            }
            (None, None) => {
                let scenario = builtin::default_scenario().map_err(RuntimeError::content)?;
                (scenario.state, Some(scenario.config))
            }
        };

        state.validate().map_err(RuntimeError::InitialState)?;

        let config = self
            .overrides
            .apply(self.config.or(content_config).unwrap_or_default());
        let policy = self
            .policy
            .unwrap_or_else(|| Box::new(ChasePolicy::from_config(&config)) as Box<dyn EnemyPolicy>);

        info!(
            target: "runtime::session",
            rows = state.map().dimensions().rows,
            cols = state.map().dimensions().cols,
            characters = state.character_count(),
            seed = config.seed,
            "session started"
        );

        Ok(GameSession {
            initial: state.clone(),
            state,
            config,
            policy,
            notifier: ChangeNotifier::new(),
        })
    }
}
