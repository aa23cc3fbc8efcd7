//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// When set, logs are also written to `<log_dir>/dungeon.log`.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_LOG_DIR` - Directory for the log file (default: stderr only)
    /// - everything read by [`RuntimeConfig::from_env`]
    pub fn from_env() -> Self {
        Self {
            runtime: RuntimeConfig::from_env(),
            log_dir: env::var("DUNGEON_LOG_DIR").ok().map(PathBuf::from),
        }
    }
}
