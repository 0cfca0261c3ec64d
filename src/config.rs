//! Console configuration
//!
//! Nothing is persisted by this crate. Hosts that keep their own config file can
//! embed [`ConsoleConfig`] in it; everyone else reads it from the environment.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable selecting the progress renderer.
pub const PROGRESS_MODE_VAR: &str = "CC_PROGRESS_MODE";

/// Progress bar rendering style
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStyle {
    /// Solid blocks over a light-shade track
    #[default]
    Blocks,
    /// A marker eating its way through a row of dots
    Pacman,
}

/// Console configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub progress: ProgressStyle,
}

impl ConsoleConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let progress = match lookup(PROGRESS_MODE_VAR) {
            Some(value) if value.trim().eq_ignore_ascii_case("pacman") => ProgressStyle::Pacman,
            Some(value) => {
                debug!(value = %value, "unknown progress mode, using blocks");
                ProgressStyle::Blocks
            }
            None => ProgressStyle::Blocks,
        };
        Self { progress }
    }

    /// Override the progress style.
    pub fn with_progress(mut self, progress: ProgressStyle) -> Self {
        self.progress = progress;
        self
    }
}
