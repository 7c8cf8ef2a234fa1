//! Arcade configuration.
//!
//! Game rules are fixed. Configuration only covers how a run is set up:
//! - `seed`: RNG seed, for reproducible runs
//! - `player_name`: preset name, skips the name prompt

use serde::{Deserialize, Serialize};

use super::rng::ArcadeRng;

/// Run configuration for an `Arcade`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcadeConfig {
    /// RNG seed. `None` draws one from the thread RNG.
    pub seed: Option<u64>,

    /// Player name to use instead of asking.
    pub player_name: Option<String>,
}

impl ArcadeConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset the player name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    /// Build the RNG for this configuration.
    #[must_use]
    pub fn rng(&self) -> ArcadeRng {
        let seed = self.seed.unwrap_or_else(rand::random::<u64>);
        ArcadeRng::new(seed)
    }
}
