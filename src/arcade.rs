//! Arcade runner: game selection and reload.
//!
//! `Arcade` owns the session state and one instance of each game, each
//! with its own RNG stream derived from the configured seed.

use tracing::{debug, info};

use crate::core::{ArcadeConfig, ArcadeState, GameId, InputError, Result};
use crate::games::{DuelGame, Game, GuessingGame, OracleGame};
use crate::io::{Host, Port, Region, RenderSink};
use crate::session::SessionSummary;

/// Game selection prompt.
pub const SELECT_PROMPT: &str = "Pick a game: guess, oracle or duel.";

/// A running arcade.
pub struct Arcade {
    config: ArcadeConfig,
    state: ArcadeState,
    guessing: GuessingGame,
    oracle: OracleGame,
    duel: DuelGame,
}

impl Arcade {
    /// Create an arcade from `config`.
    #[must_use]
    pub fn new(config: ArcadeConfig) -> Self {
        let rng = config.rng();
        info!(seed = rng.seed(), "arcade opened");

        let mut arcade = Self {
            state: ArcadeState::new(),
            guessing: GuessingGame::new(rng.for_context("guessing")),
            oracle: OracleGame::new(rng.for_context("oracle")),
            duel: DuelGame::new(rng.for_context("duel")),
            config,
        };
        arcade.apply_preset_name();
        arcade
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> &ArcadeState {
        &self.state
    }

    fn apply_preset_name(&mut self) {
        if let Some(name) = &self.config.player_name {
            self.state.set_player_name(name);
        }
    }

    /// Play one game, as if its button was pressed.
    ///
    /// Returns the session summary if the player left the arcade.
    pub fn play(&mut self, game: GameId, host: &mut Host<'_>) -> Result<Option<SessionSummary>> {
        let engine: &mut dyn Game = match game {
            GameId::Guessing => &mut self.guessing,
            GameId::Oracle => &mut self.oracle,
            GameId::Duel => &mut self.duel,
        };
        debug!(game = %engine.id(), "game selected");
        engine.play(&mut self.state, host)
    }

    /// Ask which game to play until a valid one is named.
    pub fn select_game(&self, port: &mut dyn Port) -> Result<GameId> {
        loop {
            let input = port.ask(SELECT_PROMPT)?;
            let error = match input.as_deref() {
                None => InputError::NullInput,
                Some(text) => match GameId::from_selection(text) {
                    Some(game) => return Ok(game),
                    None => InputError::InvalidEntry,
                },
            };
            port.notify(&error.to_string())?;
        }
    }

    /// Select and play games until the player leaves the arcade.
    pub fn run(&mut self, host: &mut Host<'_>) -> Result<SessionSummary> {
        loop {
            let game = self.select_game(host.port)?;
            if let Some(summary) = self.play(game, host)? {
                return Ok(summary);
            }
        }
    }

    /// Start over: fresh state, game selection shown again.
    pub fn reload(&mut self, sink: &mut dyn RenderSink) -> Result<()> {
        self.state = ArcadeState::new();
        self.apply_preset_name();
        sink.set_region_visible(Region::GameReload, false)?;
        sink.set_region_visible(Region::GameSelection, true)?;
        info!("arcade reloaded");
        Ok(())
    }
}
