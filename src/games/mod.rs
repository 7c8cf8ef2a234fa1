//! The arcade games.
//!
//! Each game implements `Game`: it starts a session, loops on the port
//! while it is the active game, updates the shared counters, and ends
//! the session when the player stops.
//!
//! - `guessing`: guess a secret number between 1 and 10
//! - `oracle`: magic eight ball
//! - `duel`: bear, ninja, hunter

pub mod duel;
pub mod guessing;
pub mod oracle;

pub use duel::{Choice, DuelGame, MatchHistory, RoundOutcome, RoundResult};
pub use guessing::{GuessingGame, Hint};
pub use oracle::{OracleGame, ORACLE_ANSWERS};

use crate::core::{ArcadeState, GameId, Result};
use crate::io::Host;
use crate::session::SessionSummary;

/// A playable arcade game.
pub trait Game {
    /// Which game this is.
    fn id(&self) -> GameId;

    /// Play until the player stops.
    ///
    /// Returns the session summary if the player also left the arcade.
    fn play(&mut self, state: &mut ArcadeState, host: &mut Host<'_>)
        -> Result<Option<SessionSummary>>;
}
