//! Arcade state shared by every game in a session.
//!
//! ## GameId
//!
//! The three games. At most one is active at a time; `ArcadeState` stores
//! the active game as a single `Option<GameId>`.
//!
//! ## ArcadeState
//!
//! - Player name (asked once per session)
//! - Active game
//! - Cumulative games played and wins
//! - Whether the player has left the arcade
//!
//! Counters only move through `record_round`, which keeps
//! `wins <= games_played`.

use serde::{Deserialize, Serialize};

/// Identifier of one of the arcade games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameId {
    /// Guess a secret number between 1 and 10.
    Guessing,
    /// Magic eight ball.
    Oracle,
    /// Bear, ninja, hunter.
    Duel,
}

impl GameId {
    /// All games in menu order.
    pub const ALL: [GameId; 3] = [GameId::Guessing, GameId::Oracle, GameId::Duel];

    /// Short name used by the selection menu.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameId::Guessing => "guess",
            GameId::Oracle => "oracle",
            GameId::Duel => "duel",
        }
    }

    /// Parse a menu selection: the short name or its 1-based position.
    ///
    /// ```
    /// use rust_arcade::core::GameId;
    ///
    /// assert_eq!(GameId::from_selection(" Oracle "), Some(GameId::Oracle));
    /// assert_eq!(GameId::from_selection("3"), Some(GameId::Duel));
    /// assert_eq!(GameId::from_selection("chess"), None);
    /// ```
    #[must_use]
    pub fn from_selection(input: &str) -> Option<GameId> {
        let input = input.trim().to_lowercase();
        GameId::ALL
            .iter()
            .enumerate()
            .find(|(i, game)| input == game.name() || input == (i + 1).to_string())
            .map(|(_, game)| *game)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = match self {
            GameId::Guessing => "Guessing Game",
            GameId::Oracle => "Magic Eight Ball",
            GameId::Duel => "Bear Ninja Hunter",
        };
        f.write_str(title)
    }
}

/// Mutable state of one arcade session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcadeState {
    player_name: Option<String>,
    active_game: Option<GameId>,
    session_ended: bool,
    games_played: u32,
    wins: u32,
}

impl ArcadeState {
    /// Create a fresh state: no name, no active game, zero counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Player ===

    /// Recorded player name, if any.
    #[must_use]
    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    /// Player name for use in prompts. Empty before a name is recorded.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.player_name.as_deref().unwrap_or("")
    }

    /// Record the player name, trimmed. Blank names are ignored.
    ///
    /// Returns whether the name was accepted.
    pub fn set_player_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.player_name = Some(name.to_string());
        true
    }

    /// Check whether a non-blank name is recorded.
    #[must_use]
    pub fn has_player_name(&self) -> bool {
        self.player_name.is_some()
    }

    // === Active Game ===

    /// Currently active game.
    #[must_use]
    pub fn active_game(&self) -> Option<GameId> {
        self.active_game
    }

    /// Check if the given game is the active one.
    #[must_use]
    pub fn is_active(&self, game: GameId) -> bool {
        self.active_game == Some(game)
    }

    /// Make `game` the active game, replacing any other.
    pub fn activate(&mut self, game: GameId) {
        self.active_game = Some(game);
    }

    /// Deactivate `game`. Does nothing if another game is active.
    pub fn deactivate(&mut self, game: GameId) {
        if self.is_active(game) {
            self.active_game = None;
        }
    }

    // === Session ===

    /// Check whether the player has left the arcade.
    #[must_use]
    pub fn session_ended(&self) -> bool {
        self.session_ended
    }

    /// Mark whether the player has left the arcade.
    pub fn set_session_ended(&mut self, ended: bool) {
        self.session_ended = ended;
    }

    // === Counters ===

    /// Total rounds played across all games.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Total rounds won across all games.
    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Count one finished round, and a win if `won`.
    pub fn record_round(&mut self, won: bool) {
        self.games_played += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Win percentage in `[0, 100]`. Zero when nothing was played.
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.games_played) * 100.0
    }
}
