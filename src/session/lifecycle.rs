//! Session lifecycle: starting and ending a game.
//!
//! `start_session` makes sure a player name is recorded and activates the
//! game. `end_session` deactivates it and asks whether to pick another
//! game; if not, it renders the results and medal and swaps the game
//! selection for the reload affordance.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::confirm::{confirm, Answer};
use super::medal::Medal;
use crate::core::{ArcadeState, GameId, InputError, Result};
use crate::io::{Host, Port, Region};

/// Name prompt, shown until a non-blank name is entered.
pub const ENTER_NAME: &str = "Welcome! What's your name?";

/// Asked after every round.
pub const KEEP_PLAYING: &str = "Would you like to keep playing this game? yes/no";

/// Asked when a game ends.
pub const PICK_ANOTHER: &str = "Would you like to pick another game to play? yes/no";

/// Final results of a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub games_played: u32,
    pub wins: u32,
    pub win_percentage: f64,
    pub medal: Medal,
}

impl SessionSummary {
    /// Summarize the counters of `state`.
    #[must_use]
    pub fn from_state(state: &ArcadeState) -> Self {
        let win_percentage = state.win_percentage();
        Self {
            games_played: state.games_played(),
            wins: state.wins(),
            win_percentage,
            medal: Medal::for_percentage(win_percentage),
        }
    }

    /// Results table row: games played, wins, percentage to two decimals.
    #[must_use]
    pub fn results_row(&self) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td><td>{:.2}%</td></tr>",
            self.games_played, self.wins, self.win_percentage
        )
    }
}

/// Record a player name if needed, then activate `game`.
pub fn start_session(state: &mut ArcadeState, port: &mut dyn Port, game: GameId) -> Result<()> {
    let mut error: Option<InputError> = None;
    while !state.has_player_name() {
        let text = match error {
            Some(err) => err.annotate(ENTER_NAME),
            None => ENTER_NAME.to_string(),
        };
        let input = port.ask(&text)?;
        if !input.is_some_and(|name| state.set_player_name(&name)) {
            error = Some(InputError::InvalidName);
        }
    }

    state.activate(game);
    info!(player = state.display_name(), %game, "game started");
    Ok(())
}

/// Ask whether to keep playing the current game.
pub fn keep_playing(state: &ArcadeState, port: &mut dyn Port) -> Result<Answer> {
    confirm(port, &format!("{}, {}", state.display_name(), KEEP_PLAYING))
}

/// Deactivate `game` and ask whether to pick another.
///
/// Returns the session summary if the player left the arcade.
pub fn end_session(
    state: &mut ArcadeState,
    host: &mut Host<'_>,
    game: GameId,
) -> Result<Option<SessionSummary>> {
    state.deactivate(game);
    info!(%game, "game ended");

    let answer = confirm(host.port, &format!("{}, {}", state.display_name(), PICK_ANOTHER))?;
    state.set_session_ended(answer == Answer::No);
    if !state.session_ended() {
        return Ok(None);
    }

    let summary = SessionSummary::from_state(state);
    info!(
        games_played = summary.games_played,
        wins = summary.wins,
        win_percentage = summary.win_percentage,
        medal = %summary.medal,
        "session ended"
    );

    host.sink.render_results(&summary.results_row())?;
    host.sink.render_medal(summary.medal)?;
    host.sink.set_region_visible(Region::GameSelection, false)?;
    host.sink.set_region_visible(Region::GameReload, true)?;

    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{RecordingSink, ScriptedPort};

    #[test]
    fn test_start_session_asks_until_valid_name() {
        let mut state = ArcadeState::new();
        let mut port = ScriptedPort::new().answer("").cancel().answer("   ").answer("Ada");

        start_session(&mut state, &mut port, GameId::Oracle).unwrap();

        assert_eq!(state.player_name(), Some("Ada"));
        assert!(state.is_active(GameId::Oracle));

        let prompts = port.prompts();
        assert_eq!(prompts.len(), 4);
        assert_eq!(prompts[0], ENTER_NAME);
        for prompt in &prompts[1..] {
            assert_eq!(*prompt, "Welcome! What's your name?\nError: Name is invalid.");
        }
    }

    #[test]
    fn test_start_session_stores_trimmed_name() {
        let mut state = ArcadeState::new();
        let mut port = ScriptedPort::new().answer("  Ada ").answer("no");

        start_session(&mut state, &mut port, GameId::Guessing).unwrap();
        keep_playing(&state, &mut port).unwrap();

        assert_eq!(state.player_name(), Some("Ada"));
        assert_eq!(port.prompts()[1], format!("Ada, {KEEP_PLAYING}"));
    }

    #[test]
    fn test_start_session_skips_known_name() {
        let mut state = ArcadeState::new();
        state.set_player_name("Ada");
        let mut port = ScriptedPort::new();

        start_session(&mut state, &mut port, GameId::Duel).unwrap();

        assert!(port.transcript().is_empty());
        assert!(state.is_active(GameId::Duel));
    }

    #[test]
    fn test_end_session_continue() {
        let mut state = ArcadeState::new();
        state.set_player_name("Ada");
        state.activate(GameId::Guessing);
        let mut port = ScriptedPort::new().answer("Yes");
        let mut sink = RecordingSink::new();

        let summary = end_session(&mut state, &mut Host::new(&mut port, &mut sink), GameId::Guessing)
            .unwrap();

        assert_eq!(summary, None);
        assert_eq!(state.active_game(), None);
        assert!(!state.session_ended());
        assert_eq!(sink, RecordingSink::new());
        assert_eq!(port.prompts(), vec![format!("Ada, {PICK_ANOTHER}")]);
    }

    #[test]
    fn test_end_session_renders_results() {
        let mut state = ArcadeState::new();
        state.set_player_name("Ada");
        state.activate(GameId::Duel);
        state.record_round(true);
        state.record_round(true);
        state.record_round(false);
        let mut port = ScriptedPort::new().answer("no");
        let mut sink = RecordingSink::new();

        let summary = end_session(&mut state, &mut Host::new(&mut port, &mut sink), GameId::Duel)
            .unwrap()
            .unwrap();

        assert!(state.session_ended());
        assert_eq!(summary.medal, Medal::Iron);
        assert_eq!(
            sink.results.as_deref(),
            Some("<tr><td>3</td><td>2</td><td>66.67%</td></tr>")
        );
        assert_eq!(sink.medal, Some(Medal::Iron));
        assert!(!sink.selection_visible);
        assert!(sink.reload_visible);
    }

    #[test]
    fn test_end_session_without_games_is_stone() {
        let mut state = ArcadeState::new();
        state.set_player_name("Ada");
        let mut port = ScriptedPort::new().answer("no");
        let mut sink = RecordingSink::new();

        let summary = end_session(&mut state, &mut Host::new(&mut port, &mut sink), GameId::Oracle)
            .unwrap()
            .unwrap();

        assert_eq!(summary.win_percentage, 0.0);
        assert_eq!(summary.medal, Medal::Stone);
        assert_eq!(
            sink.results.as_deref(),
            Some("<tr><td>0</td><td>0</td><td>0.00%</td></tr>")
        );
    }
}
