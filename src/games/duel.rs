//! Bear, ninja, hunter.
//!
//! A three-way cyclic duel against a uniformly random computer pick:
//! bear beats ninja, ninja beats hunter, hunter beats bear.
//!
//! ## Match flow
//!
//! 1. Ask for a choice (case-insensitive)
//! 2. Count down 3..0, draw the computer's choice, resolve
//! 3. Record the round, update counters, announce the result
//! 4. Ask whether to keep playing
//!
//! Leaving the match announces a tie/win/lose summary over all rounds,
//! if any were played, then ends the session. Answering `no` at the
//! choice prompt also leaves the match; `yes` there simply asks again.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::Game;
use crate::core::{ArcadeRng, ArcadeState, GameId, InputError, Result};
use crate::io::{Host, Port};
use crate::session::{end_session, keep_playing, start_session, Answer, SessionSummary};

/// Choice prompt, asked before every throw.
pub const CHOOSE_PROMPT: &str = "Who are you: Bear, Ninja or Hunter?";

/// Countdown shown before each throw.
pub const COUNTDOWN: [u8; 4] = [3, 2, 1, 0];

/// A duel choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Bear,
    Ninja,
    Hunter,
}

impl Choice {
    /// All choices, in draw order.
    pub const ALL: [Choice; 3] = [Choice::Bear, Choice::Ninja, Choice::Hunter];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Bear => "bear",
            Choice::Ninja => "ninja",
            Choice::Hunter => "hunter",
        }
    }

    /// The choice this one defeats.
    #[must_use]
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Bear => Choice::Ninja,
            Choice::Ninja => Choice::Hunter,
            Choice::Hunter => Choice::Bear,
        }
    }

    /// Parse a choice, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(input: &str) -> Option<Choice> {
        let input = input.trim();
        Choice::ALL
            .into_iter()
            .find(|choice| input.eq_ignore_ascii_case(choice.name()))
    }

    /// Draw a choice uniformly.
    pub fn random(rng: &mut ArcadeRng) -> Choice {
        // ALL is non-empty, so the fallback is never taken
        rng.choose(&Choice::ALL).copied().unwrap_or(Choice::Bear)
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one round, from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    PlayerWin,
    ComputerWin,
    Tie,
}

impl RoundResult {
    /// Resolve a throw.
    ///
    /// ```
    /// use rust_arcade::games::{Choice, RoundResult};
    ///
    /// assert_eq!(RoundResult::resolve(Choice::Bear, Choice::Ninja), RoundResult::PlayerWin);
    /// assert_eq!(RoundResult::resolve(Choice::Bear, Choice::Hunter), RoundResult::ComputerWin);
    /// assert_eq!(RoundResult::resolve(Choice::Ninja, Choice::Ninja), RoundResult::Tie);
    /// ```
    #[must_use]
    pub fn resolve(player: Choice, computer: Choice) -> RoundResult {
        if player == computer {
            RoundResult::Tie
        } else if player.beats() == computer {
            RoundResult::PlayerWin
        } else {
            RoundResult::ComputerWin
        }
    }

    /// Text announcing this result.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            RoundResult::PlayerWin => "You win!!",
            RoundResult::ComputerWin => "You lose :(",
            RoundResult::Tie => "It's a tie!",
        }
    }
}

/// One recorded round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player: Choice,
    pub computer: Choice,
    pub result: RoundResult,
}

impl RoundOutcome {
    /// Resolve and record a throw.
    #[must_use]
    pub fn new(player: Choice, computer: Choice) -> Self {
        Self {
            player,
            computer,
            result: RoundResult::resolve(player, computer),
        }
    }
}

/// Rounds of the current match, in play order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistory {
    rounds: SmallVec<[RoundOutcome; 8]>,
}

impl MatchHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, round: RoundOutcome) {
        self.rounds.push(round);
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundOutcome] {
        &self.rounds
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Player wins and losses over the match. Ties count for neither.
    #[must_use]
    pub fn tally(&self) -> (usize, usize) {
        let count = |result: RoundResult| self.rounds.iter().filter(|r| r.result == result).count();
        (count(RoundResult::PlayerWin), count(RoundResult::ComputerWin))
    }

    /// Overall match result.
    #[must_use]
    pub fn overall(&self) -> RoundResult {
        let (wins, losses) = self.tally();
        match wins.cmp(&losses) {
            std::cmp::Ordering::Greater => RoundResult::PlayerWin,
            std::cmp::Ordering::Less => RoundResult::ComputerWin,
            std::cmp::Ordering::Equal => RoundResult::Tie,
        }
    }

    /// End-of-match announcement, or `None` if no round was played.
    #[must_use]
    pub fn summary_text(&self, player_name: &str) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let (wins, losses) = self.tally();
        Some(format!(
            "The game is over {player_name}.\nYou won {wins} times and lost {losses} times.\n{}",
            self.overall().text()
        ))
    }
}

/// What the player typed at the choice prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChoiceInput {
    Pick(Choice),
    Again,
    Leave,
    Rejected(InputError),
}

impl ChoiceInput {
    fn classify(input: Option<&str>) -> ChoiceInput {
        let Some(text) = input else {
            return ChoiceInput::Rejected(InputError::NullInput);
        };
        if let Some(choice) = Choice::parse(text) {
            return ChoiceInput::Pick(choice);
        }
        match Answer::parse(Some(text)) {
            Some(Answer::Yes) => ChoiceInput::Again,
            Some(Answer::No) => ChoiceInput::Leave,
            None => ChoiceInput::Rejected(InputError::InvalidEntry),
        }
    }
}

/// The bear/ninja/hunter game.
#[derive(Clone, Debug)]
pub struct DuelGame {
    rng: ArcadeRng,
}

impl DuelGame {
    /// Create the game drawing computer choices from `rng`.
    #[must_use]
    pub fn new(rng: ArcadeRng) -> Self {
        Self { rng }
    }

    /// Play one throw with the player's choice already known.
    ///
    /// Counts down, draws the computer's choice, records the round in
    /// `history`, updates the counters and announces the result.
    pub fn throw(
        &mut self,
        state: &mut ArcadeState,
        port: &mut dyn Port,
        history: &mut MatchHistory,
        player: Choice,
    ) -> Result<RoundOutcome> {
        for count in COUNTDOWN {
            port.notify(&count.to_string())?;
        }

        let round = RoundOutcome::new(player, Choice::random(&mut self.rng));
        history.push(round);
        state.record_round(round.result == RoundResult::PlayerWin);
        debug!(player = %round.player, computer = %round.computer, result = ?round.result, "round played");

        port.notify(&format!(
            "{}, you chose {}!\nThe computer chose {}!\n{}",
            state.display_name(),
            round.player,
            round.computer,
            round.result.text()
        ))?;
        Ok(round)
    }

    fn finish(
        &self,
        state: &mut ArcadeState,
        host: &mut Host<'_>,
        history: &MatchHistory,
    ) -> Result<Option<SessionSummary>> {
        if let Some(text) = history.summary_text(state.display_name()) {
            host.port.notify(&text)?;
        }
        end_session(state, host, GameId::Duel)
    }
}

impl Game for DuelGame {
    fn id(&self) -> GameId {
        GameId::Duel
    }

    fn play(
        &mut self,
        state: &mut ArcadeState,
        host: &mut Host<'_>,
    ) -> Result<Option<SessionSummary>> {
        start_session(state, host.port, GameId::Duel)?;
        host.port.notify(&format!("Hi {}, Let's play!!", state.display_name()))?;

        let mut history = MatchHistory::new();
        let mut summary = None;
        while state.is_active(GameId::Duel) {
            let input = host.port.ask(CHOOSE_PROMPT)?;
            match ChoiceInput::classify(input.as_deref()) {
                ChoiceInput::Pick(choice) => {
                    self.throw(state, host.port, &mut history, choice)?;
                    if keep_playing(state, host.port)? == Answer::No {
                        summary = self.finish(state, host, &history)?;
                    }
                }
                ChoiceInput::Again => {}
                ChoiceInput::Leave => summary = self.finish(state, host, &history)?,
                ChoiceInput::Rejected(err) => host.port.notify(&err.to_string())?,
            }
        }
        Ok(summary)
    }
}
