//! Magic eight ball.
//!
//! The game alternates between asking for a question and answering it
//! with one of twenty canned responses. A cancelled or blank question is
//! rejected and asked again. Every answer counts as a win.

use tracing::debug;

use super::Game;
use crate::core::{ArcadeRng, ArcadeState, GameId, InputError, Result};
use crate::io::Host;
use crate::session::{end_session, keep_playing, start_session, Answer, SessionSummary};

/// Question prompt.
pub const QUESTION_PROMPT: &str = "Ask a question to the Magic Eight Ball.";

/// Responses, drawn uniformly.
pub const ORACLE_ANSWERS: [&str; 20] = [
    // Affirmative
    "Absolutely!",
    "No doubt about it.",
    "It's a resounding yes.",
    "The stars say yes.",
    "All signs point to yes.",
    "You can bank on it.",
    "Definitely in your favor.",
    "The odds are excellent.",
    "It's looking bright.",
    "Count on it!",
    // Non-committal
    "Unclear, try again.",
    "Too soon to say.",
    "Ask later when the time feels right.",
    "The universe isn't sure yet.",
    "Wait and see.",
    // Negative
    "Not looking good.",
    "My instincts say no.",
    "Highly unlikely.",
    "Don't hold your breath.",
    "The answer is no.",
];

/// Validate a question. Cancelled dialogs and blank text are rejected.
pub fn accept_question(input: Option<String>) -> std::result::Result<String, InputError> {
    match input {
        None => Err(InputError::NullInput),
        Some(text) if text.trim().is_empty() => Err(InputError::EmptyInput),
        Some(text) => Ok(text),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    AwaitQuestion,
    AnswerReady,
}

/// The magic eight ball game.
#[derive(Clone, Debug)]
pub struct OracleGame {
    rng: ArcadeRng,
}

impl OracleGame {
    /// Create the game drawing answers from `rng`.
    #[must_use]
    pub fn new(rng: ArcadeRng) -> Self {
        Self { rng }
    }

    /// Draw one of the canned responses.
    pub fn draw_answer(&mut self) -> &'static str {
        self.rng
            .choose(&ORACLE_ANSWERS)
            .copied()
            .unwrap_or(ORACLE_ANSWERS[0])
    }
}

impl Game for OracleGame {
    fn id(&self) -> GameId {
        GameId::Oracle
    }

    fn play(
        &mut self,
        state: &mut ArcadeState,
        host: &mut Host<'_>,
    ) -> Result<Option<SessionSummary>> {
        start_session(state, host.port, GameId::Oracle)?;

        let mut phase = Phase::AwaitQuestion;
        let mut summary = None;
        while state.is_active(GameId::Oracle) {
            match phase {
                Phase::AwaitQuestion => match accept_question(host.port.ask(QUESTION_PROMPT)?) {
                    Ok(question) => {
                        debug!(%question, "question asked");
                        phase = Phase::AnswerReady;
                    }
                    Err(err) => host.port.notify(&err.to_string())?,
                },
                Phase::AnswerReady => {
                    let answer = self.draw_answer();
                    host.port.notify(answer)?;
                    state.record_round(true);
                    phase = Phase::AwaitQuestion;

                    if keep_playing(state, host.port)? == Answer::No {
                        summary = end_session(state, host, GameId::Oracle)?;
                    }
                }
            }
        }
        Ok(summary)
    }
}
