//! Number guessing game.
//!
//! A secret is drawn uniformly from 1 to 10. The player guesses until
//! correct, with too low/too high hints. Every finished round counts as a
//! win; there is no way to lose.

use std::ops::RangeInclusive;

use tracing::{debug, trace};

use super::Game;
use crate::core::{ArcadeRng, ArcadeState, GameId, InputError, Result};
use crate::io::{Host, Port};
use crate::session::{end_session, keep_playing, start_session, Answer, SessionSummary};

/// Range the secret is drawn from.
pub const SECRET_RANGE: RangeInclusive<i64> = 1..=10;

/// Guess prompt, repeated after every hint.
pub const GUESS_PROMPT: &str = "Guess a number between 1 and 10.";
/// Hints for a wrong guess.
pub const TOO_LOW: &str = "Guess was too low, guess again.";
pub const TOO_HIGH: &str = "Guess was too high, guess again.";

/// Feedback for one guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
    Correct,
}

impl Hint {
    /// Compare a guess with the secret.
    #[must_use]
    pub fn compare(guess: i64, secret: i64) -> Hint {
        match guess.cmp(&secret) {
            std::cmp::Ordering::Less => Hint::TooLow,
            std::cmp::Ordering::Greater => Hint::TooHigh,
            std::cmp::Ordering::Equal => Hint::Correct,
        }
    }
}

/// Run one round against `secret`. Returns the number of guesses taken.
///
/// Input that does not parse as an integer (or a cancelled dialog) is
/// re-asked with the invalid number notice and does not count as a guess.
pub fn guess_round(port: &mut dyn Port, secret: i64) -> Result<u32> {
    let mut attempts = 0;
    let mut error: Option<InputError> = None;
    loop {
        let text = match error {
            Some(err) => err.annotate(GUESS_PROMPT),
            None => GUESS_PROMPT.to_string(),
        };
        let guess = port.ask(&text)?.and_then(|input| input.trim().parse::<i64>().ok());
        let Some(guess) = guess else {
            error = Some(InputError::InvalidNumber);
            continue;
        };

        error = None;
        attempts += 1;
        match Hint::compare(guess, secret) {
            Hint::TooLow => port.notify(TOO_LOW)?,
            Hint::TooHigh => port.notify(TOO_HIGH)?,
            Hint::Correct => return Ok(attempts),
        }
    }
}

/// The guessing game.
#[derive(Clone, Debug)]
pub struct GuessingGame {
    rng: ArcadeRng,
}

impl GuessingGame {
    /// Create the game drawing secrets from `rng`.
    #[must_use]
    pub fn new(rng: ArcadeRng) -> Self {
        Self { rng }
    }

    fn draw_secret(&mut self) -> i64 {
        let secret = self.rng.gen_range_inclusive(SECRET_RANGE);
        trace!(secret, "secret drawn");
        secret
    }
}

impl Game for GuessingGame {
    fn id(&self) -> GameId {
        GameId::Guessing
    }

    fn play(
        &mut self,
        state: &mut ArcadeState,
        host: &mut Host<'_>,
    ) -> Result<Option<SessionSummary>> {
        start_session(state, host.port, GameId::Guessing)?;

        let mut summary = None;
        while state.is_active(GameId::Guessing) {
            let secret = self.draw_secret();
            let attempts = guess_round(host.port, secret)?;

            state.record_round(true);
            debug!(attempts, "number guessed");
            host.port.notify(&format!("You guessed it in {attempts} guesses!"))?;

            if keep_playing(state, host.port)? == Answer::No {
                summary = end_session(state, host, GameId::Guessing)?;
            }
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ScriptedPort;
    use proptest::prelude::*;

    #[test]
    fn test_compare() {
        assert_eq!(Hint::compare(3, 7), Hint::TooLow);
        assert_eq!(Hint::compare(9, 7), Hint::TooHigh);
        assert_eq!(Hint::compare(7, 7), Hint::Correct);
    }

    #[test]
    fn test_round_hints_and_attempts() {
        let mut port = ScriptedPort::from_answers(["3", "9", "7"]);

        let attempts = guess_round(&mut port, 7).unwrap();

        assert_eq!(attempts, 3);
        assert_eq!(port.notices(), vec![TOO_LOW, TOO_HIGH]);
    }

    #[test]
    fn test_round_invalid_input_not_counted() {
        let mut port = ScriptedPort::new().answer("seven").cancel().answer(" 4 ");

        let attempts = guess_round(&mut port, 4).unwrap();

        assert_eq!(attempts, 1);
        assert!(port.notices().is_empty());
        let prompts = port.prompts();
        assert_eq!(prompts[0], GUESS_PROMPT);
        assert_eq!(prompts[1], "Guess a number between 1 and 10.\nError: Invalid number.");
        assert_eq!(prompts[2], "Guess a number between 1 and 10.\nError: Invalid number.");
    }

    #[test]
    fn test_secret_in_range() {
        let mut game = GuessingGame::new(ArcadeRng::new(3));
        for _ in 0..100 {
            assert!(SECRET_RANGE.contains(&game.draw_secret()));
        }
    }

    proptest! {
        #[test]
        fn prop_hints_follow_ordering(
            secret in SECRET_RANGE,
            guesses in prop::collection::vec(-5i64..=15, 0..12),
        ) {
            let wrong: Vec<i64> = guesses.into_iter().filter(|g| *g != secret).collect();
            let mut port = wrong
                .iter()
                .fold(ScriptedPort::new(), |port, g| port.answer(g.to_string()))
                .answer(secret.to_string());

            let attempts = guess_round(&mut port, secret).unwrap();

            prop_assert_eq!(attempts as usize, wrong.len() + 1);
            prop_assert_eq!(port.remaining(), 0);

            let expected: Vec<&str> = wrong
                .iter()
                .map(|g| if *g < secret { TOO_LOW } else { TOO_HIGH })
                .collect();
            prop_assert_eq!(port.notices(), expected);
        }
    }
}
