//! Yes/no confirmation loop.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{InputError, Result};
use crate::io::Port;

/// A valid answer to a yes/no prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Normalize raw input. Case and surrounding whitespace are ignored;
    /// a cancelled dialog is never an answer.
    #[must_use]
    pub fn parse(input: Option<&str>) -> Option<Answer> {
        let input = input?.trim();
        if input.eq_ignore_ascii_case("yes") {
            Some(Answer::Yes)
        } else if input.eq_ignore_ascii_case("no") {
            Some(Answer::No)
        } else {
            None
        }
    }
}

/// Ask `message` until the player answers yes or no.
///
/// Every rejected answer, cancelled dialogs included, re-asks with the
/// invalid yes/no notice appended.
pub fn confirm(port: &mut dyn Port, message: &str) -> Result<Answer> {
    let mut error: Option<InputError> = None;
    loop {
        let text = match error {
            Some(err) => err.annotate(message),
            None => message.to_string(),
        };
        let input = port.ask(&text)?;
        if let Some(answer) = Answer::parse(input.as_deref()) {
            return Ok(answer);
        }
        debug!(?input, "rejected yes/no answer");
        error = Some(InputError::InvalidYesNo);
    }
}
