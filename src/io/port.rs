//! Text dialog port.
//!
//! Games talk to the player only through `Port`:
//! - `ask`: show a message, block for a line of text. `Ok(None)` means the
//!   player dismissed the dialog.
//! - `notify`: show a message, no answer.
//!
//! `ScriptedPort` replays canned answers and records everything shown, for
//! tests. `TerminalPort` reads lines from any `BufRead` and writes to any
//! `Write`.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::core::PortError;

/// Synchronous request/response dialog with the player.
pub trait Port {
    /// Show `message` and wait for an answer. `None` if cancelled.
    fn ask(&mut self, message: &str) -> Result<Option<String>, PortError>;

    /// Show `message` without waiting for an answer.
    fn notify(&mut self, message: &str) -> Result<(), PortError>;
}

/// One entry of a `ScriptedPort` transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Exchange {
    /// A prompt shown through `ask`, with the answer given.
    Asked {
        message: String,
        answer: Option<String>,
    },
    /// A message shown through `notify`.
    Notified(String),
}

/// Port that answers from a fixed script.
///
/// Once the script runs out, `ask` fails with `PortError::Exhausted` so a
/// game waiting for input terminates instead of looping forever.
///
/// ```
/// use rust_arcade::io::{Port, ScriptedPort};
///
/// let mut port = ScriptedPort::new().answer("Ada").cancel();
///
/// assert_eq!(port.ask("Name?").unwrap(), Some("Ada".to_string()));
/// assert_eq!(port.ask("Again?").unwrap(), None);
/// assert!(port.ask("Still there?").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedPort {
    answers: VecDeque<Option<String>>,
    answered: usize,
    transcript: Vec<Exchange>,
}

impl ScriptedPort {
    /// Create a port with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a port that answers with each string in turn.
    pub fn from_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        answers.into_iter().fold(Self::new(), |port, a| port.answer(a))
    }

    /// Append a typed answer to the script.
    #[must_use]
    pub fn answer(mut self, text: impl Into<String>) -> Self {
        self.answers.push_back(Some(text.into()));
        self
    }

    /// Append a cancelled dialog to the script.
    #[must_use]
    pub fn cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Number of scripted answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Everything shown so far, in order.
    #[must_use]
    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    /// Messages shown through `notify`, in order.
    #[must_use]
    pub fn notices(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|e| match e {
                Exchange::Notified(msg) => Some(msg.as_str()),
                Exchange::Asked { .. } => None,
            })
            .collect()
    }

    /// Messages shown through `ask`, in order.
    #[must_use]
    pub fn prompts(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|e| match e {
                Exchange::Asked { message, .. } => Some(message.as_str()),
                Exchange::Notified(_) => None,
            })
            .collect()
    }
}

impl Port for ScriptedPort {
    fn ask(&mut self, message: &str) -> Result<Option<String>, PortError> {
        let answer = self
            .answers
            .pop_front()
            .ok_or(PortError::Exhausted(self.answered))?;
        self.answered += 1;
        self.transcript.push(Exchange::Asked {
            message: message.to_string(),
            answer: answer.clone(),
        });
        Ok(answer)
    }

    fn notify(&mut self, message: &str) -> Result<(), PortError> {
        self.transcript.push(Exchange::Notified(message.to_string()));
        Ok(())
    }
}

/// Port over a line-oriented text stream.
///
/// End of input is reported as `PortError::Closed`: a closed stream can
/// never answer, so it cannot be treated as a cancelled dialog.
pub struct TerminalPort<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPort<R, W> {
    /// Create a port reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Port for TerminalPort<R, W> {
    fn ask(&mut self, message: &str) -> Result<Option<String>, PortError> {
        writeln!(self.output, "{}", message.trim_end())?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PortError::Closed);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn notify(&mut self, message: &str) -> Result<(), PortError> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_port_records_transcript() {
        let mut port = ScriptedPort::from_answers(["one", "two"]);

        port.notify("hello").unwrap();
        assert_eq!(port.ask("first?").unwrap().as_deref(), Some("one"));
        assert_eq!(port.ask("second?").unwrap().as_deref(), Some("two"));

        assert_eq!(port.remaining(), 0);
        assert_eq!(port.notices(), vec!["hello"]);
        assert_eq!(port.prompts(), vec!["first?", "second?"]);
        assert_eq!(port.transcript().len(), 3);
    }

    #[test]
    fn test_scripted_port_exhausted() {
        let mut port = ScriptedPort::new().answer("only");
        port.ask("a").unwrap();

        let err = port.ask("b").unwrap_err();
        assert!(matches!(err, PortError::Exhausted(1)));
    }

    #[test]
    fn test_terminal_port_reads_lines() {
        let input: &[u8] = b"Ada\r\n  yes \n";
        let mut output = Vec::new();
        {
            let mut port = TerminalPort::new(input, &mut output);
            assert_eq!(port.ask("Name?").unwrap().as_deref(), Some("Ada"));
            assert_eq!(port.ask("Continue?\n").unwrap().as_deref(), Some("  yes "));
            port.notify("bye").unwrap();
        }

        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown, "Name?\n> Continue?\n> bye\n");
    }

    #[test]
    fn test_terminal_port_closed() {
        let input: &[u8] = b"";
        let mut port = TerminalPort::new(input, Vec::new());
        assert!(matches!(port.ask("anyone?"), Err(PortError::Closed)));
    }
}
