//! Console seam for the installer.
//!
//! The wizard talks to the operator through this trait so it can run
//! against a real terminal in the CLI and against a scripted double in
//! tests.

use std::collections::VecDeque;

use thiserror::Error;

/// Errors that can occur while talking to the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the terminal failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a value was supplied.
    #[error("console input closed")]
    Closed,
}

/// Operator-facing console operations used by the installer.
pub trait Console {
    /// Prompt for a line of input, echoed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConsoleError`] if input cannot be read.
    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Prompt for a line of input with echo suppressed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConsoleError`] if input cannot be read or echo cannot
    /// be suppressed; there is no visible fallback.
    fn ask_hidden(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Write one line of output.
    fn writeln(&mut self, line: &str);
}

/// Scripted console double for tests.
///
/// Answers are consumed front-to-back by both [`Console::ask`] and
/// [`Console::ask_hidden`]; everything written is recorded.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that will answer the given prompts in order.
    #[must_use]
    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything the wizard wrote, one entry per line.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Number of output lines equal to `line`.
    #[must_use]
    pub fn count_line(&self, line: &str) -> usize {
        self.output.iter().filter(|out| *out == line).count()
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.output.push(prompt.to_owned());
        self.answers.pop_front().ok_or(ConsoleError::Closed)
    }

    fn ask_hidden(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.ask(prompt)
    }

    fn writeln(&mut self, line: &str) {
        self.output.push(line.to_owned());
    }
}
