//! Terminal-backed console for the installer.

use std::io::{BufRead, Write};

use meeple_market_storefront::services::installer::{Console, ConsoleError};

/// Console over the controlling terminal.
///
/// Password prompts go through `rpassword`, which suppresses echo with no
/// visible fallback.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    /// Create a terminal console.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_prompt(prompt: &str) -> Result<(), ConsoleError> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{prompt} ")?;
        stdout.flush()?;
        Ok(())
    }
}

impl Console for TerminalConsole {
    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        Self::write_prompt(prompt)?;

        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(ConsoleError::Closed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    fn ask_hidden(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let value = rpassword::prompt_password(format!("{prompt} "))?;
        Ok(value)
    }

    fn writeln(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        // Keep going even if stdout is gone; the wizard's state machine
        // shouldn't fail on a closed pipe mid-message.
        let _ = writeln!(stdout, "{line}");
    }
}
