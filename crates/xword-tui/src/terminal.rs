//! Raw-mode terminal ownership

use ratatui::DefaultTerminal;
use xword_core::prelude::*;

/// Alternate-screen terminal that is restored when dropped, including on
/// early returns through `?`. Panics are covered by the hook `try_init`
/// installs.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        let terminal = ratatui::try_init()
            .map_err(|e| Error::terminal(format!("cannot enter raw mode: {}", e)))?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
        debug!("Terminal restored");
    }
}
