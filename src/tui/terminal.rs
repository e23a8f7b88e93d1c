//! Terminal setup and teardown utilities.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::Result;

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initializes the terminal for TUI rendering: raw mode plus the
/// alternate screen buffer.
///
/// # Errors
///
/// Returns an error if stdout is not a TTY or terminal setup fails; raw
/// mode is rolled back on partial failure.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(crate::MoversError::Io(
            "the dashboard requires an interactive terminal (TTY)".to_string(),
        ));
    }

    enable_raw_mode()
        .map_err(|e| crate::MoversError::Io(format!("failed to enable raw mode: {e}")))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        crate::MoversError::Io(format!("failed to enter alternate screen: {e}"))
    })?;

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        let _ = disable_raw_mode();
        crate::MoversError::Io(format!("failed to create terminal: {e}"))
    })
}

/// Restores the terminal to its original state.
///
/// # Errors
///
/// Returns an error if raw mode or the main screen buffer cannot be
/// restored.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(|e| crate::MoversError::Io(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| crate::MoversError::Io(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| crate::MoversError::Io(e.to_string()))?;
    Ok(())
}
