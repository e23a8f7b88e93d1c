//! Application state for the TUI.

use chrono::{DateTime, Local};

use crate::ranking::RankedDataset;

/// Central application state container.
pub struct App {
    /// Most recent successful ranking; retained across fetch failures.
    pub dataset: Option<RankedDataset>,
    /// Wall-clock time of the last successful update.
    pub last_update: Option<DateTime<Local>>,
    /// Most recent error message, cleared by the next successful update.
    pub error: Option<String>,
    /// True while a manual refresh worker is running.
    pub refreshing: bool,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with default state.
    pub fn new() -> Self {
        Self {
            dataset: None,
            last_update: None,
            error: None,
            refreshing: false,
            should_quit: false,
        }
    }

    /// Installs a fresh dataset. Whole-snapshot replacement: the previous
    /// dataset is discarded, never merged.
    pub fn apply_dataset(&mut self, dataset: RankedDataset) {
        self.dataset = Some(dataset);
        self.last_update = Some(Local::now());
        self.error = None;
    }

    /// Records a poll failure. The last good dataset stays on screen.
    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
