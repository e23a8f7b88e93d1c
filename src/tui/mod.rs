//! Terminal user interface for the top-movers dashboard.
//!
//! A single full-screen view: header with clock, instrument count,
//! gainers table, losers table, and a status bar. State updates arrive as
//! [`Message`] values; rendering is a pure function of [`App`].

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
