//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::poller::PollerEvent;

use super::app::App;

/// Events that can occur at the terminal.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for clock redraws.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from the terminal.
    Input(Event),
    /// Outcome of a poll cycle, continuous or manual.
    Poll(PollerEvent),
    /// The manual refresh worker exited.
    RefreshFinished,
}

/// Side effects the main loop must perform on behalf of the UI; the
/// render layer never owns worker handles itself.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Start a manual single-shot poll.
    Refresh,
    /// Shut down the application.
    Quit,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(Event::Key(key)) => handle_key(app, key),
        // Resize and Tick carry no state; the next frame redraws anyway.
        Message::Input(_) => None,
        Message::Poll(PollerEvent::Dataset(dataset)) => {
            app.apply_dataset(dataset);
            None
        }
        Message::Poll(PollerEvent::Failed(message)) => {
            app.apply_error(message);
            None
        }
        Message::RefreshFinished => {
            app.refreshing = false;
            None
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            Some(Action::Quit)
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            Some(Action::Quit)
        }
        // Re-pressing while a refresh is running restarts it; the main
        // loop cancels and awaits the prior worker first.
        KeyCode::Char('r') => {
            app.refreshing = true;
            Some(Action::Refresh)
        }
        _ => None,
    }
}
