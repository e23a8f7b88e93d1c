use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use movers::config::fetch_config;
use movers::poller::{PollMode, Poller, PollerEvent, PollerHandle};
use movers::rest::FuturesClient;
use movers::tui::{self, Action, App, Message};
use movers::{MoversError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = fetch_config()?;
    init_tracing(app_config.log_path.as_deref())?;

    let client = FuturesClient::new(&app_config.binance.base_url)?;
    let quote_suffix = app_config.binance.quote_suffix;

    // Single message stream for the event loop: terminal input, ticks,
    // and poll outcomes all arrive here.
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    tui::event::spawn_event_reader(tx.clone());
    tui::event::spawn_tick_timer(tx.clone(), 1000);

    let continuous = spawn_continuous_poller(client.clone(), quote_suffix.clone(), tx.clone());
    info!(base_url = %app_config.binance.base_url, "continuous poller started");

    let mut terminal = tui::setup_terminal()?;
    let mut app = App::new();
    // Transient single-shot worker for manual refresh; owned here, not by
    // the render layer.
    let mut manual: Option<PollerHandle> = None;

    let run_result = run_event_loop(
        &mut terminal,
        &mut app,
        &mut rx,
        &mut manual,
        &client,
        &quote_suffix,
        &tx,
    )
    .await;

    // Restore the terminal before waiting on workers so an in-flight HTTP
    // call cannot leave the screen in raw mode.
    tui::restore_terminal(&mut terminal)?;

    if let Some(handle) = manual.take() {
        handle.cancel().await;
    }
    continuous.cancel().await;
    info!("shutdown complete");

    run_result
}

/// Draw-then-wait event loop; exits when the user quits or the message
/// stream ends.
async fn run_event_loop(
    terminal: &mut tui::Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Message>,
    manual: &mut Option<PollerHandle>,
    client: &FuturesClient,
    quote_suffix: &str,
    tx: &mpsc::UnboundedSender<Message>,
) -> Result<()> {
    while !app.should_quit {
        terminal
            .draw(|frame| tui::render(frame, app))
            .map_err(|e| MoversError::Io(format!("draw failed: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        if let Some(action) = tui::event::update(app, message) {
            match action {
                Action::Refresh => {
                    // At most one transient worker: cancel and await any
                    // prior one before starting the next.
                    if let Some(prior) = manual.take() {
                        prior.cancel().await;
                    }
                    *manual = Some(spawn_manual_refresh(
                        client.clone(),
                        quote_suffix.to_string(),
                        tx.clone(),
                    ));
                    info!("manual refresh requested");
                }
                Action::Quit => {}
            }
        }
    }
    Ok(())
}

/// Spawns the continuous poller and a forwarder that wraps its events
/// into TUI messages.
fn spawn_continuous_poller(
    client: FuturesClient,
    quote_suffix: String,
    tx: mpsc::UnboundedSender<Message>,
) -> PollerHandle {
    let (poll_tx, mut poll_rx) = mpsc::unbounded_channel::<PollerEvent>();
    let handle = Poller::spawn(client, quote_suffix, PollMode::Continuous, poll_tx);
    tokio::spawn(async move {
        while let Some(event) = poll_rx.recv().await {
            if tx.send(Message::Poll(event)).is_err() {
                break;
            }
        }
    });
    handle
}

/// Spawns a single-shot poller for manual refresh. Its forwarder signals
/// `RefreshFinished` once the worker exits and its channel closes.
fn spawn_manual_refresh(
    client: FuturesClient,
    quote_suffix: String,
    tx: mpsc::UnboundedSender<Message>,
) -> PollerHandle {
    let (poll_tx, mut poll_rx) = mpsc::unbounded_channel::<PollerEvent>();
    let handle = Poller::spawn(client, quote_suffix, PollMode::SingleShot, poll_tx);
    tokio::spawn(async move {
        while let Some(event) = poll_rx.recv().await {
            if tx.send(Message::Poll(event)).is_err() {
                return;
            }
        }
        let _ = tx.send(Message::RefreshFinished);
    });
    handle
}

/// Initializes tracing output. The TUI owns stdout, so logs go to the
/// configured file or nowhere at all.
fn init_tracing(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };
    let file = std::fs::File::create(path)
        .map_err(|e| MoversError::Io(format!("failed to open log file: {e}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
