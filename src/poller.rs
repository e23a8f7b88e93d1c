//! Background market-data poller.
//!
//! [`Poller`] runs fetch→filter→rank cycles against the REST API and
//! publishes the outcome of every cycle over an unbounded channel. It
//! supports a continuous mode (fixed interval with a short error backoff)
//! and a single-shot mode used for manual refresh.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::ranking::{self, RankedDataset};
use crate::rest::FuturesClient;

/// Wait between successful cycles in continuous mode.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Wait after a failed cycle in continuous mode.
pub const ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// Whether the worker loops indefinitely or runs exactly one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollMode {
    Continuous,
    SingleShot,
}

/// Notification published after every poll cycle.
#[derive(Debug)]
pub enum PollerEvent {
    /// A cycle completed and produced a fresh ranking.
    Dataset(RankedDataset),
    /// A cycle failed; the message is display-ready.
    Failed(String),
}

/// Handle to a running poller worker.
///
/// Cancellation is cooperative: the worker finishes (or times out) any
/// in-flight HTTP call before it exits, it is never interrupted mid-call.
/// Dropping the handle stops the worker at its next cycle boundary.
pub struct PollerHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// True once the worker has exited. Single-shot workers exit on their
    /// own after one cycle.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signals cancellation and waits for the worker to exit.
    pub async fn cancel(self) {
        let _ = self.cancel.send(true);
        let _ = self.task.await;
    }

    /// Waits for the worker to exit without cancelling it.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

/// Market-data poll worker: fetch metadata, filter instruments, fetch
/// tickers, rank, emit.
pub struct Poller {
    client: FuturesClient,
    quote_suffix: String,
    mode: PollMode,
    tx: mpsc::UnboundedSender<PollerEvent>,
    cancel_rx: watch::Receiver<bool>,
}

impl Poller {
    /// Spawns a poller worker and returns its handle.
    ///
    /// Events flow into `tx` until the worker exits; the subscriber sees
    /// the channel close when it does.
    pub fn spawn(
        client: FuturesClient,
        quote_suffix: String,
        mode: PollMode,
        tx: mpsc::UnboundedSender<PollerEvent>,
    ) -> PollerHandle {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let poller = Poller {
            client,
            quote_suffix,
            mode,
            tx,
            cancel_rx,
        };
        let task = tokio::spawn(poller.run());
        PollerHandle {
            cancel: cancel_tx,
            task,
        }
    }

    fn cancelled(&self) -> bool {
        *self.cancel_rx.borrow()
    }

    /// Runs poll cycles until cancellation or, in single-shot mode, until
    /// the first cycle completes.
    async fn run(mut self) {
        loop {
            let outcome = self.cycle().await;

            // A cancel that arrived while a request was in flight takes
            // effect here, after the call completed or timed out.
            if self.cancelled() {
                info!("poller cancelled");
                return;
            }

            let wait = match outcome {
                Ok(dataset) => {
                    info!(
                        gainers = dataset.gainers.len(),
                        losers = dataset.losers.len(),
                        valid = dataset.valid_count,
                        "poll cycle complete"
                    );
                    if self.tx.send(PollerEvent::Dataset(dataset)).is_err() {
                        return; // subscriber gone
                    }
                    POLL_INTERVAL
                }
                Err(e) => {
                    warn!(error = %e, "poll cycle failed");
                    if self.tx.send(PollerEvent::Failed(e.to_string())).is_err() {
                        return;
                    }
                    ERROR_BACKOFF
                }
            };

            if self.mode == PollMode::SingleShot {
                return;
            }

            let mut handle_dropped = false;
            tokio::select! {
                () = tokio::time::sleep(wait) => {}
                changed = self.cancel_rx.changed() => {
                    // A closed cancel channel means the handle was dropped;
                    // treat it the same as an explicit cancel.
                    handle_dropped = changed.is_err();
                }
            }
            if handle_dropped || self.cancelled() {
                info!("poller cancelled");
                return;
            }
        }
    }

    /// One fetch→filter→rank cycle. The valid-instrument set is strictly
    /// local to the cycle; nothing carries over.
    async fn cycle(&self) -> crate::Result<RankedDataset> {
        let info = self.client.exchange_info().await?;
        let valid = ranking::valid_symbols(&info, &self.quote_suffix)?;
        let tickers = self.client.ticker_24h().await?;
        ranking::rank(tickers, &valid)
    }
}
