//! Top-movers dashboard for Binance USDT-M perpetual futures.
//!
//! Polls the public futures REST API on a fixed interval, ranks
//! instruments by 24-hour percent price change, and publishes the top
//! gainers and losers to a terminal table view. The poller and the view
//! are decoupled by a message channel; the render loop never touches the
//! network.

pub mod config;
pub mod error;
pub mod models;
pub mod poller;
pub mod ranking;
pub mod rest;
pub mod tui;

pub use error::{MoversError, Result};
