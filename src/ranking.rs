//! Filter and ranking pipeline turning raw API snapshots into the
//! gainers/losers dataset.
//!
//! Everything here is pure; the poller owns the I/O and calls these
//! functions once per cycle with that cycle's snapshots.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::instrument::ExchangeInfo;
use crate::models::ticker::Ticker24h;
use crate::{MoversError, Result};

/// Number of entries kept on each side of the ranking.
pub const TOP_N: usize = 10;

/// One poll cycle's ranked output.
///
/// Both lists derive from the same ticker snapshot. With [`TOP_N`] or
/// fewer valid instruments they deliberately overlap (show what exists);
/// no deduplication is applied.
#[derive(Debug, Clone)]
pub struct RankedDataset {
    /// Top movers, percent change descending.
    pub gainers: Vec<Ticker24h>,
    /// Bottom movers, percent change ascending.
    pub losers: Vec<Ticker24h>,
    /// Instruments that survived filtering, before truncation.
    pub valid_count: usize,
}

/// Selects the symbols eligible for ranking from exchange metadata:
/// status `TRADING`, contract type `PERPETUAL`, symbol ending in
/// `quote_suffix`.
///
/// # Errors
///
/// Returns [`MoversError::NoValidInstruments`] if nothing passes.
pub fn valid_symbols(info: &ExchangeInfo, quote_suffix: &str) -> Result<HashSet<String>> {
    let symbols: HashSet<String> = info
        .symbols
        .iter()
        .filter(|s| s.is_valid_perpetual(quote_suffix))
        .map(|s| s.symbol.clone())
        .collect();
    if symbols.is_empty() {
        return Err(MoversError::NoValidInstruments);
    }
    Ok(symbols)
}

/// Ranks a ticker snapshot against the valid-instrument set.
///
/// Tickers outside the set and tickers with non-positive volume are
/// dropped before sorting. Losers are the tail of the descending sort
/// re-sorted ascending, so on tiny datasets the two lists overlap.
///
/// # Errors
///
/// Returns [`MoversError::NoValidTickers`] if the intersection is empty or
/// the volume filter removes everything.
pub fn rank(tickers: Vec<Ticker24h>, valid: &HashSet<String>) -> Result<RankedDataset> {
    let mut eligible: Vec<Ticker24h> = tickers
        .into_iter()
        .filter(|t| valid.contains(&t.symbol))
        .collect();
    if eligible.is_empty() {
        return Err(MoversError::NoValidTickers);
    }

    eligible.retain(|t| t.volume > Decimal::ZERO);
    if eligible.is_empty() {
        return Err(MoversError::NoValidTickers);
    }

    eligible.sort_by(|a, b| b.price_change_percent.cmp(&a.price_change_percent));
    let valid_count = eligible.len();

    let gainers: Vec<Ticker24h> = eligible.iter().take(TOP_N).cloned().collect();
    // Walking the descending sort backwards yields the tail already in
    // ascending order.
    let losers: Vec<Ticker24h> = eligible.iter().rev().take(TOP_N).cloned().collect();

    Ok(RankedDataset {
        gainers,
        losers,
        valid_count,
    })
}
