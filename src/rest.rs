//! Typed REST client for the public USDT-M futures market-data endpoints.

use std::time::Duration;

use tracing::debug;

use crate::models::instrument::ExchangeInfo;
use crate::models::ticker::Ticker24h;
use crate::{MoversError, Result};

/// Per-request timeout applied to both endpoints.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the two endpoints the ranking pipeline needs. Cloning is
/// cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct FuturesClient {
    http: reqwest::Client,
    base_url: String,
}

impl FuturesClient {
    /// Creates a client rooted at `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`MoversError::Unexpected`] if the HTTP client cannot be
    /// built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MoversError::Unexpected(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetches metadata for every listed contract.
    ///
    /// # Errors
    ///
    /// Returns [`MoversError::MetadataFetch`] on transport failure or a
    /// non-200 status, [`MoversError::Unexpected`] if the body does not
    /// parse.
    pub async fn exchange_info(&self) -> Result<ExchangeInfo> {
        let url = format!("{}/fapi/v1/exchangeInfo", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| MoversError::MetadataFetch(e.to_string()))?;
        if response.status() != reqwest::StatusCode::OK {
            return Err(MoversError::MetadataFetch(format!(
                "status code {}",
                response.status().as_u16()
            )));
        }

        let info: ExchangeInfo = response
            .json()
            .await
            .map_err(|e| MoversError::Unexpected(format!("malformed exchangeInfo body: {e}")))?;
        debug!(symbols = info.symbols.len(), "fetched exchange metadata");
        Ok(info)
    }

    /// Fetches 24h rolling statistics for every instrument in one bulk call.
    ///
    /// # Errors
    ///
    /// Returns [`MoversError::TickerFetch`] on transport failure or a
    /// non-200 status, [`MoversError::Unexpected`] if the body does not
    /// parse.
    pub async fn ticker_24h(&self) -> Result<Vec<Ticker24h>> {
        let url = format!("{}/fapi/v1/ticker/24hr", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| MoversError::TickerFetch(e.to_string()))?;
        if response.status() != reqwest::StatusCode::OK {
            return Err(MoversError::TickerFetch(format!(
                "status code {}",
                response.status().as_u16()
            )));
        }

        let tickers: Vec<Ticker24h> = response
            .json()
            .await
            .map_err(|e| MoversError::Unexpected(format!("malformed ticker body: {e}")))?;
        debug!(tickers = tickers.len(), "fetched 24h ticker statistics");
        Ok(tickers)
    }
}
