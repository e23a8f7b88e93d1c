//! Instrument (contract metadata) models.

use serde::Deserialize;

/// Response body of `/fapi/v1/exchangeInfo`, reduced to the fields the
/// ranking needs.
#[derive(Debug, Deserialize)]
pub struct ExchangeInfo {
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}

/// Metadata for a single listed contract.
///
/// Binance omits `contractType` for some delisted entries; missing fields
/// default to empty strings and simply fail the filter.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub contract_type: String,
}

impl SymbolInfo {
    /// True for instruments the ranking considers: actively trading
    /// perpetuals settled in the given quote asset.
    pub fn is_valid_perpetual(&self, quote_suffix: &str) -> bool {
        self.status == "TRADING"
            && self.symbol.ends_with(quote_suffix)
            && self.contract_type == "PERPETUAL"
    }
}
