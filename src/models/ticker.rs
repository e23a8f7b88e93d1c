//! Rolling 24-hour ticker statistics models.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One instrument's entry from the bulk `/fapi/v1/ticker/24hr` response.
///
/// Binance encodes every numeric field as a JSON string; they are parsed
/// into [`Decimal`] so the sort order is exact and display rounding never
/// feeds back into the ranking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24h {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub last_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_change_percent: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub high_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low_price: Decimal,
}

impl Ticker24h {
    /// Volume abbreviated for display: `12.34M` at or above one million,
    /// plain two-decimal rendering below.
    pub fn volume_display(&self) -> String {
        let million = Decimal::from(1_000_000);
        if self.volume >= million {
            format!("{:.2}M", self.volume / million)
        } else {
            format!("{:.2}", self.volume)
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn ticker_with_volume(volume: Decimal) -> Ticker24h {
        Ticker24h {
            symbol: "BTCUSDT".to_string(),
            last_price: dec!(50000),
            price_change_percent: dec!(1.5),
            volume,
            high_price: dec!(51000),
            low_price: dec!(49000),
        }
    }

    #[test]
    fn small_volume_renders_at_native_scale() {
        assert_eq!(ticker_with_volume(dec!(1200.5)).volume_display(), "1200.50");
    }

    #[test]
    fn large_volume_abbreviated_to_millions() {
        assert_eq!(ticker_with_volume(dec!(2500000)).volume_display(), "2.50M");
    }

    #[test]
    fn exactly_one_million_is_abbreviated() {
        assert_eq!(ticker_with_volume(dec!(1000000)).volume_display(), "1.00M");
    }
}
