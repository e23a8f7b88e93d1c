//! Wire models for the Binance USDT-M futures REST API.
//!
//! One file per endpoint surface: instrument metadata from
//! `/fapi/v1/exchangeInfo` and rolling 24h statistics from
//! `/fapi/v1/ticker/24hr`.

pub mod instrument;
pub mod ticker;
