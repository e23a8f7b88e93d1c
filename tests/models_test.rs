//! Deserialization tests for the Binance futures REST wire models.

use rust_decimal_macros::dec;

use movers::models::instrument::ExchangeInfo;
use movers::models::ticker::Ticker24h;

const EXCHANGE_INFO_JSON: &str = include_str!("fixtures/exchange_info.json");
const TICKER_24HR_JSON: &str = include_str!("fixtures/ticker_24hr.json");

#[test]
fn exchange_info_deserializes() {
    let info: ExchangeInfo =
        serde_json::from_str(EXCHANGE_INFO_JSON).expect("failed to deserialize exchangeInfo");

    assert_eq!(info.symbols.len(), 6);

    let btc = &info.symbols[0];
    assert_eq!(btc.symbol, "BTCUSDT");
    assert_eq!(btc.status, "TRADING");
    assert_eq!(btc.contract_type, "PERPETUAL");

    let quarterly = &info.symbols[4];
    assert_eq!(quarterly.symbol, "BTCUSDT_250926");
    assert_eq!(quarterly.contract_type, "CURRENT_QUARTER");
}

#[test]
fn exchange_info_filter_matches_fixture() {
    let info: ExchangeInfo =
        serde_json::from_str(EXCHANGE_INFO_JSON).expect("failed to deserialize exchangeInfo");

    let valid: Vec<&str> = info
        .symbols
        .iter()
        .filter(|s| s.is_valid_perpetual("USDT"))
        .map(|s| s.symbol.as_str())
        .collect();

    // ETHBUSD (suffix), BTCUSDT_250926 (contract type), XRPUSDT (status)
    // are all excluded.
    assert_eq!(valid, vec!["BTCUSDT", "ETHUSDT", "SOLUSDT"]);
}

#[test]
fn exchange_info_without_symbols_field_is_empty() {
    let info: ExchangeInfo =
        serde_json::from_str(r#"{"timezone": "UTC"}"#).expect("missing symbols should default");
    assert!(info.symbols.is_empty());
}

#[test]
fn ticker_24hr_deserializes_string_numerics() {
    let tickers: Vec<Ticker24h> =
        serde_json::from_str(TICKER_24HR_JSON).expect("failed to deserialize ticker list");

    assert_eq!(tickers.len(), 4);

    let btc = &tickers[0];
    assert_eq!(btc.symbol, "BTCUSDT");
    assert_eq!(btc.last_price, dec!(50720.40));
    assert_eq!(btc.price_change_percent, dec!(5.23));
    assert_eq!(btc.volume, dec!(1200.5));
    assert_eq!(btc.high_price, dec!(51000.00));
    assert_eq!(btc.low_price, dec!(47950.10));

    let eth = &tickers[1];
    assert_eq!(eth.price_change_percent, dec!(-2.75));
    assert_eq!(eth.volume, dec!(2500000));

    let sol = &tickers[2];
    assert_eq!(sol.volume, dec!(0));
}

#[test]
fn ticker_deserializes_directly() {
    let json = r#"{
        "symbol": "DOGEUSDT",
        "priceChangePercent": "-12.50",
        "lastPrice": "0.1234",
        "volume": "987654321.1",
        "highPrice": "0.1450",
        "lowPrice": "0.1200"
    }"#;

    let ticker: Ticker24h = serde_json::from_str(json).expect("failed to deserialize ticker");

    assert_eq!(ticker.symbol, "DOGEUSDT");
    assert_eq!(ticker.price_change_percent, dec!(-12.50));
    assert_eq!(ticker.last_price, dec!(0.1234));
    assert_eq!(ticker.volume_display(), "987.65M");
}

#[test]
fn ticker_with_non_numeric_field_is_rejected() {
    let json = r#"{
        "symbol": "BADUSDT",
        "priceChangePercent": "not-a-number",
        "lastPrice": "1.0",
        "volume": "1.0",
        "highPrice": "1.0",
        "lowPrice": "1.0"
    }"#;

    assert!(serde_json::from_str::<Ticker24h>(json).is_err());
}
