//! Application configuration loaded from environment variables.
//!
//! There is no configuration file and no CLI surface; the few knobs that
//! exist are environment overrides:
//! - `BINANCE_FAPI_URL` — base REST URL (defaults to the public endpoint)
//! - `MOVERS_QUOTE_SUFFIX` — quote-asset suffix filter (defaults to `USDT`)
//! - `MOVERS_LOG` — when set, tracing output is written to this file
//!   (stdout belongs to the TUI)

use std::path::PathBuf;

/// Default public USDT-M futures REST endpoint.
const DEFAULT_BASE_URL: &str = "https://fapi.binance.com";

/// Default quote-asset suffix for the instrument filter.
const DEFAULT_QUOTE_SUFFIX: &str = "USDT";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub binance: BinanceConfig,
    /// Log file path; tracing output is discarded when unset.
    pub log_path: Option<PathBuf>,
}

/// Binance-specific configuration values.
#[derive(Debug)]
pub struct BinanceConfig {
    pub base_url: String,
    pub quote_suffix: String,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`MoversError::Config`](crate::MoversError::Config) if the base
/// URL override is not an `http`/`https` URL or the quote suffix contains
/// whitespace.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url =
        non_empty_var("BINANCE_FAPI_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(crate::MoversError::Config(format!(
            "BINANCE_FAPI_URL must start with http:// or https://, got {base_url:?}"
        )));
    }
    // Endpoint paths are appended with a leading slash.
    let base_url = base_url.trim_end_matches('/').to_string();

    let quote_suffix =
        non_empty_var("MOVERS_QUOTE_SUFFIX").unwrap_or_else(|| DEFAULT_QUOTE_SUFFIX.to_string());
    if quote_suffix.chars().any(char::is_whitespace) {
        return Err(crate::MoversError::Config(
            "MOVERS_QUOTE_SUFFIX must not contain whitespace".to_string(),
        ));
    }

    let log_path = non_empty_var("MOVERS_LOG").map(PathBuf::from);

    Ok(AppConfig {
        binance: BinanceConfig {
            base_url,
            quote_suffix,
        },
        log_path,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
