//! Provider credentials, read from the process environment at startup.
//!
//! Keys are never logged. A missing key is not an error here: the request is
//! sent anyway and fails at the provider.

/// API keys for the two upstream services. One key covers the three
/// market-data endpoints; the news provider has its own.
#[derive(Debug, Clone, Default)]
pub struct ProviderKeys {
    pub market_api_key: String,
    pub news_api_key: String,
}

impl ProviderKeys {
    pub const MARKET_KEY_VAR: &'static str = "STOCKDECK_MARKET_API_KEY";
    pub const NEWS_KEY_VAR: &'static str = "STOCKDECK_NEWS_API_KEY";

    pub fn new(market_api_key: impl Into<String>, news_api_key: impl Into<String>) -> Self {
        Self {
            market_api_key: market_api_key.into(),
            news_api_key: news_api_key.into(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            market_api_key: std::env::var(Self::MARKET_KEY_VAR).unwrap_or_default(),
            news_api_key: std::env::var(Self::NEWS_KEY_VAR).unwrap_or_default(),
        }
    }
}
