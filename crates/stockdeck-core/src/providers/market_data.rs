use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use crate::dates::DateWindow;
use crate::domain::{IntradaySample, PriceChangeRecord, ProfileRecord, Symbol};
use crate::http_client::{HttpClient, HttpRequest};

use super::FetchError;

/// Production base URL for the market-data provider.
pub const DEFAULT_MARKET_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Resolution of the intraday chart series.
const CHART_INTERVAL: &str = "5min";

/// Client for the market-data provider: company profile, price change, and
/// the short-interval chart all share one base URL and one API key.
#[derive(Clone)]
pub struct MarketDataClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    api_key: String,
}

impl MarketDataClient {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: String::from(DEFAULT_MARKET_BASE_URL),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `GET {base}/profile/{symbol}`; payload passed through verbatim.
    pub async fn profile(&self, symbol: &Symbol) -> Result<ProfileRecord, FetchError> {
        let url = format!(
            "{}/profile/{}?apikey={}",
            self.base_url, symbol, self.api_key
        );
        self.get_json(&url).await
    }

    /// `GET {base}/stock-price-change/{symbol}`; payload passed through verbatim.
    pub async fn price_change(&self, symbol: &Symbol) -> Result<PriceChangeRecord, FetchError> {
        let url = format!(
            "{}/stock-price-change/{}?apikey={}",
            self.base_url, symbol, self.api_key
        );
        self.get_json(&url).await
    }

    /// `GET {base}/historical-chart/5min/{symbol}` bounded by `window`.
    ///
    /// Only `date` and `close` are consumed from each bar; provider order is
    /// kept untouched.
    pub async fn intraday_chart(
        &self,
        symbol: &Symbol,
        window: &DateWindow,
    ) -> Result<Vec<IntradaySample>, FetchError> {
        let url = format!(
            "{}/historical-chart/{}/{}?from={}&to={}&apikey={}",
            self.base_url, CHART_INTERVAL, symbol, window.from, window.to, self.api_key
        );
        let body = self.get_body(&url).await?;

        let bars: Vec<IntradayBar> = serde_json::from_str(&body)
            .map_err(|e| FetchError::decode(format!("malformed chart payload: {e}")))?;

        Ok(bars
            .into_iter()
            .map(|bar| IntradaySample {
                timestamp: bar.date,
                closing_price: bar.close,
            })
            .collect())
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let body = self.get_body(url).await?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::decode(format!("malformed provider payload: {e}")))
    }

    async fn get_body(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http_client
            .execute(HttpRequest::get(url))
            .await
            .map_err(|error| FetchError::transport(error.message()))?;

        if !response.is_success() {
            warn!(status = response.status, "market data request rejected");
            return Err(FetchError::status(response.status));
        }

        Ok(response.body)
    }
}

#[derive(Debug, Deserialize)]
struct IntradayBar {
    date: String,
    close: f64,
}
