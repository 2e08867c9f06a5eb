use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use crate::domain::{NewsArticle, Symbol};
use crate::http_client::{HttpClient, HttpRequest};

use super::FetchError;

/// Production base URL for the news provider.
pub const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org/v2";

/// Client for the news provider. Unlike the market-data lookups this is a
/// keyword search: the symbol rides in the `q` query parameter.
#[derive(Clone)]
pub struct NewsClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: String::from(DEFAULT_NEWS_BASE_URL),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `GET {news-base}/everything?q={symbol}`; articles pass through in
    /// provider order.
    pub async fn headlines(&self, symbol: &Symbol) -> Result<Vec<NewsArticle>, FetchError> {
        let url = format!(
            "{}/everything?q={}&apiKey={}",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            self.api_key
        );

        let response = self
            .http_client
            .execute(HttpRequest::get(&url))
            .await
            .map_err(|error| FetchError::transport(error.message()))?;

        if !response.is_success() {
            warn!(status = response.status, "news request rejected");
            return Err(FetchError::status(response.status));
        }

        let parsed: EverythingResponse = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::decode(format!("malformed news payload: {e}")))?;

        Ok(parsed.articles)
    }
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    articles: Vec<NewsArticle>,
}
