//! Fetch orchestration for one dashboard submission.
//!
//! A submit fans out to the four providers at once. Every provider owns one
//! [`FetchSlot`]: its fetch continuation is the only writer, and it settles
//! that slot without looking at any sibling. A generation counter stamped at
//! dispatch time keeps late responses from a superseded submit out of the
//! current state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ProviderKeys;
use crate::dates::DateWindow;
use crate::domain::{ChartSeries, NewsArticle, PriceChangeRecord, ProfileRecord, Symbol};
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::providers::{FetchError, MarketDataClient, NewsClient, ProviderId};

const POISONED: &str = "dashboard state lock poisoned";

/// Per-provider fetch state machine: `Idle → Loading → {Ready, Failed}`,
/// back to `Loading` on the next submit. There is no retry transition out of
/// `Failed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum FetchSlot<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(FetchError),
}

impl<T> FetchSlot<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once the slot has left `Loading` for either terminal state.
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub const fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Snapshot of everything the presentation layer reads.
///
/// Replaced wholesale on each submit; slots then settle independently as
/// their fetches come back.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardState {
    /// The submitted query while its chart fetch is outstanding; cleared when
    /// the chart settles, success or failure.
    pub query: Option<Symbol>,
    /// Heading label for the profile/chart/news regions; set once the profile
    /// fetch settles and retained until the next submit.
    pub display_symbol: Option<Symbol>,
    pub profile: FetchSlot<ProfileRecord>,
    pub price_change: FetchSlot<PriceChangeRecord>,
    pub chart: FetchSlot<ChartSeries>,
    pub news: FetchSlot<Vec<NewsArticle>>,
}

impl DashboardState {
    /// Profile and chart are the two slots whose loading state drives the
    /// spinner.
    pub fn show_spinner(&self) -> bool {
        self.profile.is_loading() || self.chart.is_loading()
    }

    pub fn profile_visible(&self) -> bool {
        self.profile.data().is_some_and(has_content)
    }

    pub fn price_change_visible(&self) -> bool {
        self.price_change.data().is_some_and(has_content)
    }

    pub fn chart_visible(&self) -> bool {
        self.chart.data().is_some_and(|series| !series.is_empty())
    }

    pub fn news_visible(&self) -> bool {
        self.news.data().is_some_and(|articles| !articles.is_empty())
    }

    pub fn display_label(&self) -> Option<&str> {
        self.display_symbol.as_ref().map(Symbol::as_str)
    }

    /// Every failed slot paired with its provider, in region order.
    pub fn failures(&self) -> Vec<(ProviderId, &FetchError)> {
        let mut failures = Vec::new();
        if let Some(error) = self.profile.error() {
            failures.push((ProviderId::Profile, error));
        }
        if let Some(error) = self.price_change.error() {
            failures.push((ProviderId::PriceChange, error));
        }
        if let Some(error) = self.chart.error() {
            failures.push((ProviderId::Chart, error));
        }
        if let Some(error) = self.news.error() {
            failures.push((ProviderId::News, error));
        }
        failures
    }
}

/// An opaque payload counts as content unless it is null or an empty array;
/// an unknown symbol typically comes back as `200 []`.
fn has_content(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// The fetch orchestrator: owns the four slots and the generation counter.
pub struct Dashboard {
    market: MarketDataClient,
    news: NewsClient,
    state: Mutex<DashboardState>,
    generation: AtomicU64,
}

impl Dashboard {
    pub fn new(keys: ProviderKeys) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), keys)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, keys: ProviderKeys) -> Self {
        Self {
            market: MarketDataClient::new(http_client.clone(), keys.market_api_key),
            news: NewsClient::new(http_client, keys.news_api_key),
            state: Mutex::new(DashboardState::default()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state().clone()
    }

    /// Run one submission to completion.
    ///
    /// The four fetches are dispatched together and interleave at their await
    /// points; each settles only its own slot. A submit that lands while a
    /// prior one is still in flight does not cancel the prior requests; their
    /// late responses are discarded by the generation check instead.
    pub async fn submit(&self, symbol: Symbol) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(symbol = %symbol, generation, "dispatching dashboard fetches");

        {
            let mut state = self.state();
            *state = DashboardState {
                query: Some(symbol.clone()),
                display_symbol: None,
                profile: FetchSlot::Loading,
                price_change: FetchSlot::Loading,
                chart: FetchSlot::Loading,
                news: FetchSlot::Loading,
            };
        }

        tokio::join!(
            self.fetch_profile(&symbol, generation),
            self.fetch_price_change(&symbol, generation),
            self.fetch_chart(&symbol, generation),
            self.fetch_news(&symbol, generation),
        );
    }

    async fn fetch_profile(&self, symbol: &Symbol, generation: u64) {
        let result = self.market.profile(symbol).await;

        let mut state = self.state();
        if self.is_stale(generation, ProviderId::Profile) {
            return;
        }
        state.display_symbol = Some(symbol.clone());
        state.profile = settle(ProviderId::Profile, result);
    }

    async fn fetch_price_change(&self, symbol: &Symbol, generation: u64) {
        let result = self.market.price_change(symbol).await;

        let mut state = self.state();
        if self.is_stale(generation, ProviderId::PriceChange) {
            return;
        }
        state.price_change = settle(ProviderId::PriceChange, result);
    }

    async fn fetch_chart(&self, symbol: &Symbol, generation: u64) {
        let window = DateWindow::ending_today();
        let result = self
            .market
            .intraday_chart(symbol, &window)
            .await
            .map(ChartSeries::from_samples);

        let mut state = self.state();
        if self.is_stale(generation, ProviderId::Chart) {
            return;
        }
        // The input box empties once the chart settles, success or failure.
        state.query = None;
        state.chart = settle(ProviderId::Chart, result);
    }

    async fn fetch_news(&self, symbol: &Symbol, generation: u64) {
        let result = self.news.headlines(symbol).await;

        let mut state = self.state();
        if self.is_stale(generation, ProviderId::News) {
            return;
        }
        state.news = settle(ProviderId::News, result);
    }

    fn state(&self) -> MutexGuard<'_, DashboardState> {
        self.state.lock().expect(POISONED)
    }

    /// Must be called with the state lock held so the check and the slot
    /// write are atomic with respect to a superseding submit's reset.
    fn is_stale(&self, generation: u64, provider: ProviderId) -> bool {
        let stale = self.generation.load(Ordering::SeqCst) != generation;
        if stale {
            debug!(generation, provider = %provider, "discarding superseded response");
        }
        stale
    }
}

fn settle<T>(provider: ProviderId, result: Result<T, FetchError>) -> FetchSlot<T> {
    match result {
        Ok(data) => FetchSlot::Ready(data),
        Err(error) => {
            warn!(provider = %provider, error = %error, "provider fetch failed");
            FetchSlot::Failed(error)
        }
    }
}
