//! # Stockdeck Core
//!
//! Fetch orchestration and view-model types for the stockdeck dashboard.
//!
//! ## Overview
//!
//! One submission fans out to four independent providers (company profile,
//! price change, intraday chart, and news) and each lands in its own state
//! slot. Regions of the dashboard become visible as their own data arrives;
//! a slow or failing provider never blocks its siblings.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Provider API keys from the environment |
//! | [`dashboard`] | Fetch orchestrator, state slots, region readiness |
//! | [`dates`] | Calendar-date window for the chart request |
//! | [`domain`] | Symbol, sample, and series types |
//! | [`envelope`] | Machine-readable output envelope |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`providers`] | Market-data and news clients, fetch errors |
//! | [`view`] | Theme-aware chart view composition |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockdeck_core::{Dashboard, ProviderKeys, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = Dashboard::new(ProviderKeys::from_env());
//!     dashboard.submit(Symbol::parse("AAPL")?).await;
//!
//!     let state = dashboard.snapshot();
//!     if let Some(series) = state.chart.data() {
//!         println!("{} chart points", series.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Security
//!
//! API keys are read from environment variables only and are never logged.

pub mod config;
pub mod dashboard;
pub mod dates;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod providers;
pub mod view;

pub use config::ProviderKeys;
pub use dashboard::{Dashboard, DashboardState, FetchSlot};
pub use dates::{format_calendar_date, DateWindow};
pub use domain::{
    ChartSeries, IntradaySample, NewsArticle, PriceChangeRecord, ProfileRecord, Symbol,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::ValidationError;
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use providers::{FetchError, FetchErrorKind, MarketDataClient, NewsClient, ProviderId};
pub use view::{AxisConfig, ChartTheme, LineChartView};
