//! Behavior tests for the dashboard orchestrator: slot independence, settle
//! side effects, and superseded-submit handling.

use std::sync::Arc;

use serde_json::json;

use stockdeck_core::{
    Dashboard, FetchErrorKind, HttpError, HttpResponse, ProviderId, ProviderKeys, Symbol,
};
use stockdeck_tests::{GatedHttpClient, GatedRequest, ScriptedHttpClient};

fn keys() -> ProviderKeys {
    ProviderKeys::new("market-key", "news-key")
}

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

fn happy_routes() -> ScriptedHttpClient {
    ScriptedHttpClient::new()
        .ok(
            "/profile/AAPL",
            r#"[{"symbol":"AAPL","companyName":"Apple Inc."}]"#,
        )
        .ok("/stock-price-change/AAPL", r#"[{"symbol":"AAPL","1D":0.8}]"#)
        .ok(
            "/historical-chart/5min/AAPL",
            r#"[{"date":"2024-03-05 09:30:00","close":150.0},{"date":"2024-03-05 09:35:00","close":151.2}]"#,
        )
        .ok("/everything?q=AAPL", r#"{"articles":[{"title":"Apple ships"}]}"#)
}

// =============================================================================
// Happy path
// =============================================================================

#[tokio::test]
async fn happy_path_settles_all_four_slots() {
    // Given: all four providers answer successfully
    let client = Arc::new(happy_routes());
    let dashboard = Dashboard::with_http_client(client.clone(), keys());

    // When: one symbol is submitted
    dashboard.submit(symbol("AAPL")).await;
    let state = dashboard.snapshot();

    // Then: exactly four requests went out, each keyed by the symbol
    let requests = client.requests();
    assert_eq!(requests.len(), 4);
    assert!(requests.iter().all(|url| url.contains("AAPL")));

    // And: every slot settled without error
    assert!(state.profile.is_settled() && state.profile.error().is_none());
    assert!(state.price_change.is_settled() && state.price_change.error().is_none());
    assert!(state.chart.is_settled() && state.chart.error().is_none());
    assert!(state.news.is_settled() && state.news.error().is_none());

    // And: the chart series is paired and index-aligned
    let series = state.chart.data().expect("chart should be ready");
    assert_eq!(
        series.labels,
        vec!["2024-03-05 09:30:00", "2024-03-05 09:35:00"]
    );
    assert_eq!(series.values, vec![150.0, 151.2]);

    // And: the query cleared, the display label stuck, every region is visible
    assert!(state.query.is_none());
    assert_eq!(state.display_label(), Some("AAPL"));
    assert!(!state.show_spinner());
    assert!(state.profile_visible());
    assert!(state.price_change_visible());
    assert!(state.chart_visible());
    assert!(state.news_visible());
}

// =============================================================================
// Slot independence
// =============================================================================

#[tokio::test]
async fn profile_failure_leaves_sibling_slots_intact() {
    let client = Arc::new(
        ScriptedHttpClient::new()
            .route(
                "/profile/AAPL",
                Ok(HttpResponse {
                    status: 500,
                    body: String::new(),
                }),
            )
            .ok("/stock-price-change/AAPL", r#"[{"symbol":"AAPL"}]"#)
            .ok(
                "/historical-chart/5min/AAPL",
                r#"[{"date":"2024-03-05 09:30:00","close":150.0}]"#,
            )
            .ok("/everything?q=AAPL", r#"{"articles":[{"title":"Apple"}]}"#),
    );
    let dashboard = Dashboard::with_http_client(client, keys());

    dashboard.submit(symbol("AAPL")).await;
    let state = dashboard.snapshot();

    let error = state.profile.error().expect("profile should fail");
    assert_eq!(error.kind(), FetchErrorKind::Status);
    assert_eq!(error.http_status(), Some(500));
    assert!(!state.profile_visible());

    assert!(state.price_change.data().is_some());
    assert!(state.chart.data().is_some());
    assert!(state.news.data().is_some());
    assert!(state.price_change_visible());
    assert!(state.chart_visible());
    assert!(state.news_visible());

    assert_eq!(
        state
            .failures()
            .into_iter()
            .map(|(provider, _)| provider)
            .collect::<Vec<_>>(),
        vec![ProviderId::Profile]
    );
}

#[tokio::test]
async fn chart_failure_still_clears_the_query() {
    let client = Arc::new(
        ScriptedHttpClient::new()
            .ok("/profile/AAPL", r#"[{"symbol":"AAPL"}]"#)
            .ok("/stock-price-change/AAPL", "[]")
            .route(
                "/historical-chart/5min/AAPL",
                Err(HttpError::new("connection reset")),
            )
            .ok("/everything?q=AAPL", r#"{"articles":[]}"#),
    );
    let dashboard = Dashboard::with_http_client(client, keys());

    dashboard.submit(symbol("AAPL")).await;
    let state = dashboard.snapshot();

    let error = state.chart.error().expect("chart should fail");
    assert_eq!(error.kind(), FetchErrorKind::Transport);
    assert!(!state.chart.is_loading());

    // Cleanup runs on the failure path too.
    assert!(state.query.is_none());
    assert_eq!(state.display_label(), Some("AAPL"));
}

#[tokio::test]
async fn news_failure_reports_its_own_region() {
    let client = Arc::new(
        ScriptedHttpClient::new()
            .ok("/profile/AAPL", r#"[{"symbol":"AAPL"}]"#)
            .ok("/stock-price-change/AAPL", "[]")
            .ok("/historical-chart/5min/AAPL", "[]")
            .route(
                "/everything?q=AAPL",
                Ok(HttpResponse {
                    status: 429,
                    body: String::new(),
                }),
            ),
    );
    let dashboard = Dashboard::with_http_client(client, keys());

    dashboard.submit(symbol("AAPL")).await;
    let state = dashboard.snapshot();

    let failures = state.failures();
    assert_eq!(failures.len(), 1);
    let (provider, error) = &failures[0];
    assert_eq!(*provider, ProviderId::News);
    assert_eq!(error.http_status(), Some(429));
    assert_eq!(
        provider.user_message(),
        "Error fetching news. Please try again later."
    );
}

// =============================================================================
// Superseded submits
// =============================================================================

fn respond_all(requests: Vec<GatedRequest>, ticker: &str) {
    for request in requests {
        let response = if request.url.contains("/profile/") {
            HttpResponse::ok_json(format!(r#"[{{"symbol":"{ticker}"}}]"#))
        } else if request.url.contains("/stock-price-change/") {
            HttpResponse::ok_json(format!(r#"[{{"symbol":"{ticker}","1D":1.0}}]"#))
        } else if request.url.contains("/historical-chart/") {
            HttpResponse::ok_json(r#"[{"date":"2024-03-05 09:30:00","close":150.0}]"#)
        } else {
            HttpResponse::ok_json(r#"{"articles":[]}"#)
        };
        request.respond(Ok(response));
    }
}

#[tokio::test]
async fn superseded_submit_keeps_only_the_latest_results() {
    let client = Arc::new(GatedHttpClient::new());
    let dashboard = Arc::new(Dashboard::with_http_client(client.clone(), keys()));

    // Given: a first submit whose responses are all held open
    let first = tokio::spawn({
        let dashboard = dashboard.clone();
        async move { dashboard.submit(symbol("AAPL")).await }
    });
    client.wait_for_requests(4).await;
    let stale = client.take_pending();
    assert_eq!(stale.len(), 4);

    // When: a second submit lands before the first has settled
    let second = tokio::spawn({
        let dashboard = dashboard.clone();
        async move { dashboard.submit(symbol("MSFT")).await }
    });
    client.wait_for_requests(8).await;
    respond_all(client.take_pending(), "MSFT");
    second.await.expect("second submit should complete");

    // And: the first submit's responses finally arrive, late
    respond_all(stale, "AAPL");
    first.await.expect("first submit should complete");

    // Then: the stale responses were discarded, not written over the new state
    let state = dashboard.snapshot();
    assert_eq!(state.profile.data(), Some(&json!([{"symbol": "MSFT"}])));
    assert_eq!(state.display_label(), Some("MSFT"));
    assert!(state.query.is_none());
    assert!(state.chart.data().is_some());
}
