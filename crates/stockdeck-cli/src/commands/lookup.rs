use std::time::Instant;

use serde_json::{json, Value};
use uuid::Uuid;

use stockdeck_core::{
    ChartTheme, Dashboard, Envelope, EnvelopeError, EnvelopeMeta, LineChartView, ProviderKeys,
    Symbol,
};

use crate::cli::LookupArgs;
use crate::error::CliError;

pub async fn run(args: &LookupArgs) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();
    let symbol = Symbol::parse(&args.symbol)?;

    let keys = ProviderKeys::from_env();
    let mut warnings = Vec::new();
    if keys.market_api_key.is_empty() {
        warnings.push(format!(
            "{} is not set; market data requests will fail upstream",
            ProviderKeys::MARKET_KEY_VAR
        ));
    }
    if keys.news_api_key.is_empty() {
        warnings.push(format!(
            "{} is not set; news requests will fail upstream",
            ProviderKeys::NEWS_KEY_VAR
        ));
    }

    let dashboard = Dashboard::new(keys);
    dashboard.submit(symbol).await;
    let state = dashboard.snapshot();

    let theme = if args.dark {
        ChartTheme::Dark
    } else {
        ChartTheme::Light
    };
    let chart = state.chart.data().map(|series| {
        LineChartView::compose(series, state.display_label().unwrap_or_default(), theme)
    });

    let mut region_errors = Vec::new();
    for (provider, error) in state.failures() {
        region_errors
            .push(EnvelopeError::new(error.code(), provider.user_message())?.with_source(provider));
    }

    let regions = json!({
        "spinner": state.show_spinner(),
        "profile": state.profile_visible(),
        "price_change": state.price_change_visible(),
        "chart": state.chart_visible(),
        "news": state.news_visible(),
    });

    let data = json!({
        "dashboard": state,
        "chart": chart,
        "regions": regions,
    });

    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        started.elapsed().as_millis() as u64,
    )?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    let mut envelope = Envelope::success(meta, data);
    for error in region_errors {
        envelope.push_error(error)?;
    }

    Ok(envelope)
}
