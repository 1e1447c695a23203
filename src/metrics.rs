use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Pre-register counters so they appear even before the first increment.
    counter!("analyses_total").absolute(0);
    counter!("headlines_scored_total").absolute(0);
    counter!("news_fetch_failures_total").absolute(0);
    counter!("price_fetch_failures_total").absolute(0);

    gauge!("last_mean_sentiment").set(0.0);

    // Histogram is lazily created on first record; force creation.
    histogram!("analysis_latency_seconds").record(0.0);

    Ok(handle)
}
