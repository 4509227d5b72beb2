use crate::domain::model::EarthquakeReport;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn feed_url(&self) -> &str;
    fn connect_timeout(&self) -> Duration;
    fn read_timeout(&self) -> Duration;
}

/// Fetches felt-report data for a single earthquake event.
///
/// Every failure mode (empty URL, network error, bad status, malformed body,
/// empty feed, missing properties) collapses to `None` at this boundary; no
/// error type ever crosses it.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<EarthquakeReport>;
}

/// The display layer. Receives the three report fields verbatim, at most once
/// per activation, and only ever on the UI-owning thread.
pub trait DisplaySink: Send + Sync {
    fn show_report(&self, report: &EarthquakeReport);
}
