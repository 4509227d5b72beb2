use crate::core::feed::{first_report, FeltFeed};
use crate::domain::model::EarthquakeReport;
use crate::domain::ports::{ConfigProvider, ReportSource};
use crate::utils::error::{FeltError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches one felt report from a USGS-style GeoJSON feed.
///
/// Stateless apart from the HTTP client; the URL is an opaque parameter and
/// no query semantics are validated here.
pub struct UsgsFetcher {
    client: Client,
}

impl UsgsFetcher {
    /// Builds the fetcher with bounded connect and read timeouts taken from
    /// the config. A stalled server must never pin the background task.
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.read_timeout())
            .build()?;
        Ok(Self { client })
    }

    async fn try_fetch(&self, url: &str) -> Result<EarthquakeReport> {
        tracing::debug!("Requesting felt report feed: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Feed response status: {}", status);
        if !status.is_success() {
            return Err(FeltError::StatusError(status));
        }

        let body = response.text().await?;
        let feed: FeltFeed = serde_json::from_str(&body)?;

        first_report(&feed)
    }
}

#[async_trait]
impl ReportSource for UsgsFetcher {
    async fn fetch(&self, url: &str) -> Option<EarthquakeReport> {
        if url.trim().is_empty() {
            tracing::debug!("No feed URL configured, skipping fetch");
            return None;
        }

        match self.try_fetch(url).await {
            Ok(report) => {
                tracing::info!("Fetched felt report: {}", report.title);
                Some(report)
            }
            Err(e) => {
                tracing::warn!("Felt report fetch failed: {}", e);
                None
            }
        }
    }
}
