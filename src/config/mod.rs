#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed query: felt events between 2016-01-01 and 2016-05-02 with at least
/// 50 felt reports and magnitude 5+.
pub const USGS_FEED_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&starttime=2016-01-01&endtime=2016-05-02&minfelt=50&minmagnitude=5";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_READ_TIMEOUT_SECS: u64 = 15;

/// Configuration for one felt-report fetch. Passed into the pipeline
/// explicitly so tests can point it at a mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub feed_url: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl FeedConfig {
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            ..Self::default()
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            feed_url: USGS_FEED_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
        }
    }
}

impl ConfigProvider for FeedConfig {
    fn feed_url(&self) -> &str {
        &self.feed_url
    }

    fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    fn read_timeout(&self) -> Duration {
        self.read_timeout
    }
}

impl Validate for FeedConfig {
    fn validate(&self) -> Result<()> {
        validate_url("feed_url", &self.feed_url)?;
        Ok(())
    }
}
