pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;
pub use crate::config::{FeedConfig, USGS_FEED_URL};

pub use crate::core::controller::ReportController;
pub use crate::core::fetcher::UsgsFetcher;
pub use crate::core::ui::{UiHandle, UiThread};
pub use crate::domain::model::EarthquakeReport;
pub use crate::domain::ports::{ConfigProvider, DisplaySink, ReportSource};
pub use crate::utils::error::{FeltError, Result};
