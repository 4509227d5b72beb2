pub mod controller;
pub mod feed;
pub mod fetcher;
pub mod ui;

pub use crate::domain::model::EarthquakeReport;
pub use crate::domain::ports::{ConfigProvider, DisplaySink, ReportSource};
pub use crate::utils::error::Result;
