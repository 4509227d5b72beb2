use crate::domain::model::EarthquakeReport;
use crate::utils::error::{FeltError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Minimal slice of the USGS GeoJSON response. Only `place`, `felt` and
/// `cdi` inside the first feature's properties are consumed.
#[derive(Debug, Deserialize)]
pub struct FeltFeed {
    #[serde(default)]
    pub features: Vec<FeltFeature>,
}

#[derive(Debug, Deserialize)]
pub struct FeltFeature {
    #[serde(default)]
    pub properties: Option<FeltProperties>,
}

#[derive(Debug, Deserialize)]
pub struct FeltProperties {
    pub place: Option<String>,
    pub felt: Option<Value>,
    pub cdi: Option<f64>,
}

/// Builds the report from the first event in the feed. Remaining events are
/// ignored; only one record is ever surfaced.
pub fn first_report(feed: &FeltFeed) -> Result<EarthquakeReport> {
    if feed.features.len() > 1 {
        tracing::debug!(
            "Feed returned {} events, using the first only",
            feed.features.len()
        );
    }

    let event = feed.features.first().ok_or(FeltError::EmptyFeed)?;
    let props = event
        .properties
        .as_ref()
        .ok_or(FeltError::MissingProperty("properties"))?;

    let title = props
        .place
        .as_deref()
        .ok_or(FeltError::MissingProperty("place"))?
        .to_string();

    // The feed sometimes serves the count as a number, sometimes as a
    // pre-formatted string; either way it stays textual.
    let respondent_count = match &props.felt {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => return Err(FeltError::MissingProperty("felt")),
    };

    let cdi = props.cdi.ok_or(FeltError::MissingProperty("cdi"))?;

    Ok(EarthquakeReport::new(
        title,
        respondent_count,
        format_strength(cdi),
    ))
}

/// Intensity is rendered with exactly one decimal place.
pub fn format_strength(cdi: f64) -> String {
    format!("{:.1}", cdi)
}
