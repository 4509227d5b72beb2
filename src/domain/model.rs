use serde::{Deserialize, Serialize};

/// A single earthquake event as reported by people who felt it.
///
/// Immutable once constructed; a fresh fetch produces a fresh report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarthquakeReport {
    /// Title of the earthquake event (place + magnitude as given by the feed).
    pub title: String,
    /// Number of people who felt the earthquake and reported how strong it was.
    /// Kept textual; the upstream feed may format or qualify the count.
    pub respondent_count: String,
    /// Perceived strength from the responses, rendered with one decimal place.
    pub perceived_strength: String,
}

impl EarthquakeReport {
    pub fn new(title: String, respondent_count: String, perceived_strength: String) -> Self {
        Self {
            title,
            respondent_count,
            perceived_strength,
        }
    }
}
