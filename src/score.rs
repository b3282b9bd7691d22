use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::questions::{Rating, Responses};

/// Substituted for any slot still unanswered when the score is computed.
pub const NEUTRAL_FALLBACK: u8 = 3;
pub const MAX_RATING: u8 = 5;

const PLACEHOLDER_NAME: &str = "Friend";

/// Report wording master, one entry per score band. The wording and the
/// band thresholds are data; only the first-match selection rule below is
/// code.
pub static REPORTS: Lazy<ReportConfig> = Lazy::new(|| {
    let f = std::fs::File::open("resources/reports.json").unwrap();
    let reader = std::io::BufReader::new(f);
    serde_json::from_reader(reader).unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Mid,
    High,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BandReport {
    pub band: Band,
    /// Inclusive upper bound of the band.
    pub max_score: u8,
    pub title: String,
    pub summary: String,
    pub heading: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub bands: Vec<BandReport>,
}

impl ReportConfig {
    /// First band whose inclusive upper bound covers the score. Bands are
    /// ordered ascending in the resource, so every score maps to exactly
    /// one entry.
    pub fn band_for(&self, score: u8) -> &BandReport {
        self.bands
            .iter()
            .find(|band| score <= band.max_score)
            .or_else(|| self.bands.last())
            .expect("report resource defines no bands")
    }
}

/// Feedback shown on the final screen, fully derived from the score and
/// the user's name. The display surface owns all formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPayload {
    pub title: String,
    pub summary: String,
    pub heading: String,
    pub suggestions: Vec<String>,
}

/// Percentage score over the full response set, rounded half-up.
///
/// Unanswered slots count as [`NEUTRAL_FALLBACK`]. The flow blocks
/// finishing with the last question unanswered, but earlier slots can in
/// principle be skipped (and the bulk path genuinely produces gaps), so
/// the fallback is applied unconditionally rather than treated as an
/// error.
pub fn compute_score(responses: &Responses) -> u8 {
    let max = responses.len() as u32 * MAX_RATING as u32;
    if max == 0 {
        return 0;
    }
    let total: u32 = responses
        .slots()
        .iter()
        .map(|slot| u32::from(slot.map_or(NEUTRAL_FALLBACK, Rating::value)))
        .sum();
    (f64::from(total) / f64::from(max) * 100.0).round() as u8
}

pub fn band_of(score: u8) -> Band {
    REPORTS.band_for(score).band
}

/// Build the report for a score. An empty or whitespace name falls back
/// to a friendly placeholder in the title.
pub fn select_report(score: u8, name: &str) -> ReportPayload {
    let name = name.trim();
    let name = if name.is_empty() { PLACEHOLDER_NAME } else { name };
    let report = REPORTS.band_for(score);
    ReportPayload {
        title: report.title.replace("{name}", name),
        summary: report.summary.clone(),
        heading: report.heading.clone(),
        suggestions: report.suggestions.clone(),
    }
}
