use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::price::CountryPriceRow;
use crate::config;

// ---------------------------------------------------------------------------
// HistoryEntry — One dated table in the series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub as_of: NaiveDate,
    pub source: String,
    pub countries: Vec<CountryPriceRow>,
}

// ---------------------------------------------------------------------------
// HistorySeries — The published `history.json` document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySeries {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub series: Vec<HistoryEntry>,
}

fn default_region() -> String {
    config::REGION.to_string()
}

fn default_unit() -> String {
    config::UNIT.to_string()
}

impl HistorySeries {
    pub fn empty() -> Self {
        Self::from_series(Vec::new())
    }

    /// Wrap existing entries with the fixed region/unit tags.
    pub fn from_series(series: Vec<HistoryEntry>) -> Self {
        Self {
            region: default_region(),
            unit: default_unit(),
            series,
        }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn contains(&self, as_of: NaiveDate) -> bool {
        self.series.iter().any(|e| e.as_of == as_of)
    }
}

impl Default for HistorySeries {
    fn default() -> Self {
        Self::empty()
    }
}
