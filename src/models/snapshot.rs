use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::price::CountryPriceRow;

// ---------------------------------------------------------------------------
// ParsedTable — What a source parser extracts from one page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    pub as_of: NaiveDate,
    pub countries: Vec<CountryPriceRow>,
}

// ---------------------------------------------------------------------------
// LatestSnapshot — The published `latest.json` document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestSnapshot {
    pub region: String,
    pub as_of: NaiveDate,
    pub source: String,
    pub source_url: String,
    pub fetched_at_utc: DateTime<Utc>,
    pub unit: String,
    pub countries: Vec<CountryPriceRow>,
}
