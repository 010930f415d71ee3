use chrono::{DateTime, Utc};

use crate::config;
use crate::models::LatestSnapshot;
use crate::orchestrator::SourceOutcome;

/// Wrap an accepted source result into the `latest.json` document.
pub fn build_snapshot(outcome: &SourceOutcome, now: DateTime<Utc>) -> LatestSnapshot {
    LatestSnapshot {
        region: config::REGION.to_string(),
        as_of: outcome.table.as_of,
        source: outcome.source.clone(),
        source_url: outcome.source_url.clone(),
        fetched_at_utc: now,
        unit: config::UNIT.to_string(),
        countries: outcome.table.countries.clone(),
    }
}
