//! Append-only merge of snapshots into the history series.

use tracing::{debug, info};

use crate::models::{HistoryEntry, HistorySeries, LatestSnapshot};

/// What [`merge`] did to the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Appended,
    AlreadyPresent,
}

/// Record `snapshot` in `history` unless its as-of date is already there.
///
/// An existing entry for the same date is never replaced. After an append the
/// series is re-sorted ascending by date.
pub fn merge(history: &mut HistorySeries, snapshot: &LatestSnapshot) -> MergeOutcome {
    if history.contains(snapshot.as_of) {
        debug!(as_of = %snapshot.as_of, "History already has this date");
        return MergeOutcome::AlreadyPresent;
    }

    history.series.push(HistoryEntry {
        as_of: snapshot.as_of,
        source: snapshot.source.clone(),
        countries: snapshot.countries.clone(),
    });
    history.series.sort_by(|a, b| a.as_of.cmp(&b.as_of));

    info!(as_of = %snapshot.as_of, entries = history.series.len(), "Appended to history");
    MergeOutcome::Appended
}
