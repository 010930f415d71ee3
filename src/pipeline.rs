//! One ingestion run: select a source, build the snapshot, merge history,
//! write both documents.

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::error::{IngestError, Result, SourceFailure};
use crate::fetch::Fetcher;
use crate::history::{self, MergeOutcome};
use crate::models::LatestSnapshot;
use crate::orchestrator::{self, SourceSpec};
use crate::snapshot::build_snapshot;
use crate::store::DataStore;

/// Summary of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub snapshot: LatestSnapshot,
    pub merge: MergeOutcome,
    pub history_len: usize,
    /// Sources that failed before the accepted one.
    pub failures: Vec<SourceFailure>,
}

/// Execute the pipeline against `store`.
///
/// Nothing is written unless a source succeeded, so on
/// [`IngestError::AllSourcesExhausted`] both documents keep their previous
/// contents.
pub fn run(
    sources: &[SourceSpec],
    fetcher: &dyn Fetcher,
    store: &DataStore,
    now: DateTime<Utc>,
) -> Result<RunReport> {
    let outcome = match orchestrator::select_source(sources, fetcher) {
        Ok(outcome) => outcome,
        Err(e @ IngestError::AllSourcesExhausted(_)) => {
            let attempted: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
            error!(sources = ?attempted, "{}", e);
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    let snapshot = build_snapshot(&outcome, now);

    let mut series = store.load_history();
    let merge = history::merge(&mut series, &snapshot);

    store.write_latest(&snapshot)?;
    store.write_history(&series)?;

    info!(
        as_of = %snapshot.as_of,
        source = %snapshot.source,
        countries = snapshot.countries.len(),
        "Wrote {} and {}",
        store.latest_path().display(),
        store.history_path().display()
    );

    Ok(RunReport {
        snapshot,
        merge,
        history_len: series.len(),
        failures: outcome.failures,
    })
}
