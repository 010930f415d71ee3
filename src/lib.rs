//! European fuel-price ingestion.
//!
//! Scrapes per-country fuel prices from public web sources, trying each source
//! in priority order until one parses, and publishes two JSON documents: a
//! wholesale-replaced `latest.json` snapshot and an append-only
//! `history.json` series with one entry per as-of date.
//!
//! # Quick start
//!
//! ```no_run
//! use eurofuel_ingest::Ingest;
//!
//! let ingest = Ingest::builder().data_dir("data").build().unwrap();
//!
//! // Fetch, parse, and publish
//! let report = ingest.run().unwrap();
//! println!("{} countries as of {}", report.snapshot.countries.len(), report.snapshot.as_of);
//!
//! // Read back the published history
//! let history = ingest.history();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod history;
pub mod models;
pub mod normalize;
pub mod orchestrator;
pub mod parsers;
pub mod pipeline;
pub mod queries;
pub mod snapshot;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncIngest;
pub use error::{FailureKind, IngestError, Result, SourceFailure};
pub use fetch::{Fetcher, HttpFetcher};
pub use orchestrator::SourceSpec;
pub use pipeline::RunReport;
pub use store::DataStore;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use models::{HistorySeries, LatestSnapshot};

// ---------------------------------------------------------------------------
// IngestBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`Ingest`] instance.
///
/// Use [`Ingest::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](IngestBuilder::build).
pub struct IngestBuilder {
    data_dir: Option<PathBuf>,
    timeout: Duration,
    user_agent: String,
    sources: Option<Vec<SourceSpec>>,
    fetcher: Option<Box<dyn Fetcher>>,
}

impl Default for IngestBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::USER_AGENT.to_string(),
            sources: None,
            fetcher: None,
        }
    }
}

impl IngestBuilder {
    /// Set the directory the documents are written to.
    ///
    /// If not set, `$EUROFUEL_DATA_DIR` is used, falling back to `./data`.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the per-request HTTP timeout. Defaults to 30 seconds.
    ///
    /// A timed-out request counts as a failed source.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` sent to every source.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replace the source list. Order is priority: the first source is preferred.
    pub fn sources(mut self, sources: Vec<SourceSpec>) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Use a custom fetcher instead of the HTTP client.
    ///
    /// When set, `timeout` and `user_agent` are ignored.
    pub fn fetcher(mut self, fetcher: Box<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Build the ingest handle, creating the data directory if needed.
    pub fn build(self) -> Result<Ingest> {
        let sources = self.sources.unwrap_or_else(config::default_sources);
        if sources.is_empty() {
            return Err(IngestError::InvalidArgument(
                "at least one source must be configured".to_string(),
            ));
        }

        let fetcher = match self.fetcher {
            Some(f) => f,
            None => Box::new(HttpFetcher::new(self.timeout, &self.user_agent)?),
        };
        let store = DataStore::new(self.data_dir)?;

        Ok(Ingest {
            sources,
            fetcher,
            store,
        })
    }
}

// ---------------------------------------------------------------------------
// Ingest
// ---------------------------------------------------------------------------

/// The main entry point: a configured source list, a fetcher, and a data store.
///
/// Created via [`Ingest::builder()`].
pub struct Ingest {
    sources: Vec<SourceSpec>,
    fetcher: Box<dyn Fetcher>,
    store: DataStore,
}

impl Ingest {
    /// Create a new builder for configuring the pipeline.
    pub fn builder() -> IngestBuilder {
        IngestBuilder::default()
    }

    /// Run the pipeline once.
    ///
    /// Fails with [`IngestError::AllSourcesExhausted`] only if every source
    /// failed; in that case neither document is touched.
    pub fn run(&self) -> Result<RunReport> {
        pipeline::run(
            &self.sources,
            self.fetcher.as_ref(),
            &self.store,
            chrono::Utc::now(),
        )
    }

    /// Load the currently published snapshot, if any.
    pub fn latest(&self) -> Result<Option<LatestSnapshot>> {
        self.store.load_latest()
    }

    /// Load the published history (empty if missing or unreadable).
    pub fn history(&self) -> HistorySeries {
        self.store.load_history()
    }

    pub fn sources(&self) -> &[SourceSpec] {
        &self.sources
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Ingest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name.as_str()).collect();
        write!(
            f,
            "Ingest(data_dir={}, sources=[{}])",
            self.store.data_dir.display(),
            names.join(", ")
        )
    }
}
