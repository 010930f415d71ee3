//! Async wrapper around [`Ingest`] for use in async runtimes (Tokio, etc.).
//!
//! Runs the blocking pipeline on Tokio's blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use eurofuel_ingest::AsyncIngest;
//!
//! # async fn example() -> eurofuel_ingest::Result<()> {
//! let ingest = AsyncIngest::builder().data_dir("data").build().await?;
//! let report = ingest.run().await?;
//! println!("as of {}", report.snapshot.as_of);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{IngestError, Result};
use crate::models::{HistorySeries, LatestSnapshot};
use crate::orchestrator::SourceSpec;
use crate::pipeline::RunReport;
use crate::{config, Ingest};

// ---------------------------------------------------------------------------
// AsyncIngestBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncIngest`] instance.
pub struct AsyncIngestBuilder {
    data_dir: Option<PathBuf>,
    timeout: Duration,
    sources: Option<Vec<SourceSpec>>,
}

impl Default for AsyncIngestBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            timeout: config::DEFAULT_TIMEOUT,
            sources: None,
        }
    }
}

impl AsyncIngestBuilder {
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn sources(mut self, sources: Vec<SourceSpec>) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Build the async handle.
    ///
    /// The blocking HTTP client is constructed on the blocking pool, since it
    /// must not be created from inside an async context.
    pub async fn build(self) -> Result<AsyncIngest> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Ingest::builder().timeout(self.timeout);
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            if let Some(sources) = self.sources {
                builder = builder.sources(sources);
            }
            let ingest = builder.build()?;
            Ok(AsyncIngest {
                inner: Arc::new(Mutex::new(ingest)),
            })
        })
        .await
        .map_err(|e| IngestError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncIngest
// ---------------------------------------------------------------------------

/// Async wrapper around [`Ingest`].
///
/// Runs are serialized through a [`Mutex`], so two overlapping calls never
/// write the documents concurrently.
pub struct AsyncIngest {
    inner: Arc<Mutex<Ingest>>,
}

impl AsyncIngest {
    pub fn builder() -> AsyncIngestBuilder {
        AsyncIngestBuilder::default()
    }

    /// Run any sync [`Ingest`] operation on the blocking thread pool.
    pub async fn with<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Ingest) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let ingest = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = ingest
                .lock()
                .map_err(|_| IngestError::InvalidArgument("Ingest lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| IngestError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn run(&self) -> Result<RunReport> {
        self.with(|i| i.run()).await
    }

    pub async fn latest(&self) -> Result<Option<LatestSnapshot>> {
        self.with(|i| i.latest()).await
    }

    pub async fn history(&self) -> Result<HistorySeries> {
        self.with(|i| Ok(i.history())).await
    }
}
