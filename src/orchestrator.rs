//! Source fallback: try each configured source in priority order and accept
//! the first one that both downloads and parses.

use std::fmt;

use tracing::{info, warn};

use crate::error::{IngestError, Result, SourceFailure};
use crate::fetch::Fetcher;
use crate::models::ParsedTable;
use crate::parsers::ParserFn;

/// One upstream source: display name, page URL and the parser for its layout.
#[derive(Clone)]
pub struct SourceSpec {
    pub name: String,
    pub url: String,
    pub parser: ParserFn,
}

impl SourceSpec {
    pub fn new(name: impl Into<String>, url: impl Into<String>, parser: ParserFn) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            parser,
        }
    }
}

impl fmt::Debug for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceSpec")
            .field("name", &self.name)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// The accepted source and its parsed table.
#[derive(Debug, Clone)]
pub struct SourceOutcome {
    pub source: String,
    pub source_url: String,
    pub table: ParsedTable,
    /// Sources tried (and failed) before this one, in order.
    pub failures: Vec<SourceFailure>,
}

/// Try `sources` in order and return the first successful parse.
///
/// Failures of individual sources are logged and collected; only when every
/// source has failed is [`IngestError::AllSourcesExhausted`] returned.
pub fn select_source(sources: &[SourceSpec], fetcher: &dyn Fetcher) -> Result<SourceOutcome> {
    let mut failures = Vec::new();

    for spec in sources {
        match try_source(spec, fetcher) {
            Ok(table) => {
                info!(
                    source = %spec.name,
                    as_of = %table.as_of,
                    countries = table.countries.len(),
                    "Source accepted"
                );
                return Ok(SourceOutcome {
                    source: spec.name.clone(),
                    source_url: spec.url.clone(),
                    table,
                    failures,
                });
            }
            Err(e) => {
                let failure = SourceFailure {
                    source: spec.name.clone(),
                    url: spec.url.clone(),
                    kind: e.failure_kind(),
                    reason: e.to_string(),
                };
                warn!(
                    source = %failure.source,
                    url = %failure.url,
                    kind = %failure.kind,
                    reason = %failure.reason,
                    "Source failed; trying next"
                );
                failures.push(failure);
            }
        }
    }

    Err(IngestError::AllSourcesExhausted(failures))
}

fn try_source(spec: &SourceSpec, fetcher: &dyn Fetcher) -> Result<ParsedTable> {
    let html = fetcher.fetch(&spec.url)?;
    (spec.parser)(&html)
}
