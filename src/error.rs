use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("All sources failed: {}", join_failures(.0))]
    AllSourcesExhausted(Vec<SourceFailure>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;

impl IngestError {
    /// Classify an error raised while trying a single source.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            IngestError::Parse(_) | IngestError::Json(_) => FailureKind::Parse,
            _ => FailureKind::Fetch,
        }
    }
}

/// Which stage of a source attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Fetch,
    Parse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Fetch => f.write_str("fetch"),
            FailureKind::Parse => f.write_str("parse"),
        }
    }
}

/// A recovered failure of one configured source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub source: String,
    pub url: String,
    pub kind: FailureKind,
    pub reason: String,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}: {})", self.source, self.kind, self.reason)
    }
}

fn join_failures(failures: &[SourceFailure]) -> String {
    if failures.is_empty() {
        return "no sources configured".to_string();
    }
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
