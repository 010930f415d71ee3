//! Read-side queries over the published documents.
//!
//! Each query struct borrows a loaded document and answers the questions the
//! web and mobile clients ask of it: lookups, rankings and history movement.

pub mod history;
pub mod snapshot;

pub use history::HistoryQuery;
pub use snapshot::SnapshotQuery;
