//! Client-side router
//!
//! Navigation log, hash fragments and the history tracker that ties them to
//! a history backend.

pub mod entry;
pub mod error;
pub mod log;
pub mod sink;
pub mod tracker;

pub use entry::{EntryId, NavigationEntry, ViewKind};
pub use error::{RouterError, RouterResult};
pub use log::NavigationLog;
pub use sink::{HistorySink, HistoryState, MemoryHistory, NoopHistory};
pub use tracker::HistoryTracker;
