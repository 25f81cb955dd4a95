//! # Journal
//!
//! Journal entry viewer core: client-side routing between the entry list,
//! single entries and settings, with hash-based navigation history.
//!
//! ## Modules
//!
//! - [`router`]: Navigation log, hash fragments and the history tracker
//! - [`journal`]: Journal entry records and the bundled entry set
//! - [`view`]: Header text and body class for each view
//! - [`session`]: Page controller combining the pieces above
//! - `config`: TOML/environment configuration (`cli` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use journal::router::HistoryTracker;
//!
//! let mut tracker = HistoryTracker::default();
//!
//! assert_eq!(tracker.push_to_history("settings", None).len(), 2);
//! assert_eq!(tracker.push_to_history("entry", Some("2")).len(), 3);
//! assert_eq!(tracker.push_to_history("", None).len(), 4);
//! ```

#[cfg(feature = "cli")]
pub mod config;
pub mod journal;
pub mod router;
pub mod session;
pub mod view;

// Re-export top-level types for convenience
pub use router::{
    EntryId, HistorySink, HistoryState, HistoryTracker, MemoryHistory, NavigationEntry,
    NavigationLog, NoopHistory, RouterError, RouterResult, ViewKind,
};

pub use journal::{EntryImage, JournalEntries, JournalEntry, JournalError, JournalResult};

pub use session::Session;

pub use view::{ViewState, HOME_TITLE};

#[cfg(feature = "cli")]
pub use config::{AppConfig, Config, ConfigError, LoggingConfig, RouterConfig};
