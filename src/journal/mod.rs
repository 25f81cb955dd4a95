//! Journal entries
//!
//! The records the viewer renders, and how they are loaded.

pub mod error;
pub mod types;

pub use error::{JournalError, JournalResult};
pub use types::{EntryImage, JournalEntries, JournalEntry};
