//! UI Components

pub mod entry_page;
pub mod header;
pub mod journal_entry;

pub use entry_page::EntryPage;
pub use header::Header;
pub use journal_entry::JournalEntryCard;
