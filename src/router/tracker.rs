//! History tracker
//!
//! Turns a requested navigation into a hash fragment pushed to a history
//! sink plus one appended log entry, and hands the updated log back to the
//! caller.

use super::entry::NavigationEntry;
use super::log::NavigationLog;
use super::sink::{HistorySink, NoopHistory};

/// Owns the navigation log of one page session
#[derive(Debug, Clone)]
pub struct HistoryTracker<S = NoopHistory> {
    log: NavigationLog,
    sink: S,
}

impl Default for HistoryTracker<NoopHistory> {
    fn default() -> Self {
        Self::new(NoopHistory)
    }
}

impl<S: HistorySink> HistoryTracker<S> {
    /// Tracker whose log starts with the implicit home entry
    pub fn new(sink: S) -> Self {
        Self::with_log(NavigationLog::with_home(), sink)
    }

    /// Tracker starting from an explicit baseline log
    pub fn with_log(log: NavigationLog, sink: S) -> Self {
        Self { log, sink }
    }

    /// Record a navigation described by a kind string.
    ///
    /// `"entry"` and `"settings"` are recognized; any other kind is treated
    /// as home. `identifier` is only used for entries.
    pub fn push_to_history(&mut self, kind: &str, identifier: Option<&str>) -> &NavigationLog {
        self.navigate(NavigationEntry::from_kind(kind, identifier))
    }

    /// Record a typed navigation
    pub fn navigate(&mut self, entry: NavigationEntry) -> &NavigationLog {
        let hash = entry.hash();

        if let Err(e) = self.sink.push_state(&entry, &hash) {
            tracing::warn!(entry = %entry, error = %e, "History sink rejected navigation");
        }

        self.log.push(entry);
        tracing::debug!(hash = %hash, len = self.log.len(), "Pushed navigation entry");

        &self.log
    }

    pub fn log(&self) -> &NavigationLog {
        &self.log
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (NavigationLog, S) {
        (self.log, self.sink)
    }
}
