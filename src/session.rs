//! Page session
//!
//! Ties the journal entries, the history tracker and the active view
//! together the way the page does: clicks push through the tracker, while
//! back/forward (`popstate`) only restore a view from the URL hash and leave
//! the navigation log untouched.

use crate::journal::{JournalEntries, JournalEntry, JournalError, JournalResult};
use crate::router::{HistorySink, HistoryTracker, MemoryHistory, NavigationEntry, NavigationLog};
use crate::view::ViewState;

/// State of one loaded page
#[derive(Debug)]
pub struct Session<S> {
    entries: JournalEntries,
    tracker: HistoryTracker<S>,
    current: NavigationEntry,
}

impl<S: HistorySink> Session<S> {
    pub fn new(entries: JournalEntries, tracker: HistoryTracker<S>) -> Self {
        let current = tracker
            .log()
            .last()
            .cloned()
            .unwrap_or(NavigationEntry::Home);
        Self {
            entries,
            tracker,
            current,
        }
    }

    /// Open the entry with the given 1-based number
    pub fn open_entry(&mut self, number: usize) -> JournalResult<&JournalEntry> {
        let entry = self
            .entries
            .get(number)
            .ok_or(JournalError::EntryNotFound(number))?;

        let target = NavigationEntry::entry(number);
        self.current = target.clone();
        self.tracker.navigate(target);
        Ok(entry)
    }

    pub fn open_settings(&mut self) -> &NavigationLog {
        self.show(NavigationEntry::Settings)
    }

    pub fn go_home(&mut self) -> &NavigationLog {
        self.show(NavigationEntry::Home)
    }

    /// Apply a hash after back/forward navigation. The log is not modified.
    pub fn restore(&mut self, hash: &str) -> &NavigationEntry {
        self.current = NavigationEntry::from_hash(hash);
        tracing::debug!(entry = %self.current, "Restored view from hash");
        &self.current
    }

    pub fn current(&self) -> &NavigationEntry {
        &self.current
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::for_entry(&self.current)
    }

    /// The entry record shown on an entry page
    pub fn selected_entry(&self) -> Option<&JournalEntry> {
        self.current
            .id()
            .and_then(|id| id.number())
            .and_then(|n| self.entries.get(n))
    }

    pub fn entries(&self) -> &JournalEntries {
        &self.entries
    }

    pub fn log(&self) -> &NavigationLog {
        self.tracker.log()
    }

    pub fn history(&self) -> &S {
        self.tracker.sink()
    }

    fn show(&mut self, entry: NavigationEntry) -> &NavigationLog {
        self.current = entry.clone();
        self.tracker.navigate(entry)
    }
}

impl Session<MemoryHistory> {
    /// Session backed by an in-memory browser history at `origin`
    pub fn in_memory(entries: JournalEntries, origin: &str) -> Self {
        Self::new(entries, HistoryTracker::new(MemoryHistory::new(origin)))
    }

    pub fn current_url(&self) -> &str {
        self.history().current_url()
    }

    /// Browser back button. Returns false when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        let hash = self.tracker.sink_mut().back().map(str::to_owned);
        match hash {
            Some(hash) => {
                self.restore(&hash);
                true
            }
            None => false,
        }
    }

    /// Browser forward button. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        let hash = self.tracker.sink_mut().forward().map(str::to_owned);
        match hash {
            Some(hash) => {
                self.restore(&hash);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://127.0.0.1:5500";

    fn session() -> Session<MemoryHistory> {
        Session::in_memory(JournalEntries::bundled(), ORIGIN)
    }

    #[test]
    fn test_starts_home() {
        let session = session();
        assert_eq!(session.current(), &NavigationEntry::Home);
        assert_eq!(session.view_state().title, "Journal Entries");
        assert_eq!(session.view_state().body_class, "");
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.entries().len(), 10);
    }

    #[test]
    fn test_open_first_entry() {
        let mut session = session();
        let entry = session.open_entry(1).unwrap();
        assert_eq!(entry.title, "You like jazz?");

        assert!(session.current_url().contains("/#entry1"));
        assert_eq!(session.view_state().title, "Entry 1");
        assert_eq!(session.view_state().body_class, "single-entry");

        let selected = session.selected_entry().unwrap();
        assert_eq!(selected.date, "4/25/2021");
        assert_eq!(
            selected.image.as_ref().map(|i| i.alt.as_str()),
            Some("bee with sunglasses")
        );
    }

    #[test]
    fn test_user_flow_with_back_button() {
        let mut session = session();
        session.open_entry(1).unwrap();
        session.open_settings();

        assert!(session.current_url().contains("/#settings"));
        assert_eq!(session.view_state().title, "Settings");
        assert_eq!(session.view_state().body_class, "settings");

        assert!(session.back());
        assert!(session.current_url().ends_with("/#entry1"));
        assert_eq!(session.view_state().title, "Entry 1");

        assert!(session.back());
        assert_eq!(session.current_url(), "http://127.0.0.1:5500/");
        assert_eq!(session.view_state().title, "Journal Entries");
        assert_eq!(session.view_state().body_class, "");
        assert!(!session.back());

        // back/forward never touch the navigation log
        assert_eq!(session.log().len(), 3);

        session.open_entry(2).unwrap();
        assert!(session.current_url().ends_with("/#entry2"));
        assert_eq!(session.view_state().title, "Entry 2");
        assert_eq!(
            session.selected_entry().map(|e| e.title.as_str()),
            Some("Run, Forrest! Run!")
        );
        assert_eq!(session.log().len(), 4);
        assert!(!session.forward());
    }

    #[test]
    fn test_forward_restores_view() {
        let mut session = session();
        session.open_settings();
        session.back();
        assert!(session.forward());
        assert_eq!(session.current(), &NavigationEntry::Settings);
    }

    #[test]
    fn test_open_entry_returns_opened_record() {
        let mut session = session();
        let title = session.open_entry(2).unwrap().title.clone();

        assert_eq!(title, "Run, Forrest! Run!");
        assert_eq!(session.selected_entry().map(|e| e.title.clone()), Some(title));
        assert_eq!(session.current(), &NavigationEntry::entry(2usize));
        assert_eq!(session.log().len(), 2);
    }

    #[test]
    fn test_unknown_entry_is_not_pushed() {
        let mut session = session();
        let err = session.open_entry(42).unwrap_err();
        assert!(matches!(err, JournalError::EntryNotFound(42)));
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.current(), &NavigationEntry::Home);
    }

    #[test]
    fn test_go_home_pushes() {
        let mut session = session();
        session.open_entry(3).unwrap();
        assert_eq!(session.go_home().len(), 3);
        assert_eq!(session.current_url(), "http://127.0.0.1:5500/");
        assert!(session.selected_entry().is_none());
    }

    #[test]
    fn test_restore_unknown_hash_is_home() {
        let mut session = Session::new(JournalEntries::bundled(), HistoryTracker::default());
        session.open_settings();
        assert_eq!(session.restore("#nope"), &NavigationEntry::Home);
        assert_eq!(session.log().len(), 2);
    }
}
