//! Global Application State
//!
//! The page session plus a reactive signal for the active view.

use journal::{
    HistoryTracker, JournalEntries, JournalEntry, JournalResult, NavigationEntry, Session,
    ViewState,
};
use leptos::*;

use crate::history::BrowserHistory;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Entries, navigation log and browser history for this page load
    pub session: StoredValue<Session<BrowserHistory>>,
    /// Currently shown view
    pub current: RwSignal<NavigationEntry>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let session = Session::new(
        JournalEntries::bundled(),
        HistoryTracker::new(BrowserHistory),
    );
    let current = session.current().clone();

    provide_context(GlobalState {
        session: store_value(session),
        current: create_rw_signal(current),
    });
}

impl GlobalState {
    /// Open an entry by its 1-based number
    pub fn open_entry(&self, number: usize) -> JournalResult<()> {
        let mut result = Ok(());
        self.session.update_value(|session| {
            result = session.open_entry(number).map(|_| ());
        });
        self.sync();
        result
    }

    pub fn open_settings(&self) {
        self.session.update_value(|session| {
            session.open_settings();
        });
        self.sync();
    }

    pub fn go_home(&self) {
        self.session.update_value(|session| {
            session.go_home();
        });
        self.sync();
    }

    /// Show the view named by a URL hash after back/forward
    pub fn restore(&self, hash: &str) {
        self.session.update_value(|session| {
            session.restore(hash);
        });
        self.sync();
    }

    pub fn entries(&self) -> JournalEntries {
        self.session.with_value(|session| session.entries().clone())
    }

    pub fn selected_entry(&self) -> Option<JournalEntry> {
        let number = self.current.get().id().and_then(|id| id.number())?;
        self.session
            .with_value(|session| session.entries().get(number).cloned())
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::for_entry(&self.current.get())
    }

    fn sync(&self) {
        let current = self.session.with_value(|session| session.current().clone());
        self.current.set(current);
    }
}
