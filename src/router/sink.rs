//! History sinks
//!
//! The side-effecting half of a navigation: telling a history backend that a
//! new state was pushed. The browser implementation lives in the UI crate;
//! this module provides the backends usable outside a browser.

use super::entry::NavigationEntry;
use super::error::RouterResult;

/// A backend that records pushed history states
pub trait HistorySink {
    /// Push a new state whose URL ends in `hash` (empty for the home view)
    fn push_state(&mut self, entry: &NavigationEntry, hash: &str) -> RouterResult<()>;
}

impl<S: HistorySink + ?Sized> HistorySink for &mut S {
    fn push_state(&mut self, entry: &NavigationEntry, hash: &str) -> RouterResult<()> {
        (**self).push_state(entry, hash)
    }
}

/// Sink that discards every push
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHistory;

impl HistorySink for NoopHistory {
    fn push_state(&mut self, _entry: &NavigationEntry, _hash: &str) -> RouterResult<()> {
        Ok(())
    }
}

/// One slot of an in-memory session history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryState {
    /// State object pushed with the URL; `None` for the initially loaded page
    pub state: Option<NavigationEntry>,
    pub url: String,
}

/// In-memory emulation of a browser session history
///
/// Behaves like `window.history`: pushing drops any forward entries, and
/// back/forward move a cursor without changing the stack.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    origin: String,
    stack: Vec<HistoryState>,
    index: usize,
}

impl MemoryHistory {
    /// Start with `origin` loaded as the only history entry
    pub fn new(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/').to_string();
        let initial = HistoryState {
            state: None,
            url: format!("{}/", origin),
        };
        Self {
            origin,
            stack: vec![initial],
            index: 0,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Number of slots in the session history
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn current(&self) -> &HistoryState {
        &self.stack[self.index]
    }

    pub fn current_url(&self) -> &str {
        &self.current().url
    }

    /// Hash of the current URL including `#`, or empty
    pub fn current_hash(&self) -> &str {
        let url = self.current_url();
        url.find('#').map(|i| &url[i..]).unwrap_or("")
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.stack.len()
    }

    /// Move back one slot, returning the new current hash
    pub fn back(&mut self) -> Option<&str> {
        if self.can_go_back() {
            self.index -= 1;
            Some(self.current_hash())
        } else {
            None
        }
    }

    /// Move forward one slot, returning the new current hash
    pub fn forward(&mut self) -> Option<&str> {
        if self.can_go_forward() {
            self.index += 1;
            Some(self.current_hash())
        } else {
            None
        }
    }
}

impl HistorySink for MemoryHistory {
    fn push_state(&mut self, entry: &NavigationEntry, hash: &str) -> RouterResult<()> {
        self.stack.truncate(self.index + 1);
        self.stack.push(HistoryState {
            state: Some(entry.clone()),
            url: format!("{}/{}", self.origin, hash),
        });
        self.index = self.stack.len() - 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://127.0.0.1:5500";

    #[test]
    fn test_initial_state() {
        let history = MemoryHistory::new("http://127.0.0.1:5500/");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_url(), "http://127.0.0.1:5500/");
        assert_eq!(history.current_hash(), "");
        assert!(history.current().state.is_none());
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = MemoryHistory::new(ORIGIN);
        history.push_state(&NavigationEntry::entry("1"), "#entry1").unwrap();
        history.push_state(&NavigationEntry::Settings, "#settings").unwrap();

        assert_eq!(history.current_url(), "http://127.0.0.1:5500/#settings");
        assert_eq!(history.back(), Some("#entry1"));
        assert_eq!(history.back(), Some(""));
        assert_eq!(history.back(), None);
        assert!(history.can_go_forward());
        assert_eq!(history.forward(), Some("#entry1"));
        assert_eq!(history.current().state, Some(NavigationEntry::entry("1")));
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = MemoryHistory::new(ORIGIN);
        history.push_state(&NavigationEntry::entry("1"), "#entry1").unwrap();
        history.push_state(&NavigationEntry::Settings, "#settings").unwrap();
        history.back();
        history.push_state(&NavigationEntry::entry("2"), "#entry2").unwrap();

        assert_eq!(history.len(), 3);
        assert!(!history.can_go_forward());
        assert_eq!(history.current_hash(), "#entry2");
    }

    #[test]
    fn test_noop_accepts_everything() {
        let mut sink = NoopHistory;
        assert!(sink.push_state(&NavigationEntry::Home, "").is_ok());
    }
}
