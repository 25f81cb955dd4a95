//! Navigation log
//!
//! Append-only, chronologically ordered record of navigations for one page
//! session. Nothing here removes or rewrites entries.

use serde::Serialize;

use super::entry::NavigationEntry;

/// Ordered history of view transitions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NavigationLog {
    entries: Vec<NavigationEntry>,
}

impl NavigationLog {
    /// An empty log (baseline size 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// A log seeded with the implicit home entry of a freshly loaded page
    pub fn with_home() -> Self {
        Self {
            entries: vec![NavigationEntry::Home],
        }
    }

    /// Append one navigation and return the updated log
    pub fn push(&mut self, entry: NavigationEntry) -> &Self {
        self.entries.push(entry);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent navigation
    pub fn last(&self) -> Option<&NavigationEntry> {
        self.entries.last()
    }

    pub fn get(&self, index: usize) -> Option<&NavigationEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavigationEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[NavigationEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a NavigationLog {
    type Item = &'a NavigationEntry;
    type IntoIter = std::slice::Iter<'a, NavigationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baselines() {
        assert!(NavigationLog::new().is_empty());

        let log = NavigationLog::with_home();
        assert_eq!(log.len(), 1);
        assert_eq!(log.last(), Some(&NavigationEntry::Home));
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut log = NavigationLog::with_home();
        log.push(NavigationEntry::entry("1"));
        let len = log.push(NavigationEntry::Settings).len();

        assert_eq!(len, 3);
        assert_eq!(
            log.as_slice(),
            &[
                NavigationEntry::Home,
                NavigationEntry::entry("1"),
                NavigationEntry::Settings,
            ]
        );
        assert_eq!(log.get(1), Some(&NavigationEntry::entry("1")));
        assert_eq!((&log).into_iter().count(), 3);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut log = NavigationLog::new();
        log.push(NavigationEntry::Settings);
        assert_eq!(serde_json::to_string(&log).unwrap(), r#"[{"kind":"settings"}]"#);
    }
}
