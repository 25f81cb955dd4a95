//! View state
//!
//! What the page chrome shows for the active navigation: the header text and
//! the class on `<body>`.

use serde::Serialize;

use crate::router::NavigationEntry;

/// Header title shown on the home view
pub const HOME_TITLE: &str = "Journal Entries";

/// Page chrome for one view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub title: String,
    pub body_class: &'static str,
}

impl ViewState {
    pub fn for_entry(entry: &NavigationEntry) -> Self {
        match entry {
            NavigationEntry::Home => Self {
                title: HOME_TITLE.to_string(),
                body_class: "",
            },
            NavigationEntry::Entry { id } => Self {
                title: format!("Entry {}", id),
                body_class: "single-entry",
            },
            NavigationEntry::Settings => Self {
                title: "Settings".to_string(),
                body_class: "settings",
            },
        }
    }
}

impl From<&NavigationEntry> for ViewState {
    fn from(entry: &NavigationEntry) -> Self {
        Self::for_entry(entry)
    }
}
