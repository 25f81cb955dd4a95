//! Navigation entries and their URL hash form
//!
//! This module defines the records stored in the navigation log:
//! - `ViewKind`: which of the three screens is shown
//! - `EntryId`: the identifier attached to an entry navigation
//! - `NavigationEntry`: one recorded navigation, convertible to and from a
//!   URL hash fragment

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{all_consuming, map, rest},
    sequence::preceded,
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The navigable screens of the application
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// The list of all journal entries
    Home,
    /// A single journal entry
    Entry,
    /// The settings page
    Settings,
}

impl ViewKind {
    /// Classify a kind string. Anything unrecognized is `Home`.
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "entry" => ViewKind::Entry,
            "settings" => ViewKind::Settings,
            _ => ViewKind::Home,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Home => write!(f, "home"),
            ViewKind::Entry => write!(f, "entry"),
            ViewKind::Settings => write!(f, "settings"),
        }
    }
}

/// Identifier of the journal entry opened by an entry navigation
///
/// Kept exactly as supplied by the caller. Numeric ids are 1-based entry
/// numbers, see [`EntryId::number`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 1-based entry number, if the id is a positive integer
    pub fn number(&self) -> Option<usize> {
        self.0.parse::<usize>().ok().filter(|n| *n > 0)
    }
}

impl From<usize> for EntryId {
    fn from(number: usize) -> Self {
        Self(number.to_string())
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recorded navigation
///
/// Serialized as `{"kind":"entry","id":"1"}`, which is also the state object
/// pushed to the browser history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavigationEntry {
    Home,
    Entry { id: EntryId },
    Settings,
}

impl NavigationEntry {
    /// Entry navigation for a given id
    pub fn entry(id: impl Into<EntryId>) -> Self {
        NavigationEntry::Entry { id: id.into() }
    }

    /// Build an entry from a kind string and an optional identifier.
    ///
    /// The identifier only matters for `"entry"`; a missing one becomes an
    /// empty id. Unrecognized kinds fall through to `Home`.
    pub fn from_kind(kind: &str, identifier: Option<&str>) -> Self {
        match ViewKind::from_kind(kind) {
            ViewKind::Entry => NavigationEntry::Entry {
                id: EntryId::new(identifier.unwrap_or_default()),
            },
            ViewKind::Settings => NavigationEntry::Settings,
            ViewKind::Home => NavigationEntry::Home,
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            NavigationEntry::Home => ViewKind::Home,
            NavigationEntry::Entry { .. } => ViewKind::Entry,
            NavigationEntry::Settings => ViewKind::Settings,
        }
    }

    /// Entry id, for entry navigations
    pub fn id(&self) -> Option<&EntryId> {
        match self {
            NavigationEntry::Entry { id } => Some(id),
            _ => None,
        }
    }

    /// URL hash fragment including the leading `#`; empty for home
    pub fn hash(&self) -> String {
        match self {
            NavigationEntry::Home => String::new(),
            NavigationEntry::Entry { id } => format!("#entry{}", urlencoding::encode(id.as_str())),
            NavigationEntry::Settings => "#settings".to_string(),
        }
    }

    /// Parse a hash fragment, with or without the leading `#`.
    ///
    /// Anything that is neither `settings` nor `entry<id>` is `Home`.
    pub fn from_hash(hash: &str) -> Self {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        match parse_fragment(fragment) {
            Ok((_, entry)) => entry,
            Err(_) => NavigationEntry::Home,
        }
    }
}

impl fmt::Display for NavigationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationEntry::Entry { id } => write!(f, "entry({})", id),
            other => write!(f, "{}", other.kind()),
        }
    }
}

fn parse_fragment(input: &str) -> IResult<&str, NavigationEntry> {
    alt((
        map(all_consuming(tag("settings")), |_| NavigationEntry::Settings),
        map(preceded(tag("entry"), rest), |id: &str| NavigationEntry::Entry {
            id: decode_id(id),
        }),
    ))(input)
}

fn decode_id(raw: &str) -> EntryId {
    match urlencoding::decode(raw) {
        Ok(decoded) => EntryId::new(decoded.into_owned()),
        Err(_) => EntryId::new(raw),
    }
}
