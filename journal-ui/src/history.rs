//! Browser History Sink
//!
//! Pushes navigations onto `window.history`.

use journal::{HistorySink, NavigationEntry, RouterError, RouterResult};
use wasm_bindgen::JsValue;

/// History sink backed by the browser's History API
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHistory;

impl HistorySink for BrowserHistory {
    fn push_state(&mut self, entry: &NavigationEntry, hash: &str) -> RouterResult<()> {
        let window =
            web_sys::window().ok_or_else(|| RouterError::Unavailable("no window".to_string()))?;
        let history = window
            .history()
            .map_err(|e| RouterError::Unavailable(format!("{:?}", e)))?;
        let pathname = window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string());

        let state = JsValue::from_str(&history_state(entry)?);
        history
            .push_state_with_url(&state, "", Some(&history_url(&pathname, hash)))
            .map_err(|e| RouterError::PushState(format!("{:?}", e)))
    }
}

/// Hash of the URL currently loaded, including `#`
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// State object pushed alongside the URL, as JSON
fn history_state(entry: &NavigationEntry) -> RouterResult<String> {
    Ok(serde_json::to_string(entry)?)
}

/// URL pushed for a navigation: current path plus the new hash
fn history_url(pathname: &str, hash: &str) -> String {
    let path = if pathname.is_empty() { "/" } else { pathname };
    format!("{}{}", path, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_url() {
        assert_eq!(history_url("/", "#entry1"), "/#entry1");
        assert_eq!(history_url("/journal/index.html", "#settings"), "/journal/index.html#settings");
        assert_eq!(history_url("", ""), "/");
    }

    #[test]
    fn test_history_state() {
        assert_eq!(
            history_state(&NavigationEntry::entry(1usize)).unwrap(),
            r#"{"kind":"entry","id":"1"}"#
        );
        assert_eq!(history_state(&NavigationEntry::Home).unwrap(), r#"{"kind":"home"}"#);
    }
}
