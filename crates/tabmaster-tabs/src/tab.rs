//! Tab data structure

use serde::{Deserialize, Serialize};
use tabmaster_navigation::NavigationHistory;

/// Shown for a tab that has not navigated anywhere yet
pub const BLANK_LOCATION: &str = "about:blank";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u64);

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Sequential identifier
    pub id: TabId,
    history: NavigationHistory,
}

impl Tab {
    /// Create a tab that has not navigated anywhere yet
    pub fn new(id: TabId) -> Self {
        Self {
            id,
            history: NavigationHistory::new(),
        }
    }

    pub fn with_location(id: TabId, location: String) -> Self {
        let mut tab = Self::new(id);
        tab.open(location);
        tab
    }

    /// Navigate to a new location, discarding forward history
    pub fn open(&mut self, location: String) {
        tracing::trace!(tab_id = %self.id, location = %location, "Opening location");
        self.history.open(location);
    }

    /// Go back at most `steps` entries
    pub fn go_back(&mut self, steps: usize) -> Option<&str> {
        self.history.go_back(steps)
    }

    /// Go forward at most `steps` entries
    pub fn go_forward(&mut self, steps: usize) -> Option<&str> {
        self.history.go_forward(steps)
    }

    pub fn location(&self) -> Option<&str> {
        self.history.current()
    }

    /// Current location, or `about:blank` for a tab with none
    pub fn display_location(&self) -> &str {
        self.location().unwrap_or(BLANK_LOCATION)
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab() {
        let tab = Tab::with_location(TabId(1), "a".to_string());
        assert_eq!(tab.location(), Some("a"));
        assert_eq!(tab.history().back_depth(), 0);
        assert_eq!(tab.history().forward_depth(), 0);
    }

    #[test]
    fn test_blank_tab() {
        let mut tab = Tab::new(TabId(3));
        assert!(tab.location().is_none());
        assert_eq!(tab.display_location(), "about:blank");
        assert_eq!(tab.go_back(1), None);

        // No prior location, so nothing is pushed
        tab.open("a".to_string());
        assert_eq!(tab.history().back_depth(), 0);
    }

    #[test]
    fn test_navigation() {
        let mut tab = Tab::with_location(TabId(1), "a".to_string());
        tab.open("b".to_string());
        tab.open("c".to_string());

        assert_eq!(tab.go_back(1), Some("b"));
        assert_eq!(tab.go_forward(5), Some("c"));
        assert_eq!(tab.history().back_stack(), ["a", "b"]);
    }
}
