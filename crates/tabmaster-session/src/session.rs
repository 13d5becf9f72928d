//! Session state
//!
//! Every operation that targets a tab promotes it to most recent. Operations
//! on a missing tab, or on the active tab when there is none, return an error
//! and leave the session untouched.

use serde::{Deserialize, Serialize};

use tabmaster_download::DownloadQueue;
use tabmaster_tabs::{TabId, TabManager};

use crate::error::SessionError;
use crate::recents::RecentTabs;
use crate::Result;

#[derive(Debug, Default)]
pub struct Session {
    tabs: TabManager,
    /// Always refers to a live tab when set
    active_tab_id: Option<TabId>,
    recents: RecentTabs,
    downloads: DownloadQueue,
}

/// Summary of the active tab, rendered as
/// `<id> <location> <back depth> <forward depth> <queued downloads>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTabStatus {
    pub tab_id: TabId,
    pub location: String,
    pub back_depth: usize,
    pub forward_depth: usize,
    pub queued_downloads: usize,
}

impl std::fmt::Display for ActiveTabStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.tab_id, self.location, self.back_depth, self.forward_depth, self.queued_downloads
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSnapshot {
    pub tab_id: TabId,
    pub current_location: Option<String>,
    /// Oldest entry first
    pub back_stack: Vec<String>,
    pub forward_stack: Vec<String>,
}

/// Point-in-time copy of a session, for callers that persist or display it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Ascending id order
    pub tabs: Vec<TabSnapshot>,
    pub download_queue: Vec<String>,
    pub active_tab_id: Option<TabId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tab, make it active and most recent. The tab is blank when
    /// `location` is `None`.
    pub fn create_tab(&mut self, location: Option<String>) -> TabId {
        let tab_id = self.tabs.create_tab(location).id;
        self.active_tab_id = Some(tab_id);
        self.recents.touch(tab_id);
        tab_id
    }

    /// Navigate the active tab
    pub fn open(&mut self, location: String) -> Result<()> {
        let tab_id = self.require_active()?;
        let tab = self.tabs.get_tab_mut(tab_id)?;
        tab.open(location);
        self.recents.touch(tab_id);
        Ok(())
    }

    /// Move the active tab back. Returns its resulting location.
    pub fn back(&mut self, steps: usize) -> Result<String> {
        let tab_id = self.require_active()?;
        let tab = self.tabs.get_tab_mut(tab_id)?;
        tab.go_back(steps);
        let location = tab.display_location().to_string();
        self.recents.touch(tab_id);
        Ok(location)
    }

    /// Move the active tab forward. Returns its resulting location.
    pub fn forward(&mut self, steps: usize) -> Result<String> {
        let tab_id = self.require_active()?;
        let tab = self.tabs.get_tab_mut(tab_id)?;
        tab.go_forward(steps);
        let location = tab.display_location().to_string();
        self.recents.touch(tab_id);
        Ok(location)
    }

    /// Make a live tab active
    pub fn switch_tab(&mut self, tab_id: TabId) -> Result<()> {
        self.tabs.get_tab(tab_id)?;
        self.active_tab_id = Some(tab_id);
        self.recents.touch(tab_id);

        tracing::debug!(tab_id = %tab_id, "Switched active tab");
        Ok(())
    }

    /// Close a live tab. If it was active, the lowest remaining id becomes
    /// active, or no tab if none remain.
    pub fn close_tab(&mut self, tab_id: TabId) -> Result<()> {
        self.tabs.close_tab(tab_id)?;
        self.recents.remove(tab_id);

        if self.active_tab_id == Some(tab_id) {
            self.active_tab_id = self.tabs.first_tab_id();
            tracing::debug!(
                closed = %tab_id,
                active = ?self.active_tab_id,
                "Closed active tab"
            );
        }

        Ok(())
    }

    pub fn queue_download(&mut self, token: String) {
        self.downloads.enqueue(token);
    }

    /// Complete up to `count` queued downloads
    pub fn advance_downloads(&mut self, count: usize) -> usize {
        self.downloads.advance(count)
    }

    pub fn describe_active(&self) -> Result<ActiveTabStatus> {
        let tab_id = self.require_active()?;
        let tab = self.tabs.get_tab(tab_id)?;
        let history = tab.history();

        Ok(ActiveTabStatus {
            tab_id,
            location: tab.display_location().to_string(),
            back_depth: history.back_depth(),
            forward_depth: history.forward_depth(),
            queued_downloads: self.downloads.len(),
        })
    }

    /// Up to `limit` live tab ids, most recently used first
    pub fn recents(&self, limit: usize) -> Vec<TabId> {
        self.recents.most_recent(limit)
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let tabs = self
            .tabs
            .tabs()
            .map(|tab| TabSnapshot {
                tab_id: tab.id,
                current_location: tab.location().map(str::to_string),
                back_stack: tab.history().back_stack().to_vec(),
                forward_stack: tab.history().forward_stack().to_vec(),
            })
            .collect();

        SessionSnapshot {
            tabs,
            download_queue: self.downloads.iter().map(str::to_string).collect(),
            active_tab_id: self.active_tab_id,
        }
    }

    fn require_active(&self) -> Result<TabId> {
        self.active_tab_id.ok_or(SessionError::NoActiveTab)
    }
}
