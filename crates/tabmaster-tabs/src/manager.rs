//! Tab Manager
//!
//! Owns the live tab collection and the id counter.

use std::collections::BTreeMap;

use crate::error::TabError;
use crate::tab::{Tab, TabId};
use crate::Result;

#[derive(Debug)]
pub struct TabManager {
    /// Live tabs, iterated in ascending id order
    tabs: BTreeMap<TabId, Tab>,
    /// Next id to hand out
    next_id: u64,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a new tab with the next sequential id, blank when `location`
    /// is `None`
    pub fn create_tab(&mut self, location: Option<String>) -> &mut Tab {
        let id = TabId(self.next_id);
        self.next_id += 1;

        tracing::debug!(tab_id = %id, location = ?location, "Created tab");

        self.tabs.entry(id).or_insert_with(|| match location {
            Some(location) => Tab::with_location(id, location),
            None => Tab::new(id),
        })
    }

    pub fn get_tab(&self, tab_id: TabId) -> Result<&Tab> {
        self.tabs.get(&tab_id).ok_or(TabError::NotFound(tab_id))
    }

    pub fn get_tab_mut(&mut self, tab_id: TabId) -> Result<&mut Tab> {
        self.tabs.get_mut(&tab_id).ok_or(TabError::NotFound(tab_id))
    }

    /// Remove a tab from the collection
    pub fn close_tab(&mut self, tab_id: TabId) -> Result<Tab> {
        let tab = self.tabs.remove(&tab_id).ok_or(TabError::NotFound(tab_id))?;
        tracing::debug!(tab_id = %tab_id, "Closed tab");
        Ok(tab)
    }

    /// Lowest live id, used as the fallback when the active tab closes
    pub fn first_tab_id(&self) -> Option<TabId> {
        self.tabs.keys().next().copied()
    }

    /// Live tabs in ascending id order
    pub fn tabs(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.values()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}
