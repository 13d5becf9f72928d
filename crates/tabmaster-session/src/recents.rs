//! Most-recently-used tab order
//!
//! A doubly linked list stored in an arena of slots, with a hash index from
//! tab id to slot. Promotion, insertion and removal are O(1); freed slots are
//! recycled so the arena never grows beyond the peak number of live tabs.

use std::collections::HashMap;

use tabmaster_tabs::TabId;

#[derive(Debug, Clone)]
struct Node {
    tab_id: TabId,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct RecentTabs {
    nodes: Vec<Node>,
    /// Slots whose node has been removed
    free: Vec<usize>,
    index: HashMap<TabId, usize>,
    /// Most recently used
    head: Option<usize>,
    /// Least recently used
    tail: Option<usize>,
}

impl RecentTabs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a tab as most recently used, inserting it if untracked
    pub fn touch(&mut self, tab_id: TabId) {
        if let Some(&slot) = self.index.get(&tab_id) {
            if self.head != Some(slot) {
                self.unlink(slot);
                self.push_front(slot);
                tracing::trace!(tab_id = %tab_id, "Promoted tab");
            }
            return;
        }

        let node = Node {
            tab_id,
            prev: None,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        self.index.insert(tab_id, slot);
        self.push_front(slot);
        tracing::trace!(tab_id = %tab_id, "Tracking tab");
    }

    /// Stop tracking a tab. No-op if it is not tracked.
    pub fn remove(&mut self, tab_id: TabId) {
        if let Some(slot) = self.index.remove(&tab_id) {
            self.unlink(slot);
            self.free.push(slot);
        }
    }

    /// Up to `limit` tab ids, most recent first
    pub fn most_recent(&self, limit: usize) -> Vec<TabId> {
        self.iter().take(limit).collect()
    }

    /// All tracked tab ids, most recent first
    pub fn iter(&self) -> impl Iterator<Item = TabId> + '_ {
        std::iter::successors(self.head, move |&slot| self.nodes[slot].next)
            .map(move |slot| self.nodes[slot].tab_id)
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = {
            let node = &self.nodes[slot];
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        let node = &mut self.nodes[slot];
        node.prev = None;
        node.next = None;
    }

    fn push_front(&mut self, slot: usize) {
        self.nodes[slot].prev = None;
        self.nodes[slot].next = self.head;

        match self.head {
            Some(h) => self.nodes[h].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }
}
