//! Download queue

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DownloadQueue {
    pending: VecDeque<String>,
}

impl DownloadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token to the back of the queue
    pub fn enqueue(&mut self, token: String) {
        self.pending.push_back(token);
    }

    /// Complete up to `count` downloads from the front of the queue.
    /// Returns how many were actually removed.
    pub fn advance(&mut self, count: usize) -> usize {
        let removed = count.min(self.pending.len());
        self.pending.drain(..removed);

        tracing::trace!(
            requested = count,
            removed,
            remaining = self.pending.len(),
            "Advanced download queue"
        );

        removed
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending tokens, front of the queue first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }
}
