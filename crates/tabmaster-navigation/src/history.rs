//! Back/forward history for a single tab

use serde::{Deserialize, Serialize};

/// Current location plus the two navigation stacks.
///
/// Both stacks keep their most recent push at the end. `open` always empties
/// the forward stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationHistory {
    current: Option<String>,
    back: Vec<String>,
    forward: Vec<String>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a new location
    pub fn open(&mut self, location: String) {
        if let Some(previous) = self.current.take() {
            self.back.push(previous);
        }
        self.current = Some(location);
        self.forward.clear();
    }

    /// Step back at most `steps` times, stopping early once the back stack is
    /// exhausted. Returns the resulting location.
    pub fn go_back(&mut self, steps: usize) -> Option<&str> {
        Self::shift(&mut self.current, &mut self.back, &mut self.forward, steps);
        self.current()
    }

    /// Mirror of [`go_back`](Self::go_back) using the forward stack.
    pub fn go_forward(&mut self, steps: usize) -> Option<&str> {
        Self::shift(&mut self.current, &mut self.forward, &mut self.back, steps);
        self.current()
    }

    fn shift(
        current: &mut Option<String>,
        from: &mut Vec<String>,
        to: &mut Vec<String>,
        steps: usize,
    ) {
        for _ in 0..steps {
            let Some(next) = from.pop() else {
                break;
            };
            if let Some(previous) = current.replace(next) {
                to.push(previous);
            }
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn back_depth(&self) -> usize {
        self.back.len()
    }

    pub fn forward_depth(&self) -> usize {
        self.forward.len()
    }

    /// Back stack, oldest entry first
    pub fn back_stack(&self) -> &[String] {
        &self.back
    }

    /// Forward stack, oldest push first
    pub fn forward_stack(&self) -> &[String] {
        &self.forward
    }
}
