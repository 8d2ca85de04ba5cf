//! # Heading-Chain Tracking
//!
//! Maintains the stack of active headings while a structured document's
//! blocks are consumed, exposing the current chain (root to leaf) at any
//! point. Chain entries are strictly increasing in level: a new H2
//! replaces a sibling H2 and any deeper headings beneath it, but preserves
//! an ancestor H1.

/// Tracks the active heading chain for structured documents.
#[derive(Debug, Default)]
pub struct HeadingTracker {
    stack: Vec<(u8, String)>,
}

impl HeadingTracker {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Records a heading of the given level, popping every entry at the
    /// same or a deeper level first.
    pub fn observe(&mut self, level: u8, text: &str) {
        while self
            .stack
            .last()
            .is_some_and(|(entry_level, _)| *entry_level >= level)
        {
            self.stack.pop();
        }
        self.stack.push((level, text.to_string()));
    }

    /// The current chain of heading texts, root to leaf.
    pub fn chain(&self) -> Vec<String> {
        self.stack.iter().map(|(_, text)| text.clone()).collect()
    }
}
