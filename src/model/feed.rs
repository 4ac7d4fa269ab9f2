//! Fact Feed Model
//!
//! The accumulating container of the cat-fact action. Every response adds a
//! node at the front; nodes are never reused or edited.

use std::collections::VecDeque;
use std::time::Instant;

use chrono::{DateTime, Local};

/// One rendered fact
#[derive(Clone, Debug)]
pub struct FactNode {
    /// Sequence number of the request that produced this node
    pub seq: u64,
    pub text: String,
    /// The response decoded but carried no `fact`
    pub missing: bool,
    pub fetched_at: DateTime<Local>,
    pub received: Instant,
}

impl FactNode {
    pub fn new(seq: u64, text: String) -> Self {
        Self {
            seq,
            text,
            missing: false,
            fetched_at: Local::now(),
            received: Instant::now(),
        }
    }

    pub fn missing(seq: u64) -> Self {
        Self {
            missing: true,
            ..Self::new(seq, crate::logic::formatting::MISSING_FACT_TEXT.to_string())
        }
    }

    /// Whether the node is still inside its fade-in window
    pub fn is_fresh(&self) -> bool {
        crate::logic::ui::should_highlight_fact(self.received.elapsed().as_millis())
    }
}

/// Newest-first list of fact nodes
#[derive(Clone, Debug, Default)]
pub struct FactFeed {
    nodes: VecDeque<FactNode>,
    /// Index of the first visible node
    pub scroll: usize,
}

impl FactFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert before every previously rendered node
    pub fn prepend(&mut self, node: FactNode) {
        self.nodes.push_front(node);
        // Keep the viewport anchored on whatever the user was reading
        if self.scroll > 0 {
            self.scroll += 1;
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &FactNode> {
        self.nodes.iter()
    }

    pub fn newest(&self) -> Option<&FactNode> {
        self.nodes.front()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.nodes.len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
