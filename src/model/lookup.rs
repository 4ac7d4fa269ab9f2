//! Gender Lookup Model
//!
//! The input field plus the replace-in-place result container.

/// What the single result child currently shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupNodeKind {
    Answer,
    Guidance,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupNode {
    pub text: String,
    pub kind: LookupNodeKind,
}

#[derive(Clone, Debug, Default)]
pub struct LookupModel {
    /// Current value of the name input field
    pub input: String,

    /// The container's single child (None until the first lookup)
    pub result: Option<LookupNode>,

    /// Sequence of the newest lookup written into `result`
    applied_seq: u64,
}

impl LookupModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a response for request `seq` may still replace the result
    ///
    /// A lookup answered after a newer one has been shown is stale.
    pub fn accepts(&self, seq: u64) -> bool {
        seq >= self.applied_seq
    }

    /// Replace the result child, unless `seq` is stale
    ///
    /// Returns whether the container changed.
    pub fn apply(&mut self, seq: u64, node: LookupNode) -> bool {
        if !self.accepts(seq) {
            return false;
        }
        self.applied_seq = seq;
        self.result = Some(node);
        true
    }

    pub fn applied_seq(&self) -> u64 {
        self.applied_seq
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }
}
