use serde::{Deserialize, Serialize};

/// Hands out entity ids: positive, strictly increasing, never reused.
///
/// One allocator lives inside each [`crate::environment::Environment`];
/// ids therefore restart only when a new simulation is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAllocator {
    last: u64,
}

impl Default for IdentityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityAllocator {
    /// First call to [`next_id`](Self::next_id) yields 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Continues a sequence whose highest issued id is `last`.
    #[must_use]
    pub const fn resume_after(last: u64) -> Self {
        Self { last }
    }

    pub fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

impl Iterator for IdentityAllocator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_id())
    }
}
