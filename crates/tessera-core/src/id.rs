//! Scene object identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node in the scene hierarchy.
///
/// Written to the document as a plain integer. Uniqueness across the forest
/// is maintained by the document's [`IdAllocator`], not by this type.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Create an ObjectId from a raw value (for deserialization/testing)
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ObjectId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Monotonic id source owned by a single document.
///
/// Ids are never reused within a session, even after the node that held
/// one is deleted. Once `u64::MAX` has been seen the allocator is exhausted.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: Option<u64>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Hand out the next unused id, or `None` when the id space is used up
    pub fn allocate(&mut self) -> Option<ObjectId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(ObjectId(id))
    }

    /// Make sure every future id is strictly greater than `id` (for loading documents)
    pub fn ensure_above(&mut self, id: ObjectId) {
        if let Some(next) = self.next {
            if next <= id.0 {
                self.next = id.0.checked_add(1);
            }
        }
    }

    /// The id the next call to `allocate` will return
    pub fn peek(&self) -> Option<ObjectId> {
        self.next.map(ObjectId)
    }
}
