//! Tessera Core - Foundational types for the Tessera scene editor
//!
//! This crate provides the types that all other Tessera crates depend on:
//! - `ObjectId` / `IdAllocator` - Scene object identifiers
//! - Reserved component data keys shared with the engine
//! - Error types and Result alias

mod error;
mod id;

pub use error::{Result, TesseraError};
pub use id::{IdAllocator, ObjectId};

/// Component data key holding the component's globally unique identifier
pub const UUID_KEY: &str = "uuid";

/// Component data key holding engine-owned scratch state
pub const STATE_KEY: &str = "state";

/// Returns true for component data keys the editor never treats as properties
pub fn is_reserved_key(key: &str) -> bool {
    key == UUID_KEY || key == STATE_KEY
}
