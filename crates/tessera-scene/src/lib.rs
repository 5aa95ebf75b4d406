//! Tessera Scene - Scene document model and engine serialization
//!
//! This crate owns the in-memory scene (a forest of objects plus a flat
//! list of static components), the structural mutations the editor
//! performs on it, and the JSON envelope exchanged with the engine.

mod clean;
mod component;
mod document;
mod edit;
mod format;
mod loader;
mod node;
mod preview;
mod saver;
mod session;

pub use clean::{clean, clean_in_place, has_empty_strings};
pub use component::{initial_state, ColliderInstance, ColliderShape, ComponentInstance};
pub use document::{Nodes, SceneDocument};
pub use edit::{apply_edit, PropertyEdit};
pub use format::{RawDocument, SerializedDocument};
pub use loader::{parse_document, read_document, LoadedScene};
pub use node::{SceneObjectNode, DEFAULT_OBJECT_NAME};
pub use preview::PreviewHost;
pub use saver::{export_document, save_document, write_document};
pub use session::{EditSession, LoadTicket, Selection};
