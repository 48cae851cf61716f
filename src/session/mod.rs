//! Session lifecycle: state, engine, read model and events.
//!
//! ## Key Types
//!
//! - `Session`: One deck and its progress counters
//! - `MemoryEngine`: Owns the active session and its deferred tasks
//! - `SessionSnapshot`: Cheap read model for rendering
//! - `EngineEvent`: Change notifications for reactive views

mod engine;
mod events;
mod snapshot;
mod state;

pub use engine::MemoryEngine;
pub use events::{EngineEvent, EVENT_BACKLOG};
pub use snapshot::SessionSnapshot;
pub use state::Session;
