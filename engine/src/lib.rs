//! Pairing allocation engine for the godparent ceremony
//!
//! This library provides the stateful core that selects eligible candidates,
//! enforces the strict one-to-one godparent/godchild relationship under the
//! fixed cohort mapping rule, and supports undo and full reset. Import
//! parsing, presentation, and persistence mechanics live with external
//! collaborators; the engine exposes a flat serializable snapshot instead.

pub mod core;
pub mod error;
pub mod state;
pub mod traits;

// Re-export commonly used types
pub use self::core::{CeremonyStats, PairingEngine, Roster, UndoRecord};
pub use error::{EngineError, EngineResult};
pub use state::EngineSnapshot;
pub use traits::{RandomSource, SeededSource, ThreadRngSource};
