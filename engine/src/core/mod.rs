//! Core business logic modules
//!
//! Pure in-memory state and allocation logic with no I/O dependencies.
//! All operations are deterministic given their source of randomness.

pub mod engine;
pub mod roster;
pub mod stats;

pub use engine::{PairingEngine, UndoRecord};
pub use roster::Roster;
pub use stats::CeremonyStats;
