//! Shared types for the godparent pairing system
//!
//! Contains the domain vocabulary used by the allocation engine and by
//! external collaborators (import, display, export, persistence).
//! Component-internal types stay in their respective crates.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
