//! Flat serializable engine state
//!
//! The persistence collaborator decides where and how to store this; the
//! engine only promises a plain, cycle-free layout. Pairings embed value
//! copies of their students, so the snapshot reloads without aliasing.

use crate::core::engine::UndoRecord;
use serde::{Deserialize, Serialize};
use shared::{Pairing, Student};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub students: Vec<Student>,
    pub pairings: Vec<Pairing>,
    pub history: Vec<UndoRecord>,
}

impl EngineSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
