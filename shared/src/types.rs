//! Core shared types and identifiers

use crate::errors::{SharedError, SharedResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for roster students
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(Uuid);

impl StudentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidUuid { input: s.to_string() })
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for committed pairings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairingId(Uuid);

impl PairingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidUuid { input: s.to_string() })
    }
}

impl Default for PairingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PairingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Student cohort, ordered by seniority (B1 most junior, M2 most senior)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cohort {
    B1,
    B2,
    B3,
    M1,
    M2,
}

impl Cohort {
    /// All cohorts in seniority order
    pub const ALL: [Cohort; 5] = [Cohort::B1, Cohort::B2, Cohort::B3, Cohort::M1, Cohort::M2];

    /// Cohorts that can receive a godparent, in allocation priority order.
    /// Junior cohorts are served first so they are not starved as senior
    /// godparent slots get consumed.
    pub const GODCHILD_PRIORITY: [Cohort; 4] = [Cohort::B1, Cohort::B2, Cohort::B3, Cohort::M1];

    /// Which cohort a member of `self` may godparent.
    /// B1 godparents no one; every other cohort godparents the one below it.
    pub fn godchild_cohort(&self) -> Option<Cohort> {
        match self {
            Cohort::B1 => None,
            Cohort::B2 => Some(Cohort::B1),
            Cohort::B3 => Some(Cohort::B2),
            Cohort::M1 => Some(Cohort::B3),
            Cohort::M2 => Some(Cohort::M1),
        }
    }

    /// Which cohort godparents a member of `self` (inverse of the mapping).
    /// M2 has no cohort above it and cannot receive a godparent.
    pub fn godparent_cohort(&self) -> Option<Cohort> {
        match self {
            Cohort::B1 => Some(Cohort::B2),
            Cohort::B2 => Some(Cohort::B3),
            Cohort::B3 => Some(Cohort::M1),
            Cohort::M1 => Some(Cohort::M2),
            Cohort::M2 => None,
        }
    }

    /// Whether members of this cohort can act as godparents
    pub fn can_godparent(&self) -> bool {
        self.godchild_cohort().is_some()
    }

    /// Whether members of this cohort can receive a godparent
    pub fn can_have_godparent(&self) -> bool {
        self.godparent_cohort().is_some()
    }

    /// Parse a cohort token from an import row, rejecting unknown values
    pub fn parse(s: &str) -> SharedResult<Self> {
        Self::from_str(s).ok_or_else(|| SharedError::UnknownCohort { input: s.to_string() })
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "B1" => Some(Cohort::B1),
            "B2" => Some(Cohort::B2),
            "B3" => Some(Cohort::B3),
            "M1" => Some(Cohort::M1),
            "M2" => Some(Cohort::M2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cohort::B1 => "B1",
            Cohort::B2 => "B2",
            Cohort::B3 => "B3",
            Cohort::M1 => "M1",
            Cohort::M2 => "M2",
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pairing role a student currently occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairingStatus {
    Available,
    Godparent,
    Godchild,
}

/// A rostered student
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub last_name: String,
    pub first_name: String,
    /// Registration code from the school roster, when the import had one
    pub code: Option<String>,
    pub cohort: Cohort,
    pub status: PairingStatus,
    /// Number of godchildren currently assigned to this student (0 or 1)
    pub godchild_count: u8,
}

impl Student {
    /// Build a rostered student from a validated import row
    pub fn from_record(record: StudentRecord) -> Self {
        Self {
            id: StudentId::new(),
            last_name: record.last_name,
            first_name: record.first_name,
            code: record.code,
            cohort: record.cohort,
            status: PairingStatus::Available,
            godchild_count: 0,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.cohort)
    }
}

/// A validated import row, as produced by the import collaborator.
/// The collaborator rejects malformed rows before these reach the roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub last_name: String,
    pub first_name: String,
    pub code: Option<String>,
    pub cohort: Cohort,
}

/// A committed godparent/godchild pairing.
///
/// Holds value snapshots of both students taken at commit time, so history
/// stays displayable even after a roster entry is removed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub id: PairingId,
    pub godparent: Student,
    pub godchild: Student,
    pub created_at: DateTime<Utc>,
}

/// Flat tabular view of a pairing for display and export collaborators
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub godchild_last_name: String,
    pub godchild_first_name: String,
    pub godchild_cohort: Cohort,
    pub godparent_last_name: String,
    pub godparent_first_name: String,
    pub godparent_cohort: Cohort,
    pub created_at: DateTime<Utc>,
}

impl From<&Pairing> for ExportRow {
    fn from(pairing: &Pairing) -> Self {
        Self {
            godchild_last_name: pairing.godchild.last_name.clone(),
            godchild_first_name: pairing.godchild.first_name.clone(),
            godchild_cohort: pairing.godchild.cohort,
            godparent_last_name: pairing.godparent.last_name.clone(),
            godparent_first_name: pairing.godparent.first_name.clone(),
            godparent_cohort: pairing.godparent.cohort,
            created_at: pairing.created_at,
        }
    }
}
