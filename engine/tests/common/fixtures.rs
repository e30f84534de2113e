//! Test fixtures and data for engine tests
//!
//! This module provides consistent rosters and records used across all
//! test suites.

use shared::{Cohort, StudentRecord};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Build a validated import row
    pub fn record(last_name: &str, first_name: &str, cohort: Cohort) -> StudentRecord {
        StudentRecord {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            code: None,
            cohort,
        }
    }

    /// Import row carrying a registration code
    pub fn record_with_code(last_name: &str, first_name: &str, code: &str, cohort: Cohort) -> StudentRecord {
        StudentRecord {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            code: Some(code.to_string()),
            cohort,
        }
    }

    /// Minimal pairable roster: one B1 godchild, one B2 godparent
    pub fn minimal_pair() -> Vec<StudentRecord> {
        vec![
            Self::record("Martin", "Alice", Cohort::B1),
            Self::record("Bernard", "Bob", Cohort::B2),
        ]
    }

    /// Two B1 candidates competing for a single B2 godparent
    pub fn contended_godparent() -> Vec<StudentRecord> {
        vec![
            Self::record("Martin", "Alice", Cohort::B1),
            Self::record("Petit", "Ann", Cohort::B1),
            Self::record("Bernard", "Bob", Cohort::B2),
        ]
    }

    /// One student per cohort, B1 through M2
    pub fn chain_roster() -> Vec<StudentRecord> {
        vec![
            Self::record("Martin", "Alice", Cohort::B1),
            Self::record("Bernard", "Bob", Cohort::B2),
            Self::record("Durand", "Carol", Cohort::B3),
            Self::record("Moreau", "Max", Cohort::M1),
            Self::record("Laurent", "Zoe", Cohort::M2),
        ]
    }

    /// Two students per cohort, B1 through M2
    pub fn full_roster() -> Vec<StudentRecord> {
        vec![
            Self::record("Martin", "Alice", Cohort::B1),
            Self::record("Petit", "Ann", Cohort::B1),
            Self::record("Bernard", "Bob", Cohort::B2),
            Self::record("Roux", "Bruno", Cohort::B2),
            Self::record("Durand", "Carol", Cohort::B3),
            Self::record("Girard", "Chloe", Cohort::B3),
            Self::record("Moreau", "Max", Cohort::M1),
            Self::record("Fontaine", "Mila", Cohort::M1),
            Self::record("Laurent", "Zoe", Cohort::M2),
            Self::record("Chevalier", "Zack", Cohort::M2),
        ]
    }
}
