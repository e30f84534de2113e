//! Ceremony progress statistics

use serde::{Deserialize, Serialize};
use shared::{Cohort, PairingStatus, Student};
use std::collections::HashMap;

/// Counters shown by the display collaborator during the ceremony
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeremonyStats {
    pub total_students: usize,
    pub total_pairings: usize,
    /// Available students still waiting for a godparent, per godchild-capable cohort
    pub remaining_godchildren: HashMap<Cohort, usize>,
    /// Godparent pool size per godparent-capable cohort, regardless of assignment
    pub godparent_pool: HashMap<Cohort, usize>,
}

impl CeremonyStats {
    pub fn compute(students: &[Student], total_pairings: usize) -> Self {
        let mut remaining_godchildren = HashMap::new();
        let mut godparent_pool = HashMap::new();

        for cohort in Cohort::ALL {
            if cohort.can_have_godparent() {
                let remaining = students
                    .iter()
                    .filter(|s| s.cohort == cohort && s.status == PairingStatus::Available)
                    .count();
                remaining_godchildren.insert(cohort, remaining);
            }
            if cohort.can_godparent() {
                let pool = students.iter().filter(|s| s.cohort == cohort).count();
                godparent_pool.insert(cohort, pool);
            }
        }

        Self {
            total_students: students.len(),
            total_pairings,
            remaining_godchildren,
            godparent_pool,
        }
    }
}
