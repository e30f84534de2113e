//! Pairing allocation engine
//!
//! Owns the roster, the committed pairing sequence, and the undo history,
//! and enforces the cohort mapping rule and the strict one-godchild-per-
//! godparent invariant on every commit path.

use crate::core::roster::Roster;
use crate::core::stats::CeremonyStats;
use crate::error::{EngineError, EngineResult};
use crate::state::EngineSnapshot;
use crate::traits::{RandomSource, ThreadRngSource};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::{Cohort, ExportRow, Pairing, PairingId, PairingStatus, Student, StudentId, StudentRecord};
use tracing::{debug, info};

/// Pre-commit status of the two students touched by a pairing.
///
/// One record is pushed per commit and popped per undo; the stacks stay in
/// lockstep with the pairing sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UndoRecord {
    pub godparent_id: StudentId,
    pub godparent_status: PairingStatus,
    pub godparent_count: u8,
    pub godchild_id: StudentId,
    pub godchild_status: PairingStatus,
    pub godchild_count: u8,
}

/// Stateful allocation engine for the godparent ceremony.
///
/// All operations run to completion on `&mut self`; callers in threaded
/// contexts wrap the engine in their own lock.
pub struct PairingEngine {
    roster: Roster,
    pairings: Vec<Pairing>,
    history: Vec<UndoRecord>,
    random: Box<dyn RandomSource>,
}

impl PairingEngine {
    /// Create an empty engine backed by the thread-local RNG
    pub fn new() -> Self {
        Self::with_random_source(Box::new(ThreadRngSource))
    }

    /// Create an empty engine with an injected source of randomness
    pub fn with_random_source(random: Box<dyn RandomSource>) -> Self {
        Self {
            roster: Roster::new(),
            pairings: Vec::new(),
            history: Vec::new(),
            random,
        }
    }

    /// Rebuild an engine from a persisted snapshot
    pub fn restore(snapshot: EngineSnapshot, random: Box<dyn RandomSource>) -> Self {
        Self {
            roster: Roster::from_students(snapshot.students),
            pairings: snapshot.pairings,
            history: snapshot.history,
            random,
        }
    }

    /// Flat serializable copy of the whole engine state
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            students: self.roster.students().to_vec(),
            pairings: self.pairings.clone(),
            history: self.history.clone(),
        }
    }

    // ---- roster operations ----

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Bulk-import validated records into the roster
    pub fn import_students(&mut self, records: Vec<StudentRecord>) -> usize {
        self.roster.import(records)
    }

    /// Remove one student; existing pairings keep their snapshots
    pub fn remove_student(&mut self, id: StudentId) -> bool {
        self.roster.remove(id)
    }

    /// Empty roster, pairings, and history together.
    ///
    /// A roster reset invalidates every existing pairing.
    pub fn clear_students(&mut self) {
        self.roster.clear();
        self.pairings.clear();
        self.history.clear();
        info!("cleared roster, pairings, and history");
    }

    // ---- allocation operations ----

    /// Generate one automatic pairing.
    ///
    /// Walks the godchild cohorts in priority order (most junior first) and
    /// takes the first cohort with an available student, then picks the
    /// godchild and a free godparent of the mapped cohort uniformly at
    /// random. Returns `None` when no pairing is possible; that is the
    /// normal terminal signal, not an error.
    pub fn generate_pairing(&mut self) -> Option<Pairing> {
        // 1. First cohort in priority order with an available godchild
        let godchild = Cohort::GODCHILD_PRIORITY.iter().find_map(|&cohort| {
            let candidates = self.roster.available_godchildren(cohort);
            if candidates.is_empty() {
                None
            } else {
                let index = self.random.pick(candidates.len());
                Some(candidates[index].clone())
            }
        });

        let godchild = match godchild {
            Some(student) => student,
            None => {
                debug!("no available godchild in any cohort");
                return None;
            }
        };

        // 2. Mapping is defined for every cohort in the priority order
        let godparent_cohort = godchild.cohort.godparent_cohort()?;

        // 3. Strict one-to-one: only godparents with no godchild yet
        let candidates = self.roster.unassigned_godparents(godparent_cohort);
        if candidates.is_empty() {
            debug!(
                cohort = %godparent_cohort,
                "no free godparent left for cohort"
            );
            return None;
        }

        // 4. Uniform pick among the free godparents
        let index = self.random.pick(candidates.len());
        let godparent = candidates[index].clone();

        Some(self.commit(godparent, godchild))
    }

    /// Create a pairing chosen by hand.
    ///
    /// Validates in order and fails closed on the first violation: both ids
    /// must resolve, the godchild must be available, the godparent must be
    /// free, and the cohorts must satisfy the mapping rule. Nothing is
    /// mutated on rejection.
    pub fn create_manual_pairing(
        &mut self,
        godparent_id: StudentId,
        godchild_id: StudentId,
    ) -> EngineResult<Pairing> {
        let godparent = self
            .roster
            .get(godparent_id)
            .ok_or(EngineError::UnknownStudent { id: godparent_id })?
            .clone();
        let godchild = self
            .roster
            .get(godchild_id)
            .ok_or(EngineError::UnknownStudent { id: godchild_id })?
            .clone();

        if godchild.status != PairingStatus::Available {
            return Err(EngineError::GodchildUnavailable { id: godchild_id });
        }

        if godparent.godchild_count > 0 {
            return Err(EngineError::GodparentTaken { id: godparent_id });
        }

        if godchild.cohort.godparent_cohort() != Some(godparent.cohort) {
            return Err(EngineError::IncompatibleCohorts {
                godparent: godparent.cohort,
                godchild: godchild.cohort,
            });
        }

        Ok(self.commit(godparent, godchild))
    }

    /// Shared commit path for automatic and manual pairings.
    ///
    /// Takes the pre-commit snapshots of both students, pushes the undo
    /// record, appends the pairing, and flips the roster statuses in one
    /// uninterrupted span.
    fn commit(&mut self, godparent: Student, godchild: Student) -> Pairing {
        self.history.push(UndoRecord {
            godparent_id: godparent.id,
            godparent_status: godparent.status,
            godparent_count: godparent.godchild_count,
            godchild_id: godchild.id,
            godchild_status: godchild.status,
            godchild_count: godchild.godchild_count,
        });

        if let Some(student) = self.roster.get_mut(godchild.id) {
            student.status = PairingStatus::Godchild;
        }
        if let Some(student) = self.roster.get_mut(godparent.id) {
            student.status = PairingStatus::Godparent;
            // Strict 1-1 cap: assigned, never incremented
            student.godchild_count = 1;
        }

        let pairing = Pairing {
            id: PairingId::new(),
            godparent,
            godchild,
            created_at: Utc::now(),
        };

        info!(
            pairing = %pairing.id,
            godparent = %pairing.godparent,
            godchild = %pairing.godchild,
            "committed pairing"
        );

        self.pairings.push(pairing.clone());
        pairing
    }

    /// Undo the most recent pairing; no-op when none exist.
    ///
    /// Restores the two affected students (when still rostered) to their
    /// recorded pre-commit status and count. One level only, no redo.
    pub fn undo_last_pairing(&mut self) -> Option<Pairing> {
        let pairing = self.pairings.pop()?;

        if let Some(record) = self.history.pop() {
            if let Some(student) = self.roster.get_mut(record.godchild_id) {
                student.status = record.godchild_status;
                student.godchild_count = record.godchild_count;
            }
            if let Some(student) = self.roster.get_mut(record.godparent_id) {
                student.status = record.godparent_status;
                student.godchild_count = record.godparent_count;
            }
        }

        info!(pairing = %pairing.id, "undid last pairing");
        Some(pairing)
    }

    /// Drop every pairing and return all students to Available. Idempotent.
    pub fn reset_all_pairings(&mut self) {
        self.pairings.clear();
        self.history.clear();
        self.roster.reset_statuses();
        info!("reset all pairings");
    }

    // ---- queries ----

    /// Committed pairings in creation order (the undo order)
    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    /// Free godparents compatible with a godchild of `godchild_cohort`.
    ///
    /// Empty when the cohort has no godparent cohort above it.
    pub fn compatible_godparents(&self, godchild_cohort: Cohort) -> Vec<&Student> {
        match godchild_cohort.godparent_cohort() {
            Some(cohort) => self.roster.unassigned_godparents(cohort),
            None => Vec::new(),
        }
    }

    /// Ceremony progress counters for display collaborators
    pub fn stats(&self) -> CeremonyStats {
        CeremonyStats::compute(self.roster.students(), self.pairings.len())
    }

    /// Flat tabular rows of the pairing sequence for the export collaborator
    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.pairings.iter().map(ExportRow::from).collect()
    }
}

impl Default for PairingEngine {
    fn default() -> Self {
        Self::new()
    }
}
