//! Roster store and per-student eligibility queries

use shared::{Cohort, PairingStatus, Student, StudentId, StudentRecord};
use tracing::debug;

/// Insertion-ordered student roster.
///
/// Order is stable for display; it has no bearing on allocation correctness.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self { students: Vec::new() }
    }

    /// Rebuild a roster from previously snapshotted students
    pub fn from_students(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Bulk-import validated records.
    ///
    /// Each record gets a fresh id and starts Available with no godchild.
    /// Validation happened upstream in the import collaborator.
    pub fn import(&mut self, records: Vec<StudentRecord>) -> usize {
        let added = records.len();
        self.students.extend(records.into_iter().map(Student::from_record));
        debug!(added, total = self.students.len(), "imported students into roster");
        added
    }

    /// Remove a student by id; no-op if absent.
    ///
    /// Committed pairings are untouched: they hold their own snapshots, so
    /// history stays displayable after the roster entry is gone.
    pub fn remove(&mut self, id: StudentId) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        self.students.len() != before
    }

    pub fn clear(&mut self) {
        self.students.clear();
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    /// Students of `cohort` still waiting to receive a godparent
    pub fn available_godchildren(&self, cohort: Cohort) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.cohort == cohort && s.status == PairingStatus::Available)
            .collect()
    }

    /// Broad godparent pool: every student whose cohort can godparent,
    /// regardless of current assignment. Display/stats query; allocation
    /// uses the stricter [`Roster::unassigned_godparents`].
    pub fn eligible_godparents(&self) -> Vec<&Student> {
        self.students.iter().filter(|s| s.cohort.can_godparent()).collect()
    }

    /// Godparent candidates of `cohort` with no godchild yet (strict 1-1)
    pub fn unassigned_godparents(&self, cohort: Cohort) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.cohort == cohort && s.godchild_count == 0)
            .collect()
    }

    /// Available students across every godchild-capable cohort, offered as
    /// the candidate list for manual selection
    pub fn available_manual_godchildren(&self) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.cohort.can_have_godparent() && s.status == PairingStatus::Available)
            .collect()
    }

    /// Put every student back to Available with no godchild assigned
    pub(crate) fn reset_statuses(&mut self) {
        for student in &mut self.students {
            student.status = PairingStatus::Available;
            student.godchild_count = 0;
        }
    }
}
