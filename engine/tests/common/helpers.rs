//! Test helpers and builders for engine tests

use engine::{PairingEngine, RandomSource, SeededSource};
use shared::{PairingStatus, Student, StudentId, StudentRecord};
use std::collections::VecDeque;

/// Plays back a scripted sequence of picks.
///
/// Panics when the script runs dry or a pick is out of range, so a test
/// that consumes randomness differently than expected fails loudly.
pub struct ScriptedSource {
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        let pick = self.picks.pop_front().expect("scripted source exhausted");
        assert!(pick < len, "scripted pick {pick} out of range for {len} candidates");
        pick
    }
}

/// Builder for engines with a pre-imported roster and a chosen randomness source
pub struct EngineBuilder {
    records: Vec<StudentRecord>,
    random: Option<Box<dyn RandomSource>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            random: None,
        }
    }

    pub fn with_students(mut self, records: Vec<StudentRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// Deterministic source that plays back the given picks in order
    pub fn with_scripted_picks(mut self, picks: &[usize]) -> Self {
        self.random = Some(Box::new(ScriptedSource::new(picks)));
        self
    }

    /// Seeded RNG source for reproducible but unscripted selection
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random = Some(Box::new(SeededSource::new(seed)));
        self
    }

    pub fn build(self) -> PairingEngine {
        let mut engine = match self.random {
            Some(source) => PairingEngine::with_random_source(source),
            None => PairingEngine::new(),
        };
        engine.import_students(self.records);
        engine
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Assertion and lookup helpers shared across test suites
pub struct TestHelpers;

impl TestHelpers {
    /// Find a rostered student by last name; panics if absent
    pub fn student<'a>(engine: &'a PairingEngine, last_name: &str) -> &'a Student {
        engine
            .roster()
            .students()
            .iter()
            .find(|s| s.last_name == last_name)
            .unwrap_or_else(|| panic!("no student named {last_name} on the roster"))
    }

    /// Id of a rostered student by last name
    pub fn id_of(engine: &PairingEngine, last_name: &str) -> StudentId {
        Self::student(engine, last_name).id
    }

    /// Assert a student is back to the initial available state
    pub fn assert_available(engine: &PairingEngine, last_name: &str) {
        let student = Self::student(engine, last_name);
        assert_eq!(student.status, PairingStatus::Available, "{last_name} should be available");
        assert_eq!(student.godchild_count, 0, "{last_name} should have no godchild");
    }

    /// Assert the one-godchild cap holds for every rostered student
    pub fn assert_godchild_cap(engine: &PairingEngine) {
        for student in engine.roster().students() {
            assert!(
                student.godchild_count <= 1,
                "{} has {} godchildren",
                student.last_name,
                student.godchild_count
            );
        }
    }

    /// Assert every committed pairing satisfies the cohort mapping rule
    pub fn assert_pairings_follow_rule(engine: &PairingEngine) {
        for pairing in engine.pairings() {
            assert_eq!(
                pairing.godchild.cohort.godparent_cohort(),
                Some(pairing.godparent.cohort),
                "pairing {} violates the cohort rule",
                pairing.id
            );
        }
    }
}
