//! Cohort records and the arena that owns them.
//!
//! A cohort is a batch of tiering-eligible data created in one period. Aging
//! and policy splits never mutate a stored record in place; they produce new
//! records inserted under fresh handles, so per-cohort classification can be
//! parallelized by a caller without shared mutable state.

/// Cohorts below this volume (GiB) are extinct and dropped.
pub const VOLUME_EPSILON: f64 = 1e-3;

/// A batch of eligible data sharing a common age and origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cohort {
    /// Volume in GiB.
    pub volume: f64,

    /// Object count; fractional values appear as an averaging artifact.
    pub object_count: f64,

    /// Days since the cohort's effective creation or reset.
    pub age_days: f64,

    /// Period index of creation, used only for compaction bookkeeping.
    pub origin_period: u32,
}

impl Cohort {
    /// A fresh cohort at age zero.
    pub fn new(volume: f64, object_count: f64, origin_period: u32) -> Self {
        Self {
            volume,
            object_count,
            age_days: 0.0,
            origin_period,
        }
    }

    pub fn is_extinct(&self) -> bool {
        self.volume < VOLUME_EPSILON
    }

    /// The same cohort, aged by `days`.
    pub fn aged(mut self, days: f64) -> Self {
        self.age_days += days;
        self
    }
}

/// Handle addressing a live cohort in a [`CohortStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CohortId(u32);

/// Arena of live cohorts. Slots are reused; a handle is valid until the
/// cohort it addresses is removed.
#[derive(Debug, Default)]
pub struct CohortStore {
    slots: Vec<Option<Cohort>>,
    free: Vec<u32>,
}

impl CohortStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cohort, ignoring extinct ones.
    pub fn insert(&mut self, cohort: Cohort) -> Option<CohortId> {
        if cohort.is_extinct() {
            return None;
        }
        let id = match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Some(cohort);
                CohortId(slot)
            }
            None => {
                self.slots.push(Some(cohort));
                CohortId((self.slots.len() - 1) as u32)
            }
        };
        Some(id)
    }

    pub fn get(&self, id: CohortId) -> Option<&Cohort> {
        self.slots.get(id.0 as usize).and_then(|slot| slot.as_ref())
    }

    pub fn remove(&mut self, id: CohortId) -> Option<Cohort> {
        let cohort = self.slots.get_mut(id.0 as usize).and_then(|slot| slot.take());
        if cohort.is_some() {
            self.free.push(id.0);
        }
        cohort
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (CohortId, &Cohort)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, cohort)| cohort.as_ref().map(|c| (CohortId(slot as u32), c)))
    }

    /// Remove and return every live cohort, in slot order.
    pub fn drain(&mut self) -> Vec<Cohort> {
        let drained = self.slots.iter_mut().filter_map(|slot| slot.take()).collect();
        self.slots.clear();
        self.free.clear();
        drained
    }

    pub fn total_volume(&self) -> f64 {
        self.iter().map(|(_, c)| c.volume).sum()
    }

    pub fn total_objects(&self) -> f64 {
        self.iter().map(|(_, c)| c.object_count).sum()
    }
}
