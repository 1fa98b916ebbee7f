//! Tier classification engine.
//!
//! Two interchangeable policies decide, per cohort per period, which tier a
//! cohort occupies and what volume moves:
//!
//! - [`AutoclassPolicy`]: access-driven, splits cohorts and re-promotes
//!   accessed data back to the hot tier at age zero.
//! - [`LifecyclePolicy`]: time-based, prorates occupancy across threshold
//!   crossings and charges retrieval; data never moves back to hot.
//!
//! Cohorts are independent within a period, so `advance` only accumulates
//! into a per-period [`AdvanceOutcome`]; the orchestrator owns the ordering.

mod autoclass;
mod lifecycle;

pub use autoclass::{AutoclassPolicy, COLD_AFTER_DAYS, COOL_AFTER_DAYS, ARCHIVAL_AFTER_DAYS};
pub use lifecycle::LifecyclePolicy;

use crate::cohort::Cohort;
use crate::error::Result;
use crate::pricing::PricingTable;
use crate::tier::{StorageTier, TierVolumes};

/// Days per simulated period.
pub const PERIOD_DAYS: f64 = 30.0;

/// Accumulated results of advancing every live cohort through one period.
#[derive(Debug, Default)]
pub struct AdvanceOutcome {
    /// Aged remainders of existing cohorts.
    pub survivors: Vec<Cohort>,

    /// Age-zero cohorts spawned by splits and re-promotions.
    pub spawned: Vec<Cohort>,

    /// Tier occupancy contributed by eligible cohorts this period.
    pub occupancy: TierVolumes,

    /// Surviving eligible object count, the management-fee base.
    pub eligible_objects: f64,

    /// Volume re-promoted to the hot tier this period.
    pub repromoted_volume: f64,

    /// Transition operations counted per re-promoted object (Autoclass);
    /// priced at the Class A rate by the cost engine.
    pub transition_ops: f64,

    /// Transition dollars charged per crossed threshold (Lifecycle).
    pub transition_cost: f64,

    /// Retrieval dollars accrued this period (Lifecycle only).
    pub retrieval_cost: f64,
}

impl AdvanceOutcome {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A tier classification strategy. One orchestrator drives either policy
/// through this contract.
pub trait TierPolicy: Send + Sync {
    /// Fail fast on malformed configuration before a run starts.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// The tier a cohort of the given age classifies into. Also drives
    /// compaction grouping.
    fn tier_for_age(&self, age_days: f64) -> StorageTier;

    /// Advance one cohort by one period, accumulating occupancy, successor
    /// cohorts, and cost events into `out`.
    fn advance(&self, cohort: Cohort, period: u32, pricing: &PricingTable, out: &mut AdvanceOutcome);

    /// The policy-specific special cost for the period: management fee for
    /// Autoclass, retrieval for Lifecycle.
    fn special_cost(&self, pricing: &PricingTable, outcome: &AdvanceOutcome) -> f64;
}
