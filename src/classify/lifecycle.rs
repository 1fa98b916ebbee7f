//! Fixed time-based tiering policy.

use crate::classify::{AdvanceOutcome, TierPolicy, PERIOD_DAYS};
use crate::cohort::Cohort;
use crate::config::{AccessFractions, LifecycleThresholds};
use crate::error::Result;
use crate::pricing::PricingTable;
use crate::tier::StorageTier;

/// Time-based tiering over an optional threshold set.
///
/// A period may span a transition boundary, so occupancy is prorated across
/// tiers by days-in-tier over the cohort's `[age, age+30)` interval. Absent
/// thresholds skip their tier entirely. Each threshold crossed inside the
/// interval charges a per-object transition at the from-tier's single-hop
/// rate; retrieval is charged once from the end-of-interval tier. Data never
/// moves back to hot.
#[derive(Debug, Clone)]
pub struct LifecyclePolicy {
    thresholds: LifecycleThresholds,
    fractions: AccessFractions,
}

impl LifecyclePolicy {
    pub fn new(thresholds: LifecycleThresholds, fractions: AccessFractions) -> Self {
        Self {
            thresholds,
            fractions,
        }
    }
}

impl TierPolicy for LifecyclePolicy {
    fn validate(&self) -> Result<()> {
        self.thresholds.validate()
    }

    fn tier_for_age(&self, age_days: f64) -> StorageTier {
        self.thresholds.tier_at(age_days)
    }

    fn advance(
        &self,
        cohort: Cohort,
        _period: u32,
        pricing: &PricingTable,
        out: &mut AdvanceOutcome,
    ) {
        let start = cohort.age_days;
        let end = start + PERIOD_DAYS;

        // Walk the interval segment by segment. A threshold landing exactly
        // on the interval end still bills its transition this period; the
        // new tier then shows from the next snapshot on.
        let mut cursor = start;
        let mut cursor_tier = self.thresholds.tier_at(start);
        for (target, day) in self.thresholds.transitions() {
            if day > start && day <= end {
                let span = day - cursor;
                if span > 0.0 {
                    out.occupancy
                        .add(cursor_tier, cohort.volume * span / PERIOD_DAYS);
                }
                out.transition_cost +=
                    cohort.object_count * pricing.transition.from_tier(cursor_tier);
                cursor = day;
                cursor_tier = target;
            }
        }
        if end > cursor {
            out.occupancy
                .add(cursor_tier, cohort.volume * (end - cursor) / PERIOD_DAYS);
        }

        let end_tier = self.thresholds.tier_at(end);
        let accessed = cohort.volume * self.fractions.for_tier(end_tier);
        out.retrieval_cost += accessed * pricing.retrieval.for_tier(end_tier);

        out.eligible_objects += cohort.object_count;
        out.survivors.push(cohort.aged(PERIOD_DAYS));
    }

    fn special_cost(&self, _pricing: &PricingTable, outcome: &AdvanceOutcome) -> f64 {
        outcome.retrieval_cost
    }
}
