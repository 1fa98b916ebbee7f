//! Access-driven auto-tiering policy.

use crate::classify::{AdvanceOutcome, TierPolicy, PERIOD_DAYS};
use crate::cohort::Cohort;
use crate::config::AccessFractions;
use crate::pricing::PricingTable;
use crate::tier::StorageTier;

/// Fixed age thresholds for automatic transitions.
pub const COOL_AFTER_DAYS: f64 = 30.0;
pub const COLD_AFTER_DAYS: f64 = 90.0;
pub const ARCHIVAL_AFTER_DAYS: f64 = 365.0;

/// Auto-tiering driven by monthly re-access fractions.
///
/// Tier placement is a pure function of age against the fixed thresholds,
/// bounded above by the terminal tier. Accessed data in any cold tier is
/// re-promoted to hot instantly and for free; re-promotions out of cold or
/// archival additionally count one transition operation per object. No
/// retrieval cost is ever charged.
#[derive(Debug, Clone)]
pub struct AutoclassPolicy {
    terminal_tier: StorageTier,
    fractions: AccessFractions,
}

impl AutoclassPolicy {
    pub fn new(terminal_tier: StorageTier, fractions: AccessFractions) -> Self {
        Self {
            terminal_tier,
            fractions,
        }
    }
}

fn unbounded_tier_for_age(age_days: f64) -> StorageTier {
    if age_days >= ARCHIVAL_AFTER_DAYS {
        StorageTier::Archival
    } else if age_days >= COLD_AFTER_DAYS {
        StorageTier::Cold
    } else if age_days >= COOL_AFTER_DAYS {
        StorageTier::Cool
    } else {
        StorageTier::Hot
    }
}

impl TierPolicy for AutoclassPolicy {
    fn tier_for_age(&self, age_days: f64) -> StorageTier {
        unbounded_tier_for_age(age_days).min(self.terminal_tier)
    }

    fn advance(
        &self,
        cohort: Cohort,
        period: u32,
        _pricing: &PricingTable,
        out: &mut AdvanceOutcome,
    ) {
        let tier = self.tier_for_age(cohort.age_days);

        if tier == StorageTier::Hot {
            // Split into a stays-hot portion reset to age zero and a
            // complement that keeps aging toward the cool threshold.
            let stays = self.fractions.hot;
            let hot = Cohort::new(
                cohort.volume * stays,
                cohort.object_count * stays,
                period,
            );
            if !hot.is_extinct() {
                out.occupancy.add(StorageTier::Hot, hot.volume);
                out.eligible_objects += hot.object_count;
                out.spawned.push(hot);
            }

            let remainder = Cohort {
                volume: cohort.volume - hot.volume,
                object_count: cohort.object_count - hot.object_count,
                ..cohort
            };
            if !remainder.is_extinct() {
                out.occupancy.add(StorageTier::Hot, remainder.volume);
                out.eligible_objects += remainder.object_count;
                out.survivors.push(remainder.aged(PERIOD_DAYS));
            }
            return;
        }

        // Accessed data re-promotes to hot at age zero; the rest ages in
        // place. Re-promotion out of cold or archival counts one transition
        // operation per object.
        let access = self.fractions.for_tier(tier);
        let promoted = Cohort::new(
            cohort.volume * access,
            cohort.object_count * access,
            period,
        );
        if !promoted.is_extinct() {
            if matches!(tier, StorageTier::Cold | StorageTier::Archival) {
                out.transition_ops += promoted.object_count;
            }
            out.occupancy.add(StorageTier::Hot, promoted.volume);
            out.eligible_objects += promoted.object_count;
            out.repromoted_volume += promoted.volume;
            out.spawned.push(promoted);
        }

        let remainder = Cohort {
            volume: cohort.volume - promoted.volume,
            object_count: cohort.object_count - promoted.object_count,
            ..cohort
        };
        if !remainder.is_extinct() {
            out.occupancy.add(tier, remainder.volume);
            out.eligible_objects += remainder.object_count;
            out.survivors.push(remainder.aged(PERIOD_DAYS));
        }
    }

    fn special_cost(&self, pricing: &PricingTable, outcome: &AdvanceOutcome) -> f64 {
        outcome.eligible_objects / 1000.0 * pricing.management_fee_per_1000_objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(fractions: AccessFractions) -> AutoclassPolicy {
        AutoclassPolicy::new(StorageTier::Archival, fractions)
    }

    fn zero_fractions() -> AccessFractions {
        AccessFractions {
            hot: 0.0,
            cool: 0.0,
            cold: 0.0,
            archival: 0.0,
        }
    }

    #[test]
    fn test_tier_for_age_thresholds() {
        let policy = policy(zero_fractions());
        assert_eq!(policy.tier_for_age(0.0), StorageTier::Hot);
        assert_eq!(policy.tier_for_age(30.0), StorageTier::Cool);
        assert_eq!(policy.tier_for_age(90.0), StorageTier::Cold);
        assert_eq!(policy.tier_for_age(365.0), StorageTier::Archival);
    }

    #[test]
    fn test_terminal_tier_clamps_classification() {
        let policy = AutoclassPolicy::new(StorageTier::Cool, zero_fractions());
        assert_eq!(policy.tier_for_age(400.0), StorageTier::Cool);
        assert_eq!(policy.tier_for_age(10.0), StorageTier::Hot);
    }

    #[test]
    fn test_hot_cohort_splits_by_stays_hot_fraction() {
        let mut fractions = zero_fractions();
        fractions.hot = 0.25;
        let policy = policy(fractions);

        let mut out = AdvanceOutcome::new();
        policy.advance(Cohort::new(100.0, 1_000.0, 1), 3, &PricingTable::default(), &mut out);

        assert_eq!(out.spawned.len(), 1);
        assert_eq!(out.spawned[0].volume, 25.0);
        assert_eq!(out.spawned[0].age_days, 0.0);
        assert_eq!(out.spawned[0].origin_period, 3);

        assert_eq!(out.survivors.len(), 1);
        assert_eq!(out.survivors[0].volume, 75.0);
        assert_eq!(out.survivors[0].age_days, 30.0);
        assert_eq!(out.survivors[0].origin_period, 1);

        // Both halves occupy hot this period.
        assert_eq!(out.occupancy.hot, 100.0);
        assert_eq!(out.eligible_objects, 1_000.0);
        assert_eq!(out.transition_ops, 0.0);
    }

    #[test]
    fn test_cool_access_repromotes_without_transition_ops() {
        let mut fractions = zero_fractions();
        fractions.cool = 0.2;
        let policy = policy(fractions);

        let cohort = Cohort {
            volume: 100.0,
            object_count: 1_000.0,
            age_days: 30.0,
            origin_period: 1,
        };
        let mut out = AdvanceOutcome::new();
        policy.advance(cohort, 2, &PricingTable::default(), &mut out);

        assert_eq!(out.repromoted_volume, 20.0);
        assert_eq!(out.occupancy.hot, 20.0);
        assert_eq!(out.occupancy.cool, 80.0);
        assert_eq!(out.transition_ops, 0.0);
        assert_eq!(out.retrieval_cost, 0.0);
        assert_eq!(out.survivors[0].age_days, 60.0);
    }

    #[test]
    fn test_archival_access_counts_transition_ops() {
        let mut fractions = zero_fractions();
        fractions.archival = 0.1;
        let policy = policy(fractions);

        let cohort = Cohort {
            volume: 100.0,
            object_count: 1_000.0,
            age_days: 400.0,
            origin_period: 1,
        };
        let mut out = AdvanceOutcome::new();
        policy.advance(cohort, 14, &PricingTable::default(), &mut out);

        assert_eq!(out.transition_ops, 100.0);
        assert_eq!(out.occupancy.hot, 10.0);
        assert_eq!(out.occupancy.archival, 90.0);
        assert_eq!(out.spawned[0].age_days, 0.0);
    }

    #[test]
    fn test_advance_conserves_volume() {
        let fractions = AccessFractions {
            hot: 0.3,
            cool: 0.2,
            cold: 0.4,
            archival: 0.1,
        };
        let policy = policy(fractions);
        let pricing = PricingTable::default();

        for age in [0.0, 45.0, 120.0, 500.0] {
            let cohort = Cohort {
                volume: 100.0,
                object_count: 1_000.0,
                age_days: age,
                origin_period: 1,
            };
            let mut out = AdvanceOutcome::new();
            policy.advance(cohort, 5, &pricing, &mut out);
            assert!((out.occupancy.total() - 100.0).abs() < 1e-9, "age {age}");
        }
    }

    #[test]
    fn test_management_fee() {
        let policy = policy(zero_fractions());
        let pricing = PricingTable::default();
        let mut out = AdvanceOutcome::new();
        out.eligible_objects = 2_000_000.0;

        let fee = policy.special_cost(&pricing, &out);
        assert!((fee - 2_000.0 * 0.0025).abs() < 1e-12);
    }
}
