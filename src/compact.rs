//! Cohort compaction: bounds simulation state over long horizons.
//!
//! Once the live cohort count exceeds the ceiling, the largest cohorts are
//! kept untouched and the tail is merged per classified tier. Merging keeps
//! the maximum age observed in each group (never understates coldness) and
//! the earliest origin period, and conserves volume and object sums exactly.

use log::debug;

use crate::classify::TierPolicy;
use crate::cohort::{Cohort, CohortStore};

/// Compaction triggers above this many live cohorts.
pub const MAX_COHORTS: usize = 150;

/// How many of the largest cohorts survive a compaction untouched.
pub const KEEP_LARGEST: usize = 100;

/// Merge the tail of small cohorts per classified tier. Returns the number
/// of cohorts merged away, zero when under the ceiling.
pub fn compact(store: &mut CohortStore, policy: &dyn TierPolicy) -> usize {
    if store.len() <= MAX_COHORTS {
        return 0;
    }

    let mut cohorts = store.drain();
    cohorts.sort_by(|a, b| b.volume.total_cmp(&a.volume));
    let tail = cohorts.split_off(KEEP_LARGEST);
    let tail_count = tail.len();

    let mut groups: [Option<Cohort>; 4] = [None; 4];
    for cohort in tail {
        let tier = policy.tier_for_age(cohort.age_days);
        let group = &mut groups[tier.rank()];
        match group {
            Some(merged) => {
                merged.volume += cohort.volume;
                merged.object_count += cohort.object_count;
                merged.age_days = merged.age_days.max(cohort.age_days);
                merged.origin_period = merged.origin_period.min(cohort.origin_period);
            }
            None => *group = Some(cohort),
        }
    }

    for cohort in cohorts {
        store.insert(cohort);
    }
    let mut merged_groups = 0;
    for group in groups.into_iter().flatten() {
        merged_groups += 1;
        store.insert(group);
    }

    debug!("compacted {tail_count} cohorts into {merged_groups} tier groups");
    tail_count - merged_groups
}
