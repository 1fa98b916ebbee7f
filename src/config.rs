//! Simulation run configuration.
//!
//! These are the externally-supplied value types: growth parameters, baseline
//! operation counts, and the per-policy configuration. Validation beyond the
//! lifecycle threshold ordering is the caller's responsibility; the engine
//! assumes a validated configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tier::StorageTier;

/// Growth and ingestion parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Number of monthly periods to simulate.
    pub periods: u32,

    /// Volume uploaded in period 1 (GiB).
    pub initial_volume_gib: f64,

    /// Compounding monthly growth rate applied to the running total
    /// (0.05 = 5% per month, 0 = no new data after period 1).
    pub monthly_growth_rate: f64,

    /// Fraction of each period's new volume that is tiering-eligible.
    pub eligible_fraction: f64,

    /// Average object size for eligible (large) data, KiB.
    pub avg_eligible_object_kib: f64,

    /// Average object size for ineligible (small) data, KiB.
    pub avg_ineligible_object_kib: f64,

    /// Objects above this size upload in parts (KiB).
    pub multipart_threshold_kib: f64,

    /// Part size for multipart uploads (KiB).
    pub multipart_part_kib: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            periods: 12,
            initial_volume_gib: 10_240.0,
            monthly_growth_rate: 0.0,
            eligible_fraction: 0.8,
            avg_eligible_object_kib: 512.0,
            avg_ineligible_object_kib: 64.0,
            multipart_threshold_kib: 16.0 * 1024.0,
            multipart_part_kib: 8.0 * 1024.0,
        }
    }
}

/// Baseline monthly user operations, unrelated to tiering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationCounts {
    /// Class B operations (reads) per month.
    pub reads: f64,

    /// Class A operations (writes) per month.
    pub writes: f64,
}

impl Default for OperationCounts {
    fn default() -> Self {
        Self {
            reads: 10_000.0,
            writes: 1_000.0,
        }
    }
}

/// Monthly re-access fractions per tier.
///
/// Under Autoclass, `hot` is the stays-hot fraction and the colder entries
/// drive re-promotion splits. Under Lifecycle the colder entries drive
/// retrieval charges and `hot` is unused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessFractions {
    pub hot: f64,
    pub cool: f64,
    pub cold: f64,
    pub archival: f64,
}

impl Default for AccessFractions {
    fn default() -> Self {
        Self {
            hot: 0.0,
            cool: 0.2,
            cold: 0.3,
            archival: 0.1,
        }
    }
}

impl AccessFractions {
    pub fn for_tier(&self, tier: StorageTier) -> f64 {
        match tier {
            StorageTier::Hot => self.hot,
            StorageTier::Cool => self.cool,
            StorageTier::Cold => self.cold,
            StorageTier::Archival => self.archival,
        }
    }
}

/// Day thresholds for Lifecycle transitions. An absent threshold skips that
/// tier entirely; data jumps directly past it at the next present threshold.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleThresholds {
    pub cool_days: Option<f64>,
    pub cold_days: Option<f64>,
    pub archival_days: Option<f64>,
}

impl LifecycleThresholds {
    /// The classic full linear path: 30 / 90 / 365 days.
    pub fn full_linear() -> Self {
        Self {
            cool_days: Some(30.0),
            cold_days: Some(90.0),
            archival_days: Some(365.0),
        }
    }

    /// Present transitions as `(target tier, day)`, hottest target first.
    pub fn transitions(&self) -> Vec<(StorageTier, f64)> {
        let mut out = Vec::with_capacity(3);
        if let Some(days) = self.cool_days {
            out.push((StorageTier::Cool, days));
        }
        if let Some(days) = self.cold_days {
            out.push((StorageTier::Cold, days));
        }
        if let Some(days) = self.archival_days {
            out.push((StorageTier::Archival, days));
        }
        out
    }

    /// The tier a cohort of the given age occupies: the coldest tier whose
    /// threshold it has reached, or hot if it has reached none.
    pub fn tier_at(&self, age_days: f64) -> StorageTier {
        let mut tier = StorageTier::Hot;
        for (target, days) in self.transitions() {
            if age_days >= days {
                tier = target;
            }
        }
        tier
    }

    /// Present thresholds must be strictly increasing in tier order.
    pub fn validate(&self) -> Result<()> {
        let transitions = self.transitions();
        for pair in transitions.windows(2) {
            let (earlier_tier, earlier_days) = pair[0];
            let (later_tier, later_days) = pair[1];
            if later_days <= earlier_days {
                return Err(Error::ThresholdOrder {
                    earlier: earlier_tier.as_str(),
                    later: later_tier.as_str(),
                    earlier_days,
                    later_days,
                });
            }
        }
        Ok(())
    }
}

/// Policy selection plus policy-specific parameters, immutable per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PolicyConfig {
    /// Access-driven auto-tiering with a terminal tier bound.
    Autoclass {
        terminal_tier: StorageTier,
        fractions: AccessFractions,
    },

    /// Fixed time-based tiering with optional per-transition thresholds.
    Lifecycle {
        thresholds: LifecycleThresholds,
        fractions: AccessFractions,
    },
}

impl PolicyConfig {
    pub fn default_autoclass() -> Self {
        PolicyConfig::Autoclass {
            terminal_tier: StorageTier::Archival,
            fractions: AccessFractions::default(),
        }
    }

    pub fn default_lifecycle() -> Self {
        PolicyConfig::Lifecycle {
            thresholds: LifecycleThresholds::full_linear(),
            fractions: AccessFractions::default(),
        }
    }

    /// Fail fast on a malformed threshold set before the run starts.
    pub fn validate(&self) -> Result<()> {
        match self {
            PolicyConfig::Autoclass { .. } => Ok(()),
            PolicyConfig::Lifecycle { thresholds, .. } => thresholds.validate(),
        }
    }
}

/// Full input contract for one comparison run, loadable from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub growth: GrowthConfig,
    pub operations: OperationCounts,
    pub pricing: crate::pricing::PricingTable,
    pub autoclass: PolicyConfig,
    pub lifecycle: PolicyConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            growth: GrowthConfig::default(),
            operations: OperationCounts::default(),
            pricing: crate::pricing::PricingTable::default(),
            autoclass: PolicyConfig::default_autoclass(),
            lifecycle: PolicyConfig::default_lifecycle(),
        }
    }
}
