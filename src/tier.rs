//! Storage tier definitions.
//!
//! Tiers are ordered hottest to coldest. Every cohort occupies exactly one
//! tier per period under Autoclass; under Lifecycle a cohort's volume may be
//! prorated across adjacent tiers within a single period.

use serde::{Deserialize, Serialize};

/// One of the four ordered storage classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageTier {
    Hot,
    Cool,
    Cold,
    Archival,
}

impl StorageTier {
    /// All tiers, hottest first.
    pub const ALL: [StorageTier; 4] = [
        StorageTier::Hot,
        StorageTier::Cool,
        StorageTier::Cold,
        StorageTier::Archival,
    ];

    /// Numeric coldness rank (higher = colder).
    pub fn rank(self) -> usize {
        match self {
            StorageTier::Hot => 0,
            StorageTier::Cool => 1,
            StorageTier::Cold => 2,
            StorageTier::Archival => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StorageTier::Hot => "hot",
            StorageTier::Cool => "cool",
            StorageTier::Cold => "cold",
            StorageTier::Archival => "archival",
        }
    }

    /// The hotter of two tiers.
    pub fn min(self, other: StorageTier) -> StorageTier {
        if self.rank() <= other.rank() {
            self
        } else {
            other
        }
    }
}

impl std::fmt::Display for StorageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tier volume totals for one period's occupancy snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierVolumes {
    pub hot: f64,
    pub cool: f64,
    pub cold: f64,
    pub archival: f64,
}

impl TierVolumes {
    pub fn get(&self, tier: StorageTier) -> f64 {
        match tier {
            StorageTier::Hot => self.hot,
            StorageTier::Cool => self.cool,
            StorageTier::Cold => self.cold,
            StorageTier::Archival => self.archival,
        }
    }

    pub fn add(&mut self, tier: StorageTier, volume: f64) {
        match tier {
            StorageTier::Hot => self.hot += volume,
            StorageTier::Cool => self.cool += volume,
            StorageTier::Cold => self.cold += volume,
            StorageTier::Archival => self.archival += volume,
        }
    }

    pub fn total(&self) -> f64 {
        self.hot + self.cool + self.cold + self.archival
    }
}
