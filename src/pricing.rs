//! Pricing table for storage, operations, retrieval, and transitions.
//!
//! An immutable value type passed by reference into the cost engine. The
//! defaults model a single-region price book; callers supply their own table
//! for other regions. Storage prices are expected to strictly decrease from
//! hot to archival; that precondition is enforced by the configuration
//! layer, not here.

use serde::{Deserialize, Serialize};

use crate::tier::StorageTier;

/// Storage unit prices, $/GiB per month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct StoragePrices {
    pub hot: f64,
    pub cool: f64,
    pub cold: f64,
    pub archival: f64,
}

impl Default for StoragePrices {
    fn default() -> Self {
        Self {
            hot: 0.020,
            cool: 0.010,
            cold: 0.004,
            archival: 0.0012,
        }
    }
}

impl StoragePrices {
    pub fn for_tier(&self, tier: StorageTier) -> f64 {
        match tier {
            StorageTier::Hot => self.hot,
            StorageTier::Cool => self.cool,
            StorageTier::Cold => self.cold,
            StorageTier::Archival => self.archival,
        }
    }
}

/// Per-operation prices by operation class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationPrices {
    /// Class A (writes, transitions), $/operation.
    pub class_a: f64,

    /// Class B (reads), $/operation.
    pub class_b: f64,
}

impl Default for OperationPrices {
    fn default() -> Self {
        Self {
            class_a: 0.05 / 10_000.0,
            class_b: 0.004 / 10_000.0,
        }
    }
}

/// Retrieval unit prices, $/GiB read out of a non-hot tier. Hot reads are
/// free of retrieval charges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalPrices {
    pub cool: f64,
    pub cold: f64,
    pub archival: f64,
}

impl Default for RetrievalPrices {
    fn default() -> Self {
        Self {
            cool: 0.01,
            cold: 0.02,
            archival: 0.05,
        }
    }
}

impl RetrievalPrices {
    pub fn for_tier(&self, tier: StorageTier) -> f64 {
        match tier {
            StorageTier::Hot => 0.0,
            StorageTier::Cool => self.cool,
            StorageTier::Cold => self.cold,
            StorageTier::Archival => self.archival,
        }
    }
}

/// Per-object transition prices, keyed by the tier the data leaves. A skip
/// transition (e.g. hot directly to cold) is billed at the from-tier's
/// single-hop rate; there is no dedicated skip price point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionPrices {
    pub from_hot: f64,
    pub from_cool: f64,
    pub from_cold: f64,
}

impl Default for TransitionPrices {
    fn default() -> Self {
        // Transitions are charged as Class A operations per object.
        let class_a = OperationPrices::default().class_a;
        Self {
            from_hot: class_a,
            from_cool: class_a,
            from_cold: class_a,
        }
    }
}

impl TransitionPrices {
    pub fn from_tier(&self, tier: StorageTier) -> f64 {
        match tier {
            StorageTier::Hot => self.from_hot,
            StorageTier::Cool => self.from_cool,
            StorageTier::Cold => self.from_cold,
            // Nothing transitions out of the terminal tier.
            StorageTier::Archival => 0.0,
        }
    }
}

/// The full price book consumed by the cost engine. Never mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    pub storage: StoragePrices,
    pub operations: OperationPrices,
    pub retrieval: RetrievalPrices,
    pub transition: TransitionPrices,
    /// Management fee, $ per 1000 eligible objects per month.
    pub management_fee_per_1000_objects: f64,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            storage: StoragePrices::default(),
            operations: OperationPrices::default(),
            retrieval: RetrievalPrices::default(),
            transition: TransitionPrices::default(),
            management_fee_per_1000_objects: 0.0025,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prices_decrease_with_coldness() {
        let prices = StoragePrices::default();
        assert!(prices.hot > prices.cool);
        assert!(prices.cool > prices.cold);
        assert!(prices.cold > prices.archival);
    }

    #[test]
    fn test_hot_retrieval_is_free() {
        let retrieval = RetrievalPrices::default();
        assert_eq!(retrieval.for_tier(StorageTier::Hot), 0.0);
        assert!(retrieval.for_tier(StorageTier::Archival) > retrieval.for_tier(StorageTier::Cool));
    }

    #[test]
    fn test_transition_prices_default_to_class_a() {
        let transition = TransitionPrices::default();
        let class_a = OperationPrices::default().class_a;
        assert_eq!(transition.from_tier(StorageTier::Hot), class_a);
        assert_eq!(transition.from_tier(StorageTier::Archival), 0.0);
    }

    #[test]
    fn test_pricing_table_roundtrip() {
        let table = PricingTable::default();
        assert_eq!(table.management_fee_per_1000_objects, 0.0025);
        let json = serde_json::to_string(&table).unwrap();
        let deserialized: PricingTable = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.storage.hot, table.storage.hot);
        assert_eq!(
            deserialized.management_fee_per_1000_objects,
            table.management_fee_per_1000_objects
        );
    }
}
