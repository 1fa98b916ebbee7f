//! Cost engine: converts occupancy and movement events into dollars.
//!
//! Pure functions of the period's tier snapshot and the events emitted by
//! classification. Empty totals divide to zero; nothing here can fail.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::OperationCounts;
use crate::pricing::PricingTable;
use crate::tier::{StorageTier, TierVolumes};

/// Dollar breakdown for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Σ tier volume × tier price.
    pub storage: f64,

    /// Baseline user reads and writes.
    pub user_ops: f64,

    /// Class A operations spent uploading the period's arrivals.
    pub upload_ops: f64,

    /// Tier transition charges (counted operations and direct dollars).
    pub transition: f64,

    /// user_ops + upload_ops + transition.
    pub api: f64,

    /// Management fee (Autoclass) or retrieval (Lifecycle).
    pub special: f64,

    /// storage + api + special.
    pub total: f64,
}

/// Price one period.
///
/// `transition_ops` are counted operations priced at the Class A rate;
/// `transition_dollars` are already-priced lifecycle transition charges. The
/// two never both apply under a single policy but the engine does not care.
pub fn period_costs(
    pricing: &PricingTable,
    occupancy: &TierVolumes,
    user_ops: &OperationCounts,
    upload_ops: f64,
    transition_ops: f64,
    transition_dollars: f64,
    special: f64,
) -> CostBreakdown {
    let storage: f64 = StorageTier::ALL
        .iter()
        .map(|&tier| occupancy.get(tier) * pricing.storage.for_tier(tier))
        .sum();

    let user_ops_cost =
        user_ops.reads * pricing.operations.class_b + user_ops.writes * pricing.operations.class_a;
    let upload_ops_cost = upload_ops * pricing.operations.class_a;
    let transition_cost = transition_ops * pricing.operations.class_a + transition_dollars;
    let api = user_ops_cost + upload_ops_cost + transition_cost;

    let total = storage + api + special;
    debug!(
        "period costs: storage={storage:.4} api={api:.4} special={special:.4} total={total:.4}"
    );

    CostBreakdown {
        storage,
        user_ops: user_ops_cost,
        upload_ops: upload_ops_cost,
        transition: transition_cost,
        api,
        special,
        total,
    }
}
