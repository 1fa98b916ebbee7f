//! Ledger summaries and two-policy comparison.

use serde::{Deserialize, Serialize};

use crate::sim::Ledger;
use crate::tier::TierVolumes;

/// Aggregate view over one ledger.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_cost: f64,
    pub storage_cost: f64,
    pub api_cost: f64,
    pub special_cost: f64,
    pub average_monthly_cost: f64,
    pub final_volumes: TierVolumes,
    pub final_total_volume: f64,
}

pub fn summarize(ledger: &Ledger) -> LedgerSummary {
    let mut summary = LedgerSummary::default();
    for row in ledger {
        summary.total_cost += row.costs.total;
        summary.storage_cost += row.costs.storage;
        summary.api_cost += row.costs.api;
        summary.special_cost += row.costs.special;
    }
    summary.average_monthly_cost = safe_divide(summary.total_cost, ledger.len() as f64);
    if let Some(last) = ledger.last() {
        summary.final_volumes = last.volumes;
        summary.final_total_volume = last.total_volume;
    }
    summary
}

/// Outcome of comparing two ledgers over the same inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Comparison {
    pub first: LedgerSummary,
    pub second: LedgerSummary,
    /// True when the first ledger is the cheaper one.
    pub first_wins: bool,
    pub cost_difference: f64,
    pub savings_percentage: f64,
}

pub fn compare(first: &Ledger, second: &Ledger) -> Comparison {
    let first = summarize(first);
    let second = summarize(second);

    let difference = first.total_cost - second.total_cost;
    let baseline = first.total_cost.max(second.total_cost);
    Comparison {
        first,
        second,
        first_wins: difference <= 0.0,
        cost_difference: difference.abs(),
        savings_percentage: safe_divide(difference.abs(), baseline) * 100.0,
    }
}

fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
