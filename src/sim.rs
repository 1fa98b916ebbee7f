//! Simulation orchestrator.
//!
//! Drives the monthly loop for one policy configuration: growth, cohort
//! advancement, compaction, costing. Periods are strictly sequential; each
//! depends only on the previous period's ending cohort set and accumulator.
//! Two independent policy runs share no mutable state and are compared on
//! separate threads.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::classify::{AdvanceOutcome, AutoclassPolicy, LifecyclePolicy, TierPolicy};
use crate::cohort::{Cohort, CohortStore};
use crate::compact::compact;
use crate::config::{GrowthConfig, OperationCounts, PolicyConfig};
use crate::cost::{period_costs, CostBreakdown};
use crate::error::Result;
use crate::growth::period_intake;
use crate::pricing::PricingTable;
use crate::tier::{StorageTier, TierVolumes};

/// One row of the exported ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodResult {
    /// 1-based period index.
    pub period: u32,

    /// Tier occupancy snapshot, ineligible data included (always hot).
    pub volumes: TierVolumes,

    pub total_volume: f64,
    pub eligible_objects: f64,
    pub ineligible_objects: f64,
    pub total_objects: f64,

    /// Volume re-promoted back to hot this period (Autoclass only).
    pub repromoted_volume: f64,

    /// Live cohort count after compaction.
    pub live_cohorts: usize,

    pub costs: CostBreakdown,
}

impl PeriodResult {
    pub fn label(&self) -> String {
        format!("Month {}", self.period)
    }
}

/// Ordered, append-only sequence of period results; one per policy run.
pub type Ledger = Vec<PeriodResult>;

/// One policy run: a state machine with one state per period.
pub struct Simulation<P> {
    growth: GrowthConfig,
    operations: OperationCounts,
    pricing: PricingTable,
    policy: P,
    period: u32,
    cohorts: CohortStore,
    ineligible_volume: f64,
    ineligible_objects: f64,
    ledger: Ledger,
}

impl<P: TierPolicy> Simulation<P> {
    pub fn new(
        growth: GrowthConfig,
        operations: OperationCounts,
        pricing: PricingTable,
        policy: P,
    ) -> Result<Self> {
        policy.validate()?;
        Ok(Self {
            growth,
            operations,
            pricing,
            policy,
            period: 1,
            cohorts: CohortStore::new(),
            ineligible_volume: 0.0,
            ineligible_objects: 0.0,
            ledger: Ledger::new(),
        })
    }

    /// Advance the simulation by one period and append its result.
    pub fn step(&mut self) -> &PeriodResult {
        let period = self.period;

        let total_at_start = self.cohorts.total_volume() + self.ineligible_volume;
        let intake = period_intake(&self.growth, period, total_at_start);
        self.ineligible_volume += intake.ineligible_volume;
        self.ineligible_objects += intake.ineligible_objects;
        if intake.eligible_volume > 0.0 {
            self.cohorts.insert(Cohort::new(
                intake.eligible_volume,
                intake.eligible_objects,
                period,
            ));
        }

        // Cohorts are independent; advance each once, collecting aged
        // survivors separately from age-zero spawns.
        let mut outcome = AdvanceOutcome::new();
        for cohort in self.cohorts.drain() {
            if cohort.is_extinct() {
                continue;
            }
            self.policy
                .advance(cohort, period, &self.pricing, &mut outcome);
        }
        for cohort in outcome.survivors.drain(..) {
            self.cohorts.insert(cohort);
        }
        for cohort in outcome.spawned.drain(..) {
            self.cohorts.insert(cohort);
        }

        compact(&mut self.cohorts, &self.policy);

        let mut occupancy = outcome.occupancy;
        occupancy.add(StorageTier::Hot, self.ineligible_volume);

        let special = self.policy.special_cost(&self.pricing, &outcome);
        let costs = period_costs(
            &self.pricing,
            &occupancy,
            &self.operations,
            intake.upload_ops,
            outcome.transition_ops,
            outcome.transition_cost,
            special,
        );

        debug!(
            "period {period}: {} cohorts, {:.1} GiB total, ${:.2}",
            self.cohorts.len(),
            occupancy.total(),
            costs.total
        );

        self.ledger.push(PeriodResult {
            period,
            volumes: occupancy,
            total_volume: occupancy.total(),
            eligible_objects: outcome.eligible_objects,
            ineligible_objects: self.ineligible_objects,
            total_objects: outcome.eligible_objects + self.ineligible_objects,
            repromoted_volume: outcome.repromoted_volume,
            live_cohorts: self.cohorts.len(),
            costs,
        });
        self.period += 1;
        self.ledger.last().expect("ledger row just appended")
    }

    /// Run to the configured horizon and hand back the ledger.
    pub fn run(mut self) -> Ledger {
        while self.period <= self.growth.periods {
            self.step();
        }
        info!(
            "run complete: {} periods, final volume {:.1} GiB",
            self.ledger.len(),
            self.ledger.last().map(|row| row.total_volume).unwrap_or(0.0)
        );
        self.ledger
    }
}

/// Run one policy configuration to completion.
pub fn run_policy(
    growth: &GrowthConfig,
    operations: &OperationCounts,
    pricing: &PricingTable,
    policy: &PolicyConfig,
) -> Result<Ledger> {
    match policy {
        PolicyConfig::Autoclass {
            terminal_tier,
            fractions,
        } => Simulation::new(
            growth.clone(),
            operations.clone(),
            pricing.clone(),
            AutoclassPolicy::new(*terminal_tier, *fractions),
        )
        .map(Simulation::run),
        PolicyConfig::Lifecycle {
            thresholds,
            fractions,
        } => Simulation::new(
            growth.clone(),
            operations.clone(),
            pricing.clone(),
            LifecyclePolicy::new(*thresholds, *fractions),
        )
        .map(Simulation::run),
    }
}

/// Run two policy configurations concurrently over the same inputs.
///
/// Both configurations are validated before either thread spawns, so a
/// malformed threshold set fails fast instead of mid-comparison.
pub fn run_comparison(
    growth: &GrowthConfig,
    operations: &OperationCounts,
    pricing: &PricingTable,
    first: &PolicyConfig,
    second: &PolicyConfig,
) -> Result<(Ledger, Ledger)> {
    first.validate()?;
    second.validate()?;

    std::thread::scope(|scope| {
        let a = scope.spawn(|| run_policy(growth, operations, pricing, first));
        let b = scope.spawn(|| run_policy(growth, operations, pricing, second));
        let a = a.join().expect("policy run panicked")?;
        let b = b.join().expect("policy run panicked")?;
        Ok((a, b))
    })
}
