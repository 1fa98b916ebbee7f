use tiersim::config::{AccessFractions, GrowthConfig, LifecycleThresholds, OperationCounts, PolicyConfig};
use tiersim::paths;
use tiersim::pricing::PricingTable;
use tiersim::sim::run_policy;

fn growth(periods: u32) -> GrowthConfig {
    GrowthConfig {
        periods,
        initial_volume_gib: 1_000.0,
        monthly_growth_rate: 0.0,
        eligible_fraction: 1.0,
        ..GrowthConfig::default()
    }
}

fn no_ops() -> OperationCounts {
    OperationCounts {
        reads: 0.0,
        writes: 0.0,
    }
}

fn zero_fractions() -> AccessFractions {
    AccessFractions {
        hot: 0.0,
        cool: 0.0,
        cold: 0.0,
        archival: 0.0,
    }
}

fn lifecycle(thresholds: LifecycleThresholds) -> PolicyConfig {
    PolicyConfig::Lifecycle {
        thresholds,
        fractions: zero_fractions(),
    }
}

#[test]
fn full_linear_progression() {
    let policy = lifecycle(LifecycleThresholds::full_linear());
    let ledger = run_policy(&growth(14), &no_ops(), &PricingTable::default(), &policy).unwrap();

    // Thresholds at 30 and 90 align with period boundaries, so those
    // transitions flip whole periods.
    assert!((ledger[0].volumes.hot - 1_000.0).abs() < 1e-9);
    assert!((ledger[1].volumes.cool - 1_000.0).abs() < 1e-9);
    assert!((ledger[2].volumes.cool - 1_000.0).abs() < 1e-9);
    assert!((ledger[3].volumes.cold - 1_000.0).abs() < 1e-9);

    // Day 365 is not a period multiple: period 13 spans [360, 390) and
    // prorates 5 cold days against 25 archival days.
    let thirteenth = &ledger[12];
    assert!((thirteenth.volumes.cold - 1_000.0 * 5.0 / 30.0).abs() < 1e-6);
    assert!((thirteenth.volumes.archival - 1_000.0 * 25.0 / 30.0).abs() < 1e-6);

    let fourteenth = &ledger[13];
    assert!((fourteenth.volumes.archival - 1_000.0).abs() < 1e-9);
    assert_eq!(fourteenth.volumes.hot, 0.0);
}

#[test]
fn monotonic_aging_never_reverts_to_hotter_tier() {
    let policy = lifecycle(LifecycleThresholds::full_linear());
    let ledger = run_policy(&growth(20), &no_ops(), &PricingTable::default(), &policy).unwrap();

    // Center of mass only moves colder: hot never regrows, archival never
    // shrinks.
    for pair in ledger.windows(2) {
        assert!(pair[1].volumes.hot <= pair[0].volumes.hot + 1e-9);
        assert!(pair[1].volumes.archival >= pair[0].volumes.archival - 1e-9);
    }
}

#[test]
fn skipped_tier_is_never_occupied() {
    let policy = lifecycle(LifecycleThresholds {
        cool_days: None,
        cold_days: Some(90.0),
        archival_days: Some(365.0),
    });
    let ledger = run_policy(&growth(14), &no_ops(), &PricingTable::default(), &policy).unwrap();

    for row in &ledger {
        assert_eq!(row.volumes.cool, 0.0, "period {}", row.period);
    }
    // Age 100 falls in period 4 ([90, 120)): fully cold, straight from hot.
    assert!((ledger[3].volumes.cold - 1_000.0).abs() < 1e-9);
    assert!((ledger[2].volumes.hot - 1_000.0).abs() < 1e-9);
}

#[test]
fn direct_to_archival_preset() {
    let path = paths::preset("hot_archival").unwrap();
    let policy = lifecycle(path.thresholds);
    let ledger = run_policy(&growth(14), &no_ops(), &PricingTable::default(), &policy).unwrap();

    for row in &ledger[..12] {
        assert!((row.volumes.hot - 1_000.0).abs() < 1e-9, "period {}", row.period);
        assert_eq!(row.volumes.cool, 0.0);
        assert_eq!(row.volumes.cold, 0.0);
    }

    // Period 13 straddles day 365: 5 hot days, 25 archival days.
    let thirteenth = &ledger[12];
    assert!((thirteenth.volumes.hot - 1_000.0 * 5.0 / 30.0).abs() < 1e-6);
    assert!((thirteenth.volumes.archival - 1_000.0 * 25.0 / 30.0).abs() < 1e-6);
    assert!((ledger[13].volumes.archival - 1_000.0).abs() < 1e-9);
}

#[test]
fn retrieval_charged_from_period_end_tier() {
    let policy = PolicyConfig::Lifecycle {
        thresholds: LifecycleThresholds::full_linear(),
        fractions: AccessFractions {
            hot: 0.0,
            cool: 0.0,
            cold: 0.5,
            archival: 0.0,
        },
    };
    let pricing = PricingTable::default();
    let ledger = run_policy(&growth(12), &no_ops(), &pricing, &policy).unwrap();

    // Nothing retrieved while the data ends its periods hot or cool.
    assert_eq!(ledger[0].costs.special, 0.0);
    assert_eq!(ledger[1].costs.special, 0.0);

    // Once periods end in the cold tier, half the volume is read back each
    // month at the cold retrieval rate.
    let expected = 1_000.0 * 0.5 * pricing.retrieval.cold;
    for row in &ledger[3..12] {
        assert!(
            (row.costs.special - expected).abs() < 1e-9,
            "period {}: {}",
            row.period,
            row.costs.special
        );
    }
}

#[test]
fn transition_charges_follow_object_count() {
    let mut pricing = PricingTable::default();
    pricing.transition.from_hot = 2e-6;
    let policy = lifecycle(LifecycleThresholds {
        cool_days: Some(30.0),
        cold_days: None,
        archival_days: None,
    });
    let config = growth(3);
    let ledger = run_policy(&config, &no_ops(), &pricing, &policy).unwrap();

    let objects = 1_000.0 * 1024.0 * 1024.0 / config.avg_eligible_object_kib;
    // The single hot→cool transition bills once, in the window that closes
    // on day 30.
    assert!((ledger[0].costs.transition - objects * 2e-6).abs() < 1e-6);
    assert_eq!(ledger[1].costs.transition, 0.0);
    assert_eq!(ledger[2].costs.transition, 0.0);
}
