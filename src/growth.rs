//! Growth and ingestion: how much new data arrives each period.
//!
//! Period 1 injects the configured initial volume in full. Every later
//! period injects `running_total × growth_rate`, so growth compounds on the
//! whole body of stored data rather than on the initial upload. The new
//! volume splits into a tiering-eligible portion (large objects) and a
//! permanently-hot ineligible portion (small objects).

use crate::config::GrowthConfig;

pub const KIB_PER_GIB: f64 = 1024.0 * 1024.0;

/// One period's arrivals, plus the Class A operations spent uploading them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodIntake {
    pub eligible_volume: f64,
    pub eligible_objects: f64,
    pub ineligible_volume: f64,
    pub ineligible_objects: f64,
    pub upload_ops: f64,
}

/// Class A operations needed to upload one object of the given size.
///
/// Objects above the multipart threshold upload as one initiate, N part
/// uploads, and one complete; smaller objects are a single operation.
pub fn upload_ops_per_object(size_kib: f64, threshold_kib: f64, part_kib: f64) -> f64 {
    if size_kib <= threshold_kib || part_kib <= 0.0 {
        return 1.0;
    }
    2.0 + (size_kib / part_kib).ceil()
}

/// Compute the arrivals for `period`, given the total volume already stored
/// at the start of the period.
pub fn period_intake(config: &GrowthConfig, period: u32, total_at_start: f64) -> PeriodIntake {
    let new_volume = if period == 1 {
        config.initial_volume_gib
    } else if config.monthly_growth_rate > 0.0 {
        total_at_start * config.monthly_growth_rate
    } else {
        0.0
    };

    let eligible_volume = new_volume * config.eligible_fraction;
    let ineligible_volume = new_volume - eligible_volume;

    let eligible_objects = objects_for(eligible_volume, config.avg_eligible_object_kib);
    let ineligible_objects = objects_for(ineligible_volume, config.avg_ineligible_object_kib);

    let eligible_ops = upload_ops_per_object(
        config.avg_eligible_object_kib,
        config.multipart_threshold_kib,
        config.multipart_part_kib,
    );
    let upload_ops = eligible_objects * eligible_ops + ineligible_objects;

    PeriodIntake {
        eligible_volume,
        eligible_objects,
        ineligible_volume,
        ineligible_objects,
        upload_ops,
    }
}

fn objects_for(volume_gib: f64, avg_object_kib: f64) -> f64 {
    if avg_object_kib <= 0.0 {
        return 0.0;
    }
    volume_gib * KIB_PER_GIB / avg_object_kib
}
