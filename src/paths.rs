//! Named lifecycle path presets.
//!
//! A convenience catalog of common transition-day combinations, resolved
//! into the generic optional-threshold form before reaching the engine. The
//! engine itself never sees preset names.

use crate::config::LifecycleThresholds;

/// A preset transition path, identified by a stable id.
#[derive(Debug, Clone, Copy)]
pub struct LifecyclePath {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub thresholds: LifecycleThresholds,
}

const fn thresholds(
    cool_days: Option<f64>,
    cold_days: Option<f64>,
    archival_days: Option<f64>,
) -> LifecycleThresholds {
    LifecycleThresholds {
        cool_days,
        cold_days,
        archival_days,
    }
}

/// Every known preset: linear paths, direct skip paths, and partial paths
/// for data that already starts colder than hot.
pub const PRESETS: &[LifecyclePath] = &[
    LifecyclePath {
        id: "full_linear",
        name: "hot -> cool -> cold -> archival",
        description: "Traditional four-tier progression through every storage class",
        thresholds: thresholds(Some(30.0), Some(90.0), Some(365.0)),
    },
    LifecyclePath {
        id: "hot_cool_cold",
        name: "hot -> cool -> cold",
        description: "Stop at cold storage, no archival transition",
        thresholds: thresholds(Some(30.0), Some(90.0), None),
    },
    LifecyclePath {
        id: "hot_cool_archival",
        name: "hot -> cool -> archival",
        description: "Skip cold, go directly from cool to archival",
        thresholds: thresholds(Some(30.0), None, Some(180.0)),
    },
    LifecyclePath {
        id: "hot_cool",
        name: "hot -> cool",
        description: "Stop at cool storage, no further transitions",
        thresholds: thresholds(Some(30.0), None, None),
    },
    LifecyclePath {
        id: "hot_cold_archival",
        name: "hot -> cold -> archival",
        description: "Skip cool entirely, then archival",
        thresholds: thresholds(None, Some(90.0), Some(365.0)),
    },
    LifecyclePath {
        id: "hot_cold",
        name: "hot -> cold",
        description: "Skip cool, go directly to cold and stop",
        thresholds: thresholds(None, Some(90.0), None),
    },
    LifecyclePath {
        id: "hot_archival",
        name: "hot -> archival",
        description: "Most aggressive: straight to archival storage",
        thresholds: thresholds(None, None, Some(365.0)),
    },
    LifecyclePath {
        id: "cool_cold_archival",
        name: "cool -> cold -> archival",
        description: "Data already cool, continue the progression",
        thresholds: thresholds(None, Some(90.0), Some(365.0)),
    },
    LifecyclePath {
        id: "cool_archival",
        name: "cool -> archival",
        description: "Data already cool, skip cold",
        thresholds: thresholds(None, None, Some(180.0)),
    },
    LifecyclePath {
        id: "cold_archival",
        name: "cold -> archival",
        description: "Data already cold, final transition only",
        thresholds: thresholds(None, None, Some(365.0)),
    },
];

/// Look up a preset by id.
pub fn preset(id: &str) -> Option<&'static LifecyclePath> {
    PRESETS.iter().find(|path| path.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_validate() {
        for path in PRESETS {
            assert!(path.thresholds.validate().is_ok(), "{}", path.id);
        }
    }

    #[test]
    fn test_preset_lookup() {
        let path = preset("hot_archival").unwrap();
        assert_eq!(path.thresholds.cool_days, None);
        assert_eq!(path.thresholds.cold_days, None);
        assert_eq!(path.thresholds.archival_days, Some(365.0));

        assert!(preset("unknown").is_none());
    }

    #[test]
    fn test_preset_ids_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
