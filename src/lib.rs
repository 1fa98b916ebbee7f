//! Cohort-based cost simulator for tiered cloud object storage.
//!
//! Projects the monthly cost of a growing data estate under two competing
//! management policies: access-driven auto-tiering (Autoclass) and fixed
//! time-based tiering (Lifecycle). Data is tracked as cohorts that age and
//! reclassify across four storage tiers; each simulated period produces one
//! ledger row of tier volumes and cost components.
//!
//! ```rust
//! use tiersim::config::{GrowthConfig, OperationCounts, PolicyConfig};
//! use tiersim::pricing::PricingTable;
//! use tiersim::sim::run_comparison;
//!
//! let growth = GrowthConfig::default();
//! let operations = OperationCounts::default();
//! let pricing = PricingTable::default();
//!
//! let (autoclass, lifecycle) = run_comparison(
//!     &growth,
//!     &operations,
//!     &pricing,
//!     &PolicyConfig::default_autoclass(),
//!     &PolicyConfig::default_lifecycle(),
//! )?;
//! assert_eq!(autoclass.len(), lifecycle.len());
//! # Ok::<(), tiersim::Error>(())
//! ```

pub mod analysis;
pub mod classify;
pub mod cohort;
pub mod compact;
pub mod config;
pub mod cost;
pub mod error;
pub mod growth;
pub mod paths;
pub mod pricing;
pub mod sim;
pub mod tier;

pub use error::{Error, Result};
pub use sim::{run_comparison, run_policy, Ledger, PeriodResult, Simulation};
pub use tier::{StorageTier, TierVolumes};
