//! smartctl integration
//!
//! Runs the diagnostic tool against one device and interprets its JSON
//! report into the normalized domain types.

pub mod attributes;
pub mod extract;
pub mod runner;

pub use extract::{
    extract_device_info, extract_health_status, extract_metrics, extract_self_test_result,
};
pub use runner::{run_smartctl, smartctl_available, SmartctlReport};
