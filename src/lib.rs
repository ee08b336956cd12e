//! SSD Triage
//!
//! Interactive smartctl-driven health triage for used SATA SSDs attached
//! through USB bridges. Each tested drive yields one fixed-shape record that
//! is rendered to the terminal and appended to a per-session CSV log, so a
//! batch of secondhand drives can be verified one by one and compared later.
//!
//! # Pipeline
//!
//! ```text
//! lsblk ──▶ device selection ──▶ smartctl -x -j ──▶ attribute extraction
//!                                                        │
//!                                      warnings ◀────────┘
//!                                         │
//!                            terminal block + CSV row
//! ```
//!
//! # Modules
//!
//! - [`device`]: Block-device enumeration and path validation
//! - [`smart`]: smartctl invocation and report interpretation
//! - [`report`]: Warning thresholds, terminal rendering, CSV persistence
//! - [`session`]: The interactive loop and its state
//! - [`domain`]: Core value types
//! - [`error`]: Error types and handling

pub mod device;
pub mod domain;
pub mod error;
pub mod report;
pub mod session;
pub mod smart;

// Re-export commonly used types
pub use device::{list_block_devices, validate_device_path, BlockDevice};
pub use domain::{DeviceInfo, HealthStatus, Metric, NormalizedMetrics, TestResult, Warning};
pub use error::{Error, ErrorCategory, Result};
pub use report::{append_result, evaluate_warnings, print_banner, print_test_result};
pub use session::Session;
pub use smart::{
    extract_device_info, extract_health_status, extract_metrics, extract_self_test_result,
    run_smartctl, smartctl_available, SmartctlReport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
