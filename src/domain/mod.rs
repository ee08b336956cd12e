//! Domain layer - Core value types for drive health triage
//!
//! Defines the unavailability sentinel, the normalized metric record, and the
//! per-drive test result shared by every downstream consumer.

pub mod metrics;
pub mod result;

pub use metrics::{DeviceInfo, HealthStatus, Metric, NormalizedMetrics};
pub use result::{render_warnings, TestResult, Warning};
