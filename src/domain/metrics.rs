//! Normalized drive-health metrics
//!
//! Every field extracted from a SMART report is either a concrete value or
//! explicitly unavailable. Vendors disagree about which attributes exist, so
//! absence is a normal state that downstream display and CSV code must render
//! uniformly, never a missing key or a null.

use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// Metric
// =============================================================================

/// A health indicator that a drive may or may not report
///
/// Renders and serializes as the literal `N/A` when unavailable, so terminal
/// output and CSV cells stay structurally uniform across vendors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric<T> {
    Value(T),
    Unavailable,
}

impl<T> Metric<T> {
    /// Inner value, if present
    pub fn value(&self) -> Option<&T> {
        match self {
            Metric::Value(v) => Some(v),
            Metric::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Metric::Value(_))
    }

    /// Map the inner value, preserving unavailability
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Metric<U> {
        match self {
            Metric::Value(v) => Metric::Value(f(v)),
            Metric::Unavailable => Metric::Unavailable,
        }
    }
}

impl<T> Default for Metric<T> {
    fn default() -> Self {
        Metric::Unavailable
    }
}

impl<T> From<Option<T>> for Metric<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Metric::Value(v),
            None => Metric::Unavailable,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Metric<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{}", v),
            Metric::Unavailable => write!(f, "N/A"),
        }
    }
}

impl<T: Serialize> Serialize for Metric<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Metric::Value(v) => v.serialize(serializer),
            Metric::Unavailable => serializer.serialize_str("N/A"),
        }
    }
}

// =============================================================================
// Health Status
// =============================================================================

/// Drive firmware's overall pass/fail self-assessment
///
/// Also used for the most recent self-test verdict, which reports the same
/// tri-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    #[serde(rename = "PASSED")]
    Passed,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "N/A")]
    Unknown,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Passed => write!(f, "PASSED"),
            HealthStatus::Failed => write!(f, "FAILED"),
            HealthStatus::Unknown => write!(f, "N/A"),
        }
    }
}

// =============================================================================
// Device Identity
// =============================================================================

/// Identity fields reported by the drive itself
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfo {
    /// Model name, falling back to model family when the name is absent
    pub model: Metric<String>,
    pub serial: Metric<String>,
    pub firmware: Metric<String>,
    /// User capacity in GB, rounded to 2 decimals
    pub capacity_gb: Metric<f64>,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            model: Metric::Unavailable,
            serial: Metric::Unavailable,
            firmware: Metric::Unavailable,
            capacity_gb: Metric::Unavailable,
        }
    }
}

// =============================================================================
// Normalized Metrics
// =============================================================================

/// Flat record of health indicators extracted from one SMART report
///
/// Starts with every field unavailable; the extractor fills in whatever the
/// drive actually reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedMetrics {
    pub power_on_hours: Metric<u64>,
    pub power_cycles: Metric<u64>,
    /// Current temperature in degrees Celsius
    pub temperature_c: Metric<i64>,
    pub reallocated_sectors: Metric<u64>,
    pub pending_sectors: Metric<u64>,
    pub uncorrectable_sectors: Metric<u64>,
    /// Normalized value of attribute 170 (remaining spare area)
    pub reserved_space_pct: Metric<u64>,
    /// Write endurance consumed, 0 = new, 100 = worn out
    pub wear_level_pct: Metric<u64>,
    /// Raw counter behind the total-written figure, unit varies by vendor
    pub total_lbas_written: Metric<u64>,
    /// Lifetime host writes in TB, rounded to 2 decimals
    pub total_tb_written: Metric<f64>,
}
