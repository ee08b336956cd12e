//! Per-drive test results
//!
//! A `TestResult` is assembled once per successful diagnostic run, shown on
//! the terminal, appended to the session CSV, and then discarded. Only the
//! CSV file and the remembered last device outlive a loop iteration.

use crate::domain::metrics::{DeviceInfo, HealthStatus, Metric, NormalizedMetrics};
use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// Warnings
// =============================================================================

/// A threshold violation worth flagging on the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    HealthFailed,
    ReallocatedSectors(u64),
    PendingSectors(u64),
    UncorrectableSectors(u64),
    HighTemperature(i64),
    HighWear(u64),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::HealthFailed => write!(f, "SMART_HEALTH_FAILED"),
            Warning::ReallocatedSectors(n) => write!(f, "REALLOCATED_SECTORS:{}", n),
            Warning::PendingSectors(n) => write!(f, "PENDING_SECTORS:{}", n),
            Warning::UncorrectableSectors(n) => write!(f, "UNCORRECTABLE_SECTORS:{}", n),
            Warning::HighTemperature(t) => write!(f, "HIGH_TEMP:{}C", t),
            Warning::HighWear(w) => write!(f, "HIGH_WEAR:{}%", w),
        }
    }
}

/// Join warnings for display and CSV, or the literal `None` when clear
///
/// Never empty, so the warnings cell and terminal line always carry text.
pub fn render_warnings(warnings: &[Warning]) -> String {
    if warnings.is_empty() {
        "None".to_string()
    } else {
        warnings
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =============================================================================
// Test Result
// =============================================================================

/// One completed drive test
///
/// Field order is the CSV column order. All 18 fields are always populated,
/// with `N/A` standing in for anything the drive did not report.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Local>,
    pub model: Metric<String>,
    pub serial: Metric<String>,
    pub firmware: Metric<String>,
    pub capacity_gb: Metric<f64>,
    pub health_status: HealthStatus,
    pub power_on_hours: Metric<u64>,
    pub power_cycles: Metric<u64>,
    pub temperature_c: Metric<i64>,
    pub total_lbas_written: Metric<u64>,
    pub total_tb_written: Metric<f64>,
    pub wear_level_pct: Metric<u64>,
    pub reserved_space_pct: Metric<u64>,
    pub reallocated_sectors: Metric<u64>,
    pub pending_sectors: Metric<u64>,
    pub uncorrectable_sectors: Metric<u64>,
    pub self_test_result: HealthStatus,
    #[serde(serialize_with = "serialize_warnings")]
    pub warnings: Vec<Warning>,
}

impl TestResult {
    /// Assemble a result from the pieces extracted out of one SMART report
    ///
    /// The timestamp is taken at assembly time.
    pub fn new(
        device: DeviceInfo,
        metrics: NormalizedMetrics,
        health_status: HealthStatus,
        self_test_result: HealthStatus,
        warnings: Vec<Warning>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            model: device.model,
            serial: device.serial,
            firmware: device.firmware,
            capacity_gb: device.capacity_gb,
            health_status,
            power_on_hours: metrics.power_on_hours,
            power_cycles: metrics.power_cycles,
            temperature_c: metrics.temperature_c,
            total_lbas_written: metrics.total_lbas_written,
            total_tb_written: metrics.total_tb_written,
            wear_level_pct: metrics.wear_level_pct,
            reserved_space_pct: metrics.reserved_space_pct,
            reallocated_sectors: metrics.reallocated_sectors,
            pending_sectors: metrics.pending_sectors,
            uncorrectable_sectors: metrics.uncorrectable_sectors,
            self_test_result,
            warnings,
        }
    }
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Local>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format("%Y-%m-%d %H:%M:%S"))
}

fn serialize_warnings<S: Serializer>(
    warnings: &[Warning],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&render_warnings(warnings))
}
