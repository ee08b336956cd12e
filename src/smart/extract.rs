//! SMART report interpretation
//!
//! Turns raw smartctl JSON into the normalized metric record. The
//! vendor-specific encodings live here, from the wear-level fallback chain
//! to the attribute-241 unit heuristic. Each rule applies independently; a
//! report missing any key simply leaves the corresponding field unavailable.

use crate::domain::{DeviceInfo, HealthStatus, Metric, NormalizedMetrics};
use crate::smart::attributes::{self, AttributeTable};
use serde_json::Value;

/// Attributes reporting remaining life as a normalized value, 100 = new.
/// 177 is Samsung's wear-leveling count, 231 the generic SSD-life-left,
/// 233 Intel's media-wearout indicator. First one present wins.
const WEAR_CHAIN: [u64; 3] = [
    attributes::WEAR_LEVELING,
    attributes::SSD_LIFE_LEFT,
    attributes::MEDIA_WEAROUT,
];

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse the integer prefix of a vendor temperature string,
/// e.g. "36 (Min/Max 2/56)" yields 36
fn leading_integer(s: &str) -> Option<i64> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

// =============================================================================
// Device Info
// =============================================================================

/// Pull the drive's identity fields out of a report
pub fn extract_device_info(report: &Value) -> DeviceInfo {
    let model = report["model_name"]
        .as_str()
        .or_else(|| report["model_family"].as_str())
        .map(str::to_string);

    let serial = report["serial_number"].as_str().map(str::to_string);
    let firmware = report["firmware_version"].as_str().map(str::to_string);

    let capacity_gb = report["user_capacity"]["bytes"]
        .as_u64()
        .map(|bytes| round2(bytes as f64 / 1024f64.powi(3)));

    DeviceInfo {
        model: model.into(),
        serial: serial.into(),
        firmware: firmware.into(),
        capacity_gb: capacity_gb.into(),
    }
}

// =============================================================================
// Metrics
// =============================================================================

/// Interpret the SMART attributes of one report
pub fn extract_metrics(report: &Value) -> NormalizedMetrics {
    let mut metrics = NormalizedMetrics::default();
    let table = AttributeTable::from_report(report);

    // The top-level temperature field is the most reliable source
    metrics.temperature_c = report["temperature"]["current"].as_i64().into();

    metrics.power_on_hours = table.raw_value(attributes::POWER_ON_HOURS).into();
    metrics.power_cycles = table.raw_value(attributes::POWER_CYCLES).into();

    // Attribute 194 fallback: vendors format the raw string like
    // "36 (Min/Max 2/56)"; without a string, the current reading sits in the
    // low byte of the raw value
    if !metrics.temperature_c.is_available() && table.contains(attributes::TEMPERATURE) {
        metrics.temperature_c = match table.raw_string(attributes::TEMPERATURE) {
            Some(s) => leading_integer(s).into(),
            None => table
                .raw_value(attributes::TEMPERATURE)
                .map(|raw| (raw & 0xFF) as i64)
                .into(),
        };
    }

    metrics.reallocated_sectors = table.raw_value(attributes::REALLOCATED_SECTORS).into();
    metrics.pending_sectors = table.raw_value(attributes::PENDING_SECTORS).into();
    metrics.uncorrectable_sectors = table.raw_value(attributes::UNCORRECTABLE_SECTORS).into();

    // Remaining spare area is the normalized score, not the raw counter
    metrics.reserved_space_pct = table.normalized(attributes::RESERVED_SPACE).into();

    // Invert remaining life into wear consumed; stop at the first attribute
    // the drive reports, never average across them
    for id in WEAR_CHAIN {
        if table.contains(id) {
            metrics.wear_level_pct = table
                .normalized(id)
                .map(|remaining| 100u64.saturating_sub(remaining))
                .into();
            break;
        }
    }

    // Total data written. The unit of attribute 241 varies by vendor: raw
    // values above 100,000 are taken to be LBA counts (Samsung/Intel style),
    // smaller ones to be GB already (WD/Kingston/SanDisk style). The cutoff
    // is a heuristic with no vendor table behind it and can misclassify
    // drives near the boundary.
    if table.contains(attributes::TOTAL_LBAS_WRITTEN) {
        if let Some(raw) = table.raw_value(attributes::TOTAL_LBAS_WRITTEN) {
            metrics.total_lbas_written = Metric::Value(raw);
            metrics.total_tb_written = Metric::Value(if raw > 100_000 {
                round2(raw as f64 * 512.0 / 1024f64.powi(4))
            } else {
                round2(raw as f64 / 1024.0)
            });
        }
    } else if table.contains(attributes::HOST_WRITES_32MIB) {
        // Crucial/Micron count 32 MiB units through 246 instead
        if let Some(raw) = table.raw_value(attributes::HOST_WRITES_32MIB) {
            metrics.total_lbas_written = Metric::Value(raw);
            metrics.total_tb_written = Metric::Value(round2(raw as f64 * 32.0 / (1024.0 * 1024.0)));
        }
    }

    metrics
}

// =============================================================================
// Health and Self-Test Status
// =============================================================================

/// Overall pass/fail self-assessment from the report
pub fn extract_health_status(report: &Value) -> HealthStatus {
    match report.get("smart_status") {
        Some(status) => {
            if status["passed"].as_bool().unwrap_or(false) {
                HealthStatus::Passed
            } else {
                HealthStatus::Failed
            }
        }
        None => HealthStatus::Unknown,
    }
}

/// Verdict of the most recent self-test, when the drive reports one
pub fn extract_self_test_result(report: &Value) -> HealthStatus {
    match report["ata_smart_data"]["self_test"]["status"].get("passed") {
        Some(passed) => {
            if passed.as_bool().unwrap_or(false) {
                HealthStatus::Passed
            } else {
                HealthStatus::Failed
            }
        }
        None => HealthStatus::Unknown,
    }
}
