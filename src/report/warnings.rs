//! Threshold rules over a normalized metric record
//!
//! Pure evaluation with a fixed rule order, so the warnings column reads the
//! same way across every row of a batch.

use crate::domain::{HealthStatus, Metric, NormalizedMetrics, Warning};

/// Temperature above this many degrees Celsius is flagged
pub const TEMPERATURE_WARN_C: i64 = 70;
/// Wear consumed above this percentage is flagged
pub const WEAR_WARN_PCT: u64 = 80;

/// Derive the warning list for one test
///
/// Rules fire independently, in order: health verdict, the three sector
/// counters, temperature, wear. Unavailable values skip their rule without
/// comment.
pub fn evaluate_warnings(metrics: &NormalizedMetrics, health: HealthStatus) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if health == HealthStatus::Failed {
        warnings.push(Warning::HealthFailed);
    }

    if let Metric::Value(n) = metrics.reallocated_sectors {
        if n > 0 {
            warnings.push(Warning::ReallocatedSectors(n));
        }
    }
    if let Metric::Value(n) = metrics.pending_sectors {
        if n > 0 {
            warnings.push(Warning::PendingSectors(n));
        }
    }
    if let Metric::Value(n) = metrics.uncorrectable_sectors {
        if n > 0 {
            warnings.push(Warning::UncorrectableSectors(n));
        }
    }

    if let Metric::Value(t) = metrics.temperature_c {
        if t > TEMPERATURE_WARN_C {
            warnings.push(Warning::HighTemperature(t));
        }
    }

    if let Metric::Value(w) = metrics.wear_level_pct {
        if w > WEAR_WARN_PCT {
            warnings.push(Warning::HighWear(w));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::render_warnings;
    use crate::smart::{extract_health_status, extract_metrics};
    use serde_json::json;

    #[test]
    fn test_failed_health_alone() {
        let metrics = NormalizedMetrics::default();
        let warnings = evaluate_warnings(&metrics, HealthStatus::Failed);
        assert_eq!(warnings, vec![Warning::HealthFailed]);
    }

    #[test]
    fn test_reallocated_sectors_alone() {
        let metrics = NormalizedMetrics {
            reallocated_sectors: Metric::Value(3),
            pending_sectors: Metric::Value(0),
            uncorrectable_sectors: Metric::Value(0),
            ..Default::default()
        };
        let warnings = evaluate_warnings(&metrics, HealthStatus::Passed);
        assert_eq!(warnings, vec![Warning::ReallocatedSectors(3)]);
    }

    #[test]
    fn test_all_clear_renders_none_marker() {
        let metrics = NormalizedMetrics {
            reallocated_sectors: Metric::Value(0),
            pending_sectors: Metric::Value(0),
            uncorrectable_sectors: Metric::Value(0),
            temperature_c: Metric::Value(36),
            wear_level_pct: Metric::Value(10),
            ..Default::default()
        };
        let warnings = evaluate_warnings(&metrics, HealthStatus::Passed);
        assert!(warnings.is_empty());
        assert_eq!(render_warnings(&warnings), "None");
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let metrics = NormalizedMetrics {
            reallocated_sectors: Metric::Value(3),
            pending_sectors: Metric::Value(1),
            uncorrectable_sectors: Metric::Value(2),
            temperature_c: Metric::Value(75),
            wear_level_pct: Metric::Value(90),
            ..Default::default()
        };
        let warnings = evaluate_warnings(&metrics, HealthStatus::Failed);
        assert_eq!(
            warnings,
            vec![
                Warning::HealthFailed,
                Warning::ReallocatedSectors(3),
                Warning::PendingSectors(1),
                Warning::UncorrectableSectors(2),
                Warning::HighTemperature(75),
                Warning::HighWear(90),
            ]
        );
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let metrics = NormalizedMetrics {
            temperature_c: Metric::Value(70),
            wear_level_pct: Metric::Value(80),
            ..Default::default()
        };
        assert!(evaluate_warnings(&metrics, HealthStatus::Passed).is_empty());

        let metrics = NormalizedMetrics {
            temperature_c: Metric::Value(71),
            wear_level_pct: Metric::Value(81),
            ..Default::default()
        };
        assert_eq!(
            evaluate_warnings(&metrics, HealthStatus::Passed),
            vec![Warning::HighTemperature(71), Warning::HighWear(81)]
        );
    }

    #[test]
    fn test_unavailable_values_skip_their_rules() {
        let warnings = evaluate_warnings(&NormalizedMetrics::default(), HealthStatus::Unknown);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_healthy_samsung_report_end_to_end() {
        let report = json!({
            "model_name": "Samsung SSD 860",
            "smart_status": {"passed": true},
            "ata_smart_attributes": {"table": [
                {"id": 177, "value": 90, "raw": {"value": 112}},
                {"id": 241, "value": 99, "raw": {"value": 524_288_000u64}},
            ]}
        });
        let metrics = extract_metrics(&report);
        let health = extract_health_status(&report);
        let warnings = evaluate_warnings(&metrics, health);
        assert_eq!(render_warnings(&warnings), "None");
    }
}
