//! Terminal rendering
//!
//! Fixed-layout result block and session banners. Color carries the verdict
//! at a glance; red marks anything that should stop a resale, yellow the
//! caution band below it.

use crate::domain::{render_warnings, HealthStatus, Metric, TestResult, Warning};
use crate::report::warnings::{TEMPERATURE_WARN_C, WEAR_WARN_PCT};
use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// Temperature above this is shown in yellow before the red threshold
const TEMPERATURE_CAUTION_C: i64 = 60;
/// Wear above this is shown in yellow before the red threshold
const WEAR_CAUTION_PCT: u64 = 50;

/// Print a bold banner line between full-width rules
pub fn print_banner(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH).bold());
    println!("{}", title.bold());
    println!("{}", "=".repeat(RULE_WIDTH).bold());
}

/// Health verdict colored by outcome
pub fn format_health(health: HealthStatus) -> String {
    match health {
        HealthStatus::Passed => health.to_string().green().to_string(),
        HealthStatus::Failed => health.to_string().red().to_string(),
        HealthStatus::Unknown => health.to_string(),
    }
}

/// Temperature with the degree suffix, bare N/A when unavailable
pub fn format_temperature(temp: Metric<i64>) -> String {
    match temp {
        Metric::Value(t) if t > TEMPERATURE_WARN_C => format!("{}°C", t).red().to_string(),
        Metric::Value(t) if t > TEMPERATURE_CAUTION_C => format!("{}°C", t).yellow().to_string(),
        Metric::Value(t) => format!("{}°C", t),
        Metric::Unavailable => temp.to_string(),
    }
}

/// Wear consumed with the percent suffix, bare N/A when unavailable
pub fn format_wear(wear: Metric<u64>) -> String {
    match wear {
        Metric::Value(w) if w > WEAR_WARN_PCT => format!("{}%", w).red().to_string(),
        Metric::Value(w) if w > WEAR_CAUTION_PCT => format!("{}%", w).yellow().to_string(),
        Metric::Value(w) => format!("{}%", w).green().to_string(),
        Metric::Unavailable => wear.to_string(),
    }
}

/// Sector counters: any nonzero count is a red flag
pub fn format_sector_count(count: Metric<u64>) -> String {
    match count {
        Metric::Value(n) if n > 0 => n.to_string().red().to_string(),
        Metric::Value(n) => n.to_string().green().to_string(),
        Metric::Unavailable => count.to_string(),
    }
}

/// Warnings line: green literal None or the red tag list
pub fn format_warnings(warnings: &[Warning]) -> String {
    let rendered = render_warnings(warnings);
    if warnings.is_empty() {
        rendered.green().to_string()
    } else {
        rendered.red().to_string()
    }
}

/// Print the fixed-layout result block for one tested drive
pub fn print_test_result(result: &TestResult) {
    println!();
    print_banner("DRIVE TEST RESULTS");
    println!("Model:           {}", result.model.to_string().cyan());
    println!("Serial:          {}", result.serial);
    println!("Firmware:        {}", result.firmware);
    println!("Capacity:        {} GB", result.capacity_gb);
    println!("Health Status:   {}", format_health(result.health_status));
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("Power-On Hours:  {}", result.power_on_hours);
    println!("Power Cycles:    {}", result.power_cycles);
    println!("Temperature:     {}", format_temperature(result.temperature_c));
    println!("Total Written:   {} TB", result.total_tb_written);
    println!("Wear Level:      {}", format_wear(result.wear_level_pct));
    println!("{}", "-".repeat(RULE_WIDTH));
    println!(
        "Reallocated:     {}",
        format_sector_count(result.reallocated_sectors)
    );
    println!(
        "Pending:         {}",
        format_sector_count(result.pending_sectors)
    );
    println!(
        "Uncorrectable:   {}",
        format_sector_count(result.uncorrectable_sectors)
    );
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("Warnings:        {}", format_warnings(&result.warnings));
    println!("{}", "=".repeat(RULE_WIDTH).bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::control;

    fn disable_colors() {
        control::set_override(false);
    }

    #[test]
    fn test_health_text() {
        disable_colors();
        assert_eq!(format_health(HealthStatus::Passed), "PASSED");
        assert_eq!(format_health(HealthStatus::Failed), "FAILED");
        assert_eq!(format_health(HealthStatus::Unknown), "N/A");
    }

    #[test]
    fn test_temperature_suffix_only_when_present() {
        disable_colors();
        assert_eq!(format_temperature(Metric::Value(36)), "36°C");
        assert_eq!(format_temperature(Metric::Value(65)), "65°C");
        assert_eq!(format_temperature(Metric::Value(75)), "75°C");
        assert_eq!(format_temperature(Metric::Unavailable), "N/A");
    }

    #[test]
    fn test_wear_suffix_only_when_present() {
        disable_colors();
        assert_eq!(format_wear(Metric::Value(10)), "10%");
        assert_eq!(format_wear(Metric::Value(85)), "85%");
        assert_eq!(format_wear(Metric::Unavailable), "N/A");
    }

    #[test]
    fn test_sector_counts() {
        disable_colors();
        assert_eq!(format_sector_count(Metric::Value(0)), "0");
        assert_eq!(format_sector_count(Metric::Value(3)), "3");
        assert_eq!(format_sector_count(Metric::Unavailable), "N/A");
    }

    #[test]
    fn test_warnings_line() {
        disable_colors();
        assert_eq!(format_warnings(&[]), "None");
        assert_eq!(
            format_warnings(&[Warning::HighWear(85)]),
            "HIGH_WEAR:85%"
        );
    }

    #[test]
    fn test_result_block_prints_without_panic() {
        disable_colors();
        let result = TestResult::new(
            Default::default(),
            Default::default(),
            HealthStatus::Unknown,
            HealthStatus::Unknown,
            vec![],
        );
        print_test_result(&result);
    }
}
