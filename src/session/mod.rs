//! Interactive test session
//!
//! Owns the main loop: list devices, prompt, validate, test, report,
//! persist, repeat. Session state is the CSV path fixed at start, the
//! remembered last device, and a count of drives tested.

pub mod prompt;

use crate::device::{list_block_devices, validate_device_path};
use crate::domain::TestResult;
use crate::error::{Error, Result};
use crate::report::{append_result, evaluate_warnings, print_banner, print_test_result};
use crate::session::prompt::{confirm, prompt_device, DeviceChoice};
use crate::smart::{
    extract_device_info, extract_health_status, extract_metrics, extract_self_test_result,
    run_smartctl,
};
use chrono::Local;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct Session {
    csv_path: PathBuf,
    last_device: Option<String>,
    drives_tested: u32,
}

impl Session {
    /// Create a session whose CSV file is named by the current time
    pub fn new(output_dir: &Path) -> Self {
        let filename = format!(
            "ssd_test_results_{}.csv",
            Local::now().format("%Y%m%d_%H%M%S")
        );
        Self {
            csv_path: output_dir.join(filename),
            last_device: None,
            drives_tested: 0,
        }
    }

    /// Run the interactive loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        loop {
            println!();
            print_banner("AVAILABLE BLOCK DEVICES");

            let devices = match list_block_devices() {
                Ok(devices) => devices,
                Err(e) => {
                    println!("ERROR: {}", e);
                    Vec::new()
                }
            };

            if devices.is_empty() {
                println!("{}", "No suitable block devices found.".yellow());
                println!();
                if confirm("Refresh device list?")? {
                    continue;
                }
                break;
            }

            let device_paths: Vec<String> = devices.iter().map(|d| d.path()).collect();
            let last_available = match &self.last_device {
                Some(last) if device_paths.contains(last) => Some(last.clone()),
                _ => None,
            };

            for device in &devices {
                let path = device.path();
                if Some(path.as_str()) == last_available.as_deref() {
                    println!(
                        "  {} ({}) {}",
                        path.cyan(),
                        device.size,
                        "[LAST USED]".green()
                    );
                } else {
                    println!("  {} ({})", path, device.size);
                }
            }

            let device = match prompt_device(last_available.as_deref())? {
                DeviceChoice::Quit => break,
                DeviceChoice::Device(path) | DeviceChoice::UseLast(path) => path,
            };

            if let Err(e) = validate_device_path(&device) {
                println!("{}", format!("ERROR: {}", e).red());
                println!("Expected format: /dev/sd[a-z]");
                continue;
            }

            match self.test_device(&device) {
                Ok(result) => {
                    print_test_result(&result);
                    match append_result(&self.csv_path, &result) {
                        Ok(()) => println!(
                            "\n{} {}",
                            "Results saved to:".green(),
                            self.csv_path.display()
                        ),
                        Err(e) => {
                            warn!(error = %e, category = ?e.category(), "could not persist result");
                            println!("{}", format!("ERROR: Failed to save to CSV: {}", e).red());
                        }
                    }
                    self.drives_tested += 1;
                    self.last_device = Some(device);
                }
                Err(e) => {
                    println!("{}", "ERROR: Failed to get smartctl data".red());
                    warn!(device = %device, error = %e, category = ?e.category(), "test yielded no result");
                }
            }

            println!();
            println!("{}", "=".repeat(60));
            if !confirm("Test another drive?")? {
                break;
            }
        }

        self.print_summary();
        Ok(())
    }

    /// Run smartctl against one validated device and assemble the result
    fn test_device(&self, device: &str) -> Result<TestResult> {
        println!("\n{} {}", "Testing drive:".cyan(), device.bold());
        println!("{}", "Running smartctl commands...".cyan());

        let report = run_smartctl(device);
        let json = report.json.ok_or_else(|| Error::NoReport {
            device: device.to_string(),
        })?;

        let device_info = extract_device_info(&json);
        let metrics = extract_metrics(&json);
        let health_status = extract_health_status(&json);
        let self_test_result = extract_self_test_result(&json);
        let warnings = evaluate_warnings(&metrics, health_status);

        info!(device, health = %health_status, "drive tested");

        Ok(TestResult::new(
            device_info,
            metrics,
            health_status,
            self_test_result,
            warnings,
        ))
    }

    fn print_summary(&self) {
        println!();
        print_banner("TESTING COMPLETE");
        println!(
            "Total drives tested: {}",
            self.drives_tested.to_string().green()
        );
        if self.drives_tested > 0 {
            println!(
                "Results saved to: {}",
                self.csv_path.display().to_string().cyan()
            );
        }
        println!("\nThank you for using SSD Testing Script!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_filename_is_stamped_at_session_start() {
        let session = Session::new(Path::new("/tmp"));
        let name = session
            .csv_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .to_string();
        assert!(name.starts_with("ssd_test_results_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "ssd_test_results_YYYYMMDD_HHMMSS.csv".len());
    }

    #[test]
    fn test_session_starts_with_no_history() {
        let session = Session::new(Path::new("."));
        assert_eq!(session.last_device, None);
        assert_eq!(session.drives_tested, 0);
    }
}
