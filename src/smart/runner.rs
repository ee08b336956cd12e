//! smartctl invocation
//!
//! Shells out to smartctl for one already-validated device path and hands
//! back the parsed report. Spawn and parse failures degrade to "no data";
//! nothing at this boundary terminates the session.

use serde_json::Value;
use std::process::Command;
use tracing::{debug, warn};

/// Outcome of one smartctl invocation
#[derive(Debug)]
pub struct SmartctlReport {
    /// Parsed JSON document, `None` when the tool failed or emitted garbage
    pub json: Option<Value>,
    /// smartctl exit code, -1 when the process could not be spawned
    pub exit_code: i32,
}

/// Check that smartctl is installed and runnable
pub fn smartctl_available() -> bool {
    Command::new("smartctl")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Request an extended JSON report for one device
///
/// smartctl exits non-zero for all sorts of warnings while still printing a
/// usable report, so the exit code is passed through rather than judged here.
pub fn run_smartctl(device: &str) -> SmartctlReport {
    debug!(device, "invoking smartctl -x -j");

    let output = match Command::new("smartctl").args(["-x", "-j", device]).output() {
        Ok(output) => output,
        Err(e) => {
            warn!(device, error = %e, "failed to spawn smartctl");
            println!("ERROR: Failed to execute smartctl: {}", e);
            return SmartctlReport {
                json: None,
                exit_code: -1,
            };
        }
    };

    let exit_code = output.status.code().unwrap_or(-1);

    match serde_json::from_slice(&output.stdout) {
        Ok(json) => SmartctlReport {
            json: Some(json),
            exit_code,
        },
        Err(e) => {
            warn!(device, error = %e, "smartctl output was not valid JSON");
            println!("ERROR: Failed to parse smartctl JSON output: {}", e);
            SmartctlReport {
                json: None,
                exit_code,
            }
        }
    }
}
