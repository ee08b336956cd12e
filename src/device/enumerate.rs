//! Block device enumeration
//!
//! Lists whole-disk `sdX` devices via lsblk. USB-SATA bridges surface as
//! plain SCSI disks, so the sd prefix is the right coarse filter here; the
//! whole-disk flag and the type column drop partitions and loop devices.

use crate::error::{Error, Result};
use std::process::Command;
use tracing::debug;

/// One candidate drive as listed by lsblk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDevice {
    /// Kernel name, e.g. "sdb"
    pub name: String,
    /// Human-readable size as lsblk prints it, e.g. "465.8G"
    pub size: String,
}

impl BlockDevice {
    /// Full device path, e.g. "/dev/sdb"
    pub fn path(&self) -> String {
        format!("/dev/{}", self.name)
    }
}

/// List whole-disk sd* devices on this machine
pub fn list_block_devices() -> Result<Vec<BlockDevice>> {
    let output = Command::new("lsblk")
        .args(["-d", "-n", "-o", "NAME,SIZE,TYPE"])
        .output()
        .map_err(|e| Error::DeviceEnumeration(format!("failed to run lsblk: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::DeviceEnumeration(format!(
            "lsblk exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let devices = parse_lsblk(&String::from_utf8_lossy(&output.stdout));
    debug!(count = devices.len(), "enumerated block devices");
    Ok(devices)
}

/// Parse `lsblk -d -n -o NAME,SIZE,TYPE` output, keeping whole disks named sd*
fn parse_lsblk(output: &str) -> Vec<BlockDevice> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let name = parts.next()?;
            let size = parts.next()?;
            let dev_type = parts.next()?;
            (dev_type == "disk" && name.starts_with("sd")).then(|| BlockDevice {
                name: name.to_string(),
                size: size.to_string(),
            })
        })
        .collect()
}
