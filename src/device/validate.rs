//! Device path validation
//!
//! The validated path is the only user-controlled value that ever reaches a
//! process invocation, so the filter is rigid: `/dev/sd` plus exactly one
//! lowercase letter, and the node must exist on the filesystem.

use crate::error::{Error, Result};
use std::path::Path;

/// Check the shape of a candidate device path
pub fn is_valid_device_pattern(path: &str) -> bool {
    let Some(suffix) = path.strip_prefix("/dev/sd") else {
        return false;
    };
    let mut chars = suffix.chars();
    matches!((chars.next(), chars.next()), (Some('a'..='z'), None))
}

/// Validate a user-supplied device path before it reaches smartctl
pub fn validate_device_path(path: &str) -> Result<()> {
    if !is_valid_device_pattern(path) || !Path::new(path).exists() {
        return Err(Error::InvalidDevicePath {
            path: path.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_pattern_accepts_single_letter_sd_paths() {
        for letter in 'a'..='z' {
            assert!(is_valid_device_pattern(&format!("/dev/sd{}", letter)));
        }
    }

    #[test]
    fn test_pattern_rejects_everything_else() {
        for path in [
            "",
            "/dev/sd",
            "/dev/sda1",
            "/dev/sdaa",
            "/dev/sdA",
            "/dev/null",
            "/dev/nvme0n1",
            "dev/sda",
            "/dev/sda ",
            "/dev/sda; rm -rf /",
            "/dev/sd$(reboot)",
            "/dev/sda|id",
            "../dev/sda",
        ] {
            assert!(!is_valid_device_pattern(path), "accepted {:?}", path);
        }
    }

    #[test]
    fn test_validation_rejects_existing_non_sd_node() {
        // /dev/null exists but fails the pattern
        assert_matches!(
            validate_device_path("/dev/null"),
            Err(Error::InvalidDevicePath { .. })
        );
    }

    #[test]
    fn test_validation_rejects_malformed_paths() {
        assert_matches!(
            validate_device_path("/dev/sdaa"),
            Err(Error::InvalidDevicePath { .. })
        );
        assert_matches!(
            validate_device_path("/dev/sda1"),
            Err(Error::InvalidDevicePath { .. })
        );
    }
}
