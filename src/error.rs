//! Error types for the SSD triage tool
//!
//! Provides structured error types for every stage of the triage pipeline:
//! environment preflight, device enumeration and validation, smartctl
//! invocation, and CSV persistence.

use thiserror::Error;

/// Unified error type for the tool
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Environment Errors
    // =========================================================================
    #[error("smartctl not found; install smartmontools")]
    SmartctlMissing,

    #[error("root privileges required to read SMART data")]
    PrivilegesRequired,

    // =========================================================================
    // Device Errors
    // =========================================================================
    #[error("Device enumeration failed: {0}")]
    DeviceEnumeration(String),

    #[error("Invalid device path: {path}")]
    InvalidDevicePath { path: String },

    #[error("No SMART report available for device: {device}")]
    NoReport { device: String },

    // =========================================================================
    // Persistence Errors
    // =========================================================================
    #[error("CSV write failed: {0}")]
    CsvWrite(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// How the session loop responds to an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing tool or privileges; the process exits before testing anything
    Environment,
    /// One device yielded no usable result; the session continues
    Device,
    /// A result could not be written to disk; the session continues
    Persistence,
    /// User input was rejected or unreadable
    Input,
}

impl Error {
    /// Classify this error for session-level handling
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::SmartctlMissing | Error::PrivilegesRequired => ErrorCategory::Environment,
            Error::DeviceEnumeration(_) | Error::NoReport { .. } => ErrorCategory::Device,
            Error::CsvWrite(_) | Error::Io(_) => ErrorCategory::Persistence,
            Error::InvalidDevicePath { .. } | Error::Prompt(_) => ErrorCategory::Input,
        }
    }

    /// Check if this error should terminate the process
    pub fn is_fatal(&self) -> bool {
        self.category() == ErrorCategory::Environment
    }
}

/// Result type alias for the tool
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            Error::SmartctlMissing.category(),
            ErrorCategory::Environment
        );
        assert_eq!(
            Error::PrivilegesRequired.category(),
            ErrorCategory::Environment
        );
        assert_eq!(
            Error::NoReport {
                device: "/dev/sdb".into()
            }
            .category(),
            ErrorCategory::Device
        );
        assert_eq!(
            Error::InvalidDevicePath {
                path: "/dev/sda1".into()
            }
            .category(),
            ErrorCategory::Input
        );
        assert_eq!(
            Error::DeviceEnumeration("lsblk exited 1".into()).category(),
            ErrorCategory::Device
        );
    }

    #[test]
    fn test_only_environment_errors_are_fatal() {
        assert!(Error::SmartctlMissing.is_fatal());
        assert!(Error::PrivilegesRequired.is_fatal());
        assert!(!Error::DeviceEnumeration("lsblk exited 1".into()).is_fatal());
        assert!(!Error::NoReport {
            device: "/dev/sdc".into()
        }
        .is_fatal());
        assert!(!Error::InvalidDevicePath {
            path: "/dev/sda1".into()
        }
        .is_fatal());
    }
}
