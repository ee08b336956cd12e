//! Device discovery and validation
//!
//! Finds candidate USB-SATA drives and guards the path that reaches the
//! diagnostic invocation.

pub mod enumerate;
pub mod validate;

pub use enumerate::{list_block_devices, BlockDevice};
pub use validate::{is_valid_device_pattern, validate_device_path};
