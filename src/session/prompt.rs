//! Interactive prompts
//!
//! Thin wrappers over dialoguer plus the pure interpretation of what the
//! user typed at the device prompt.

use crate::error::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input};

// =============================================================================
// Device Choice
// =============================================================================

/// What the user's device-prompt input means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceChoice {
    /// Test this path (validation happens later)
    Device(String),
    /// Empty input with a remembered device: reuse it
    UseLast(String),
    /// End the session
    Quit,
}

/// Interpret raw prompt input against the remembered last device
pub fn parse_device_choice(input: &str, last_device: Option<&str>) -> DeviceChoice {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        if let Some(last) = last_device {
            return DeviceChoice::UseLast(last.to_string());
        }
    }

    if matches!(trimmed.to_lowercase().as_str(), "quit" | "exit" | "q") {
        return DeviceChoice::Quit;
    }

    DeviceChoice::Device(trimmed.to_string())
}

// =============================================================================
// Prompts
// =============================================================================

/// Ask which device to test
///
/// `last_device` should only be passed when that device is still attached;
/// it enables the press-Enter-to-reuse shortcut.
pub fn prompt_device(last_device: Option<&str>) -> Result<DeviceChoice> {
    println!();
    if let Some(last) = last_device {
        println!(
            "Enter the device to test (or press Enter for {})",
            last.cyan()
        );
    } else {
        println!("Enter the device to test (e.g., /dev/sdb)");
    }
    println!("Or type 'quit' to exit");

    let input: String = Input::new()
        .with_prompt("Device")
        .allow_empty(true)
        .interact_text()?;

    let choice = parse_device_choice(&input, last_device);
    if let DeviceChoice::UseLast(device) = &choice {
        println!("Using: {}", device.cyan());
    }
    Ok(choice)
}

/// y/n continuation prompt, defaulting to no
pub fn confirm(prompt: &str) -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(answer)
}
