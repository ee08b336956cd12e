//! SMART attribute IDs and lookup
//!
//! Attribute meaning is vendor-defined beyond a loose convention; the IDs
//! here are the ones the extraction heuristics rely on.

use serde_json::Value;
use std::collections::HashMap;

pub const REALLOCATED_SECTORS: u64 = 5;
pub const POWER_ON_HOURS: u64 = 9;
pub const POWER_CYCLES: u64 = 12;
pub const RESERVED_SPACE: u64 = 170;
pub const WEAR_LEVELING: u64 = 177;
pub const TEMPERATURE: u64 = 194;
pub const PENDING_SECTORS: u64 = 197;
pub const UNCORRECTABLE_SECTORS: u64 = 198;
pub const SSD_LIFE_LEFT: u64 = 231;
pub const MEDIA_WEAROUT: u64 = 233;
pub const TOTAL_LBAS_WRITTEN: u64 = 241;
/// Crucial/Micron report host writes through this instead of 241
pub const HOST_WRITES_32MIB: u64 = 246;

// =============================================================================
// Attribute Table
// =============================================================================

/// ID-indexed view over the `ata_smart_attributes.table` array of one report
///
/// A report without an ATA attribute table yields an empty view, so every
/// query returns `None`.
pub struct AttributeTable<'a> {
    by_id: HashMap<u64, &'a Value>,
}

impl<'a> AttributeTable<'a> {
    /// Build the lookup from a full smartctl report
    pub fn from_report(report: &'a Value) -> Self {
        let mut by_id = HashMap::new();
        if let Some(table) = report["ata_smart_attributes"]["table"].as_array() {
            for attr in table {
                if let Some(id) = attr["id"].as_u64() {
                    by_id.insert(id, attr);
                }
            }
        }
        Self { by_id }
    }

    /// Whether the drive reports this attribute at all
    pub fn contains(&self, id: u64) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Raw counter value of an attribute
    pub fn raw_value(&self, id: u64) -> Option<u64> {
        self.by_id
            .get(&id)
            .copied()
            .and_then(|attr| attr["raw"]["value"].as_u64())
    }

    /// Vendor-formatted raw string of an attribute
    pub fn raw_string(&self, id: u64) -> Option<&'a str> {
        self.by_id
            .get(&id)
            .copied()
            .and_then(|attr| attr["raw"]["string"].as_str())
    }

    /// Normalized 0-255 health score of an attribute
    pub fn normalized(&self, id: u64) -> Option<u64> {
        self.by_id
            .get(&id)
            .copied()
            .and_then(|attr| attr["value"].as_u64())
    }
}
