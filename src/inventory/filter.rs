//! Display filters over the loaded collection

use std::str::FromStr;

use crate::models::{Equipment, EquipmentType};

/// Sentinel label meaning "no type constraint"
pub const ALL_TYPES: &str = "All";

/// Exact type constraint, or no constraint at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EquipmentType),
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == ALL_TYPES {
            return Ok(TypeFilter::All);
        }
        s.parse().map(TypeFilter::Only)
    }
}

/// The three independent display filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentFilter {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Case-insensitive substring of the brand
    pub brand: Option<String>,
    pub equipment_type: TypeFilter,
}

impl EquipmentFilter {
    pub fn matches(&self, record: &Equipment) -> bool {
        contains_ci(&record.name, self.name.as_deref())
            && contains_ci(&record.brand, self.brand.as_deref())
            && match self.equipment_type {
                TypeFilter::All => true,
                TypeFilter::Only(t) => record.equipment_type == Some(t),
            }
    }

    /// Keep matching records, preserving their order.
    pub fn apply<'a>(&self, records: &'a [Equipment]) -> Vec<&'a Equipment> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}
