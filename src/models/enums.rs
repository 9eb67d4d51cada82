//! Shared domain enums (labels match the persisted data file)

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentType
// ---------------------------------------------------------------------------

/// Equipment category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EquipmentType {
    #[default]
    Furniture,
    Peripherals,
    Computer,
    Charger,
    Monitor,
    Appliance,
    Other,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 7] = [
        EquipmentType::Furniture,
        EquipmentType::Peripherals,
        EquipmentType::Computer,
        EquipmentType::Charger,
        EquipmentType::Monitor,
        EquipmentType::Appliance,
        EquipmentType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentType::Furniture => "Furniture",
            EquipmentType::Peripherals => "Peripherals",
            EquipmentType::Computer => "Computer",
            EquipmentType::Charger => "Charger",
            EquipmentType::Monitor => "Monitor",
            EquipmentType::Appliance => "Appliance",
            EquipmentType::Other => "Other",
        }
    }
}

impl std::fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EquipmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| format!("Unknown equipment type: {}", s))
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// Physical condition of an asset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Condition {
    #[default]
    New,
    Used,
    Depreciated,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Condition::New => "New",
            Condition::Used => "Used",
            Condition::Depreciated => "Depreciated",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ChargerPower
// ---------------------------------------------------------------------------

/// Charger wattage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ChargerPower {
    #[serde(rename = "45W")]
    W45,
    #[default]
    #[serde(rename = "65W")]
    W65,
    Other,
}

impl std::fmt::Display for ChargerPower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ChargerPower::W45 => "45W",
            ChargerPower::W65 => "65W",
            ChargerPower::Other => "Other",
        };
        write!(f, "{}", label)
    }
}
