//! Data models for the equipment registry

pub mod enums;
pub mod equipment;
pub mod inventory;

// Re-export commonly used types
pub use enums::{ChargerPower, Condition, EquipmentType};
pub use equipment::{CreateEquipment, Equipment};
pub use inventory::{EquipmentRow, InventoryQuery, InventoryStats, InventoryView, StatEntry};
