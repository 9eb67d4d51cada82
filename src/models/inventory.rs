//! Inventory view: query parameters and the derived display list

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::equipment::Equipment;
use crate::{
    error::{AppError, AppResult},
    inventory::{EquipmentFilter, SortOrder, TypeFilter},
    repository::LoadWarning,
};

/// Query parameters for the inventory view
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct InventoryQuery {
    /// Asset tag ordering (descending by default)
    pub order: Option<SortOrder>,
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Case-insensitive substring of the brand
    pub brand: Option<String>,
    /// Exact type label, or "All"
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
}

impl InventoryQuery {
    pub fn filter(&self) -> AppResult<EquipmentFilter> {
        let equipment_type = match self.equipment_type.as_deref() {
            Some(label) => label.parse::<TypeFilter>().map_err(AppError::Validation)?,
            None => TypeFilter::All,
        };

        Ok(EquipmentFilter {
            name: self.name.clone(),
            brand: self.brand.clone(),
            equipment_type,
        })
    }
}

/// One displayed row: the record plus its formatted value
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentRow {
    #[serde(flatten)]
    pub record: Equipment,
    /// Value formatted for display (e.g. "R$ 1.234,56")
    pub value_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatEntry {
    /// Label
    pub label: String,
    /// Value
    pub value: usize,
}

/// Sorted, filtered display list plus collection-wide aggregates
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryView {
    /// Rows that pass every active filter, in display order
    pub items: Vec<EquipmentRow>,
    /// Number of rows displayed
    pub displayed: usize,
    /// Number of records on file
    pub total_records: usize,
    /// Sum of all values on file, ignoring display filters
    #[schema(value_type = f64)]
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    /// Total formatted for display (e.g. "R$ 1,234.56")
    pub total_value_display: String,
    /// Record count per type, for the distribution chart
    pub type_distribution: Vec<StatEntry>,
    /// Choices for the type filter ("All" first)
    pub type_options: Vec<String>,
    /// Problems found while loading the data file
    pub warnings: Vec<LoadWarning>,
}

/// Collection-wide figures
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryStats {
    pub total_records: usize,
    #[schema(value_type = f64)]
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    pub total_value_display: String,
    pub by_type: Vec<StatEntry>,
}
