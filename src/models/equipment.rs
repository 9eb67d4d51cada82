//! Equipment model

use chrono::NaiveDate;
use rust_decimal::{prelude::FromPrimitive, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{ChargerPower, Condition, EquipmentType};
use crate::error::{AppError, AppResult};

/// Round a monetary amount to the two fractional digits kept on file.
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Equipment record, as persisted in the data file.
///
/// Decoding is lenient: missing or `null` text fields read as empty strings,
/// a missing value reads as zero, and missing enums or dates read as `None`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    /// Asset tag (e.g. "EQP001"), unique across the collection
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub asset_tag: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub brand: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub model: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub serial_number: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<EquipmentType>,
    /// Purchase value, two fractional digits
    #[serde(default, with = "amount")]
    #[schema(value_type = f64)]
    pub value: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charger_power: Option<ChargerPower>,
}

impl Equipment {
    /// Name of the first required field left empty, if any.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        if self.asset_tag.is_empty() {
            Some("asset_tag")
        } else if self.name.is_empty() {
            Some("name")
        } else {
            None
        }
    }
}

/// Register equipment request (the form submission)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[serde(default)]
    #[validate(length(min = 1, message = "asset tag is required"))]
    pub asset_tag: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(rename = "type", default)]
    pub equipment_type: EquipmentType,
    /// Purchase value (defaults to 0)
    #[serde(default)]
    #[validate(range(min = 0.0, message = "value must not be negative"))]
    pub value: f64,
    /// Acquisition date (defaults to today)
    pub acquisition_date: Option<NaiveDate>,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub charger_power: ChargerPower,
}

impl CreateEquipment {
    /// Build the record to persist, filling the acquisition date with `today`
    /// when none was chosen.
    pub fn into_equipment(self, today: NaiveDate) -> AppResult<Equipment> {
        let value = Decimal::from_f64(self.value).ok_or_else(|| {
            AppError::Validation(format!("value {} is out of range", self.value))
        })?;

        Ok(Equipment {
            asset_tag: self.asset_tag,
            name: self.name,
            brand: self.brand,
            model: self.model,
            serial_number: self.serial_number,
            equipment_type: Some(self.equipment_type),
            value: round_amount(value),
            acquisition_date: Some(self.acquisition_date.unwrap_or(today)),
            condition: Some(self.condition),
            charger_power: Some(self.charger_power),
        })
    }
}

/// JSON number on the wire, `Decimal` in memory.
mod amount {
    use rust_decimal::Decimal;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&super::round_amount(*value), serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let value = rust_decimal::serde::float_option::deserialize(deserializer)?;
        Ok(super::round_amount(value.unwrap_or_default()))
    }
}
