//! Aggregates over the whole collection, independent of display filters

use indexmap::{IndexMap, IndexSet};
use rust_decimal::Decimal;

use super::filter::ALL_TYPES;
use crate::models::{Equipment, EquipmentType};

/// Sum of `value` over every record.
pub fn total_value(records: &[Equipment]) -> Decimal {
    records.iter().map(|r| r.value).sum()
}

/// Record count per type, most frequent first, ties in first-seen order.
/// Types with no records (and records with no type) do not appear.
pub fn type_distribution(records: &[Equipment]) -> Vec<(EquipmentType, usize)> {
    let mut counts: IndexMap<EquipmentType, usize> = IndexMap::new();
    for kind in records.iter().filter_map(|r| r.equipment_type) {
        *counts.entry(kind).or_default() += 1;
    }

    let mut distribution: Vec<_> = counts.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1));
    distribution
}

/// Choices for the type filter: the "All" sentinel, then every type present,
/// in first-seen order.
pub fn type_options(records: &[Equipment]) -> Vec<String> {
    let seen: IndexSet<EquipmentType> = records.iter().filter_map(|r| r.equipment_type).collect();

    std::iter::once(ALL_TYPES.to_string())
        .chain(seen.iter().map(|t| t.label().to_string()))
        .collect()
}
