//! Equipment service: registration and the derived inventory view

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use validator::Validate;

use crate::{
    config::DisplayConfig,
    error::AppResult,
    inventory::{
        format_row_value, format_total_value, sort_by_tag, total_value, type_distribution,
        type_options,
    },
    models::{
        CreateEquipment, Equipment, EquipmentRow, InventoryQuery, InventoryStats, InventoryView,
        StatEntry,
    },
    repository::{EquipmentStore, LoadReport},
};

#[derive(Clone)]
pub struct EquipmentService {
    store: Arc<dyn EquipmentStore>,
    currency_symbol: String,
}

impl EquipmentService {
    pub fn new(store: Arc<dyn EquipmentStore>, display: &DisplayConfig) -> Self {
        Self {
            store,
            currency_symbol: display.currency_symbol.clone(),
        }
    }

    /// Register a new record. The acquisition date defaults to today.
    pub fn register(&self, data: CreateEquipment) -> AppResult<Equipment> {
        self.register_on(data, Local::now().date_naive())
    }

    /// Register a new record, using `today` when no acquisition date was chosen.
    pub fn register_on(&self, data: CreateEquipment, today: NaiveDate) -> AppResult<Equipment> {
        data.validate()?;
        let record = data.into_equipment(today)?;
        self.store.append(&record)?;
        Ok(record)
    }

    /// Reload the collection and derive the display list and aggregates.
    ///
    /// Aggregates cover every record on file; only `items` is filtered.
    pub fn inventory(&self, query: &InventoryQuery) -> AppResult<InventoryView> {
        let filter = query.filter()?;
        let LoadReport { mut records, warnings } = self.store.load()?;

        sort_by_tag(&mut records, query.order.unwrap_or_default());

        let items: Vec<EquipmentRow> = filter
            .apply(&records)
            .into_iter()
            .map(|record| EquipmentRow {
                value_display: format_row_value(record.value, &self.currency_symbol),
                record: record.clone(),
            })
            .collect();

        let total = total_value(&records);
        Ok(InventoryView {
            displayed: items.len(),
            items,
            total_records: records.len(),
            total_value: total,
            total_value_display: format_total_value(total, &self.currency_symbol),
            type_distribution: distribution_entries(&records),
            type_options: type_options(&records),
            warnings,
        })
    }

    /// Collection-wide figures without the row list
    pub fn stats(&self) -> AppResult<InventoryStats> {
        let LoadReport { mut records, .. } = self.store.load()?;
        sort_by_tag(&mut records, Default::default());

        let total = total_value(&records);
        Ok(InventoryStats {
            total_records: records.len(),
            total_value: total,
            total_value_display: format_total_value(total, &self.currency_symbol),
            by_type: distribution_entries(&records),
        })
    }

    /// Whether the data file currently loads without corruption
    pub fn is_ready(&self) -> AppResult<bool> {
        Ok(!self.store.load()?.is_corrupt())
    }
}

fn distribution_entries(records: &[Equipment]) -> Vec<StatEntry> {
    type_distribution(records)
        .into_iter()
        .map(|(kind, count)| StatEntry {
            label: kind.label().to_string(),
            value: count,
        })
        .collect()
}
