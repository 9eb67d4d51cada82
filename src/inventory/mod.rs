//! Pure view-model logic: ordering, display filters, aggregates and
//! currency formatting. Nothing here touches the store.

pub mod aggregate;
pub mod currency;
pub mod filter;
pub mod sort;

pub use aggregate::{total_value, type_distribution, type_options};
pub use currency::{format_row_value, format_total_value};
pub use filter::{EquipmentFilter, TypeFilter, ALL_TYPES};
pub use sort::{extract_tag_number, sort_by_tag, SortOrder};
