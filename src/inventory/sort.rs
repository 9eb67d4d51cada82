//! Ordering by the numeric part of the asset tag

use std::cmp::Reverse;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Equipment;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]+").expect("valid regex"));

/// Direction of the asset tag ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Highest tag number first
    #[default]
    #[serde(alias = "desc")]
    Descending,
    #[serde(alias = "asc")]
    Ascending,
}

/// Sort key of an asset tag: the first run of decimal digits, or 0 when the
/// tag has none. "EQP002" gives 2, "A10B5" gives 10. A run too long for
/// `u64` saturates to `u64::MAX`. Only ASCII digits count.
pub fn extract_tag_number(tag: &str) -> u64 {
    match DIGIT_RUN.find(tag) {
        Some(run) => run.as_str().parse().unwrap_or(u64::MAX),
        None => 0,
    }
}

/// Stable sort by tag number; equal keys keep their collection order in
/// both directions.
pub fn sort_by_tag(records: &mut [Equipment], order: SortOrder) {
    match order {
        SortOrder::Ascending => records.sort_by_cached_key(|r| extract_tag_number(&r.asset_tag)),
        SortOrder::Descending => {
            records.sort_by_cached_key(|r| Reverse(extract_tag_number(&r.asset_tag)))
        }
    }
}
