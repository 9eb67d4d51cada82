//! Statistics endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::InventoryStats};

/// Total value and type distribution over every record on file
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Inventory statistics", body = InventoryStats)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<InventoryStats>> {
    let stats = state.services.equipment.stats()?;
    Ok(Json(stats))
}
