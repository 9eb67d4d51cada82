//! Equipment API endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::{AppJson, AppQuery};
use crate::{
    error::AppResult,
    models::{CreateEquipment, Equipment, InventoryQuery, InventoryView},
};

/// Sorted, filtered inventory with collection-wide aggregates
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(InventoryQuery),
    responses(
        (status = 200, description = "Inventory view", body = InventoryView),
        (status = 400, description = "Unknown type filter or sort order", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    AppQuery(query): AppQuery<InventoryQuery>,
) -> AppResult<Json<InventoryView>> {
    let view = state.services.equipment.inventory(&query)?;
    Ok(Json(view))
}

/// Register equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment registered", body = Equipment),
        (status = 400, description = "Malformed body or required field missing", body = crate::error::ErrorResponse),
        (status = 409, description = "Asset tag already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.register(data)?;
    Ok((StatusCode::CREATED, Json(equipment)))
}
