//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equipment Registry API",
        version = "0.1.0",
        description = "Office equipment inventory REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::create_equipment,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Equipment
            crate::models::Equipment,
            crate::models::CreateEquipment,
            crate::models::EquipmentType,
            crate::models::Condition,
            crate::models::ChargerPower,
            crate::models::EquipmentRow,
            crate::models::InventoryQuery,
            crate::models::InventoryView,
            crate::inventory::SortOrder,
            crate::repository::LoadWarning,
            // Stats
            crate::models::InventoryStats,
            crate::models::StatEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment registration and inventory"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
