use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::reports::{
        ConsumptionByPetReport, TopClientByQuantity, TopClientByValue, TopItemsReport,
    },
    error::AppResult,
    services::report_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/top-clientes-quantidade", get(top_clients_by_quantity))
        .route("/top-clientes-valor", get(top_clients_by_value))
        .route("/top-itens-consumidos", get(top_items_consumed))
        .route("/top-itens-por-pet", get(consumption_by_pet))
}

#[utoipa::path(
    get,
    path = "/api/relatorios/top-clientes-quantidade",
    responses(
        (status = 200, description = "Top 10 clients by consumed quantity", body = Vec<TopClientByQuantity>)
    ),
    tag = "Relatorios"
)]
pub async fn top_clients_by_quantity(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TopClientByQuantity>>> {
    let report = report_service::top_clients_by_quantity(&state).await?;
    Ok(Json(report))
}

#[utoipa::path(
    get,
    path = "/api/relatorios/top-clientes-valor",
    responses(
        (status = 200, description = "Top 5 clients by spent value", body = Vec<TopClientByValue>)
    ),
    tag = "Relatorios"
)]
pub async fn top_clients_by_value(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TopClientByValue>>> {
    let report = report_service::top_clients_by_value(&state).await?;
    Ok(Json(report))
}

#[utoipa::path(
    get,
    path = "/api/relatorios/top-itens-consumidos",
    responses(
        (status = 200, description = "Product and service rankings by quantity", body = TopItemsReport)
    ),
    tag = "Relatorios"
)]
pub async fn top_items_consumed(State(state): State<AppState>) -> AppResult<Json<TopItemsReport>> {
    let report = report_service::top_items_consumed(&state).await?;
    Ok(Json(report))
}

#[utoipa::path(
    get,
    path = "/api/relatorios/top-itens-por-pet",
    responses(
        (status = 200, description = "Consumption grouped by pet species and breed", body = ConsumptionByPetReport)
    ),
    tag = "Relatorios"
)]
pub async fn consumption_by_pet(
    State(state): State<AppState>,
) -> AppResult<Json<ConsumptionByPetReport>> {
    let report = report_service::consumption_by_pet(&state).await?;
    Ok(Json(report))
}
