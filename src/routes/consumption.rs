use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::{
    dto::consumption::RegisterConsumptionRequest,
    error::AppResult,
    response::Message,
    services::consumption_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(register_consumption))
}

#[utoipa::path(
    post,
    path = "/api/consumos",
    request_body = RegisterConsumptionRequest,
    responses(
        (status = 201, description = "Consumption registered", body = Message),
        (status = 400, description = "Missing client, empty items or insufficient stock"),
        (status = 404, description = "Referenced client, pet, product or service does not exist"),
    ),
    tag = "Consumos"
)]
pub async fn register_consumption(
    State(state): State<AppState>,
    Json(payload): Json<RegisterConsumptionRequest>,
) -> AppResult<(StatusCode, Json<Message>)> {
    let message = consumption_service::register_consumption(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
