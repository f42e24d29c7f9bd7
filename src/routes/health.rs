use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::response::Message;

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthData> {
    Json(HealthData {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Welcome message", body = Message),
    ),
    tag = "Health"
)]
pub async fn api_welcome() -> Json<Message> {
    Json(Message::new("Bem-vindo à API do Petshop PetLovers!"))
}
