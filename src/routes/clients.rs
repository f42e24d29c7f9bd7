use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    dto::clients::{ClientWithPets, CreateClientRequest, UpdateClientRequest},
    error::AppResult,
    models::Client,
    services::client_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(create_client))
        .route("/", axum::routing::get(list_clients))
        .route("/{id}", axum::routing::put(update_client))
        .route("/{id}", axum::routing::delete(delete_client))
}

#[utoipa::path(
    post,
    path = "/api/clientes",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Create client with its first pet", body = ClientWithPets),
        (status = 400, description = "Missing client or pet fields"),
    ),
    tag = "Clientes"
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> AppResult<(StatusCode, Json<ClientWithPets>)> {
    let created = client_service::create_client(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/clientes",
    responses(
        (status = 200, description = "List clients with nested pets", body = Vec<ClientWithPets>)
    ),
    tag = "Clientes"
)]
pub async fn list_clients(State(state): State<AppState>) -> AppResult<Json<Vec<ClientWithPets>>> {
    let clients = client_service::list_clients(&state).await?;
    Ok(Json(clients))
}

#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Updated client", body = Client),
        (status = 404, description = "Client not found"),
    ),
    tag = "Clientes"
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClientRequest>,
) -> AppResult<Json<Client>> {
    let client = client_service::update_client(&state, id, payload).await?;
    Ok(Json(client))
}

#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Deleted client with its pets and records"),
        (status = 404, description = "Client not found"),
    ),
    tag = "Clientes"
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    client_service::delete_client(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
