use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    dto::services::{CreateServiceRequest, UpdateServiceRequest},
    error::{AppError, AppResult},
    models::Service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(create_service))
        .route("/", axum::routing::get(list_services))
        .route("/{id}", axum::routing::put(update_service))
        .route("/{id}", axum::routing::delete(delete_service))
}

#[utoipa::path(
    get,
    path = "/api/servicos",
    responses(
        (status = 200, description = "List services", body = Vec<Service>)
    ),
    tag = "Servicos"
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let items = sqlx::query_as::<_, Service>("SELECT * FROM services ORDER BY created_at")
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/servicos",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Create service", body = Service),
        (status = 400, description = "Missing required fields"),
    ),
    tag = "Servicos"
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceRequest>,
) -> AppResult<(StatusCode, Json<Service>)> {
    let valid = payload.validate()?;
    let service = sqlx::query_as::<_, Service>(
        "INSERT INTO services (id, name, description, price) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(valid.name)
    .bind(valid.description)
    .bind(valid.price)
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(service)))
}

#[utoipa::path(
    put,
    path = "/api/servicos/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Updated service", body = Service),
        (status = 404, description = "Service not found"),
    ),
    tag = "Servicos"
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> AppResult<Json<Service>> {
    let service = sqlx::query_as::<_, Service>(
        r#"
        UPDATE services
        SET name = $2, description = $3, price = $4
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .fetch_optional(&state.pool)
    .await?;

    match service {
        Some(service) => Ok(Json(service)),
        None => Err(AppError::NotFound),
    }
}

#[utoipa::path(
    delete,
    path = "/api/servicos/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 204, description = "Deleted service"),
        (status = 404, description = "Service not found"),
    ),
    tag = "Servicos"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    sqlx::query("DELETE FROM consumption_records WHERE service_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query("DELETE FROM services WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
