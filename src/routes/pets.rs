use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    dto::pets::{CreatePetRequest, UpdatePetRequest},
    error::{AppError, AppResult},
    models::Pet,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(create_pet))
        .route("/{id}", axum::routing::put(update_pet))
        .route("/{id}", axum::routing::delete(delete_pet))
}

#[utoipa::path(
    post,
    path = "/api/pets",
    request_body = CreatePetRequest,
    responses(
        (status = 201, description = "Create pet", body = Pet),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Owner not found"),
    ),
    tag = "Pets"
)]
pub async fn create_pet(
    State(state): State<AppState>,
    Json(payload): Json<CreatePetRequest>,
) -> AppResult<(StatusCode, Json<Pet>)> {
    let valid = payload.validate()?;

    let owner: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM clients WHERE id = $1")
        .bind(valid.owner_id)
        .fetch_optional(&state.pool)
        .await?;
    if owner.is_none() {
        return Err(AppError::reference_not_found("Cliente", valid.owner_id));
    }

    let pet = sqlx::query_as::<_, Pet>(
        "INSERT INTO pets (id, name, species, breed, owner_id) VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(valid.name)
    .bind(valid.species)
    .bind(valid.breed)
    .bind(valid.owner_id)
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(pet)))
}

#[utoipa::path(
    put,
    path = "/api/pets/{id}",
    params(
        ("id" = Uuid, Path, description = "Pet ID")
    ),
    request_body = UpdatePetRequest,
    responses(
        (status = 200, description = "Updated pet", body = Pet),
        (status = 404, description = "Pet not found"),
    ),
    tag = "Pets"
)]
pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePetRequest>,
) -> AppResult<Json<Pet>> {
    let pet = sqlx::query_as::<_, Pet>(
        r#"
        UPDATE pets
        SET name = $2, species = $3, breed = $4
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.name)
    .bind(payload.species)
    .bind(payload.breed)
    .fetch_optional(&state.pool)
    .await?;

    match pet {
        Some(pet) => Ok(Json(pet)),
        None => Err(AppError::NotFound),
    }
}

#[utoipa::path(
    delete,
    path = "/api/pets/{id}",
    params(
        ("id" = Uuid, Path, description = "Pet ID")
    ),
    responses(
        (status = 204, description = "Deleted pet"),
        (status = 404, description = "Pet not found"),
    ),
    tag = "Pets"
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    sqlx::query("DELETE FROM consumption_records WHERE pet_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query("DELETE FROM pets WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
