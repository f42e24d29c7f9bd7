use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    dto::clients::{ClientWithPets, CreateClientRequest, UpdateClientRequest},
    entity::{
        clients::{ActiveModel as ClientActive, Entity as Clients, Model as ClientModel},
        pets::{ActiveModel as PetActive, Entity as Pets, Model as PetModel},
    },
    error::{AppError, AppResult},
    models::{Client, Pet},
    state::AppState,
};

/// Registration always bundles the client with its first pet, inserted in the
/// same transaction.
pub async fn create_client(
    state: &AppState,
    payload: CreateClientRequest,
) -> AppResult<ClientWithPets> {
    let valid = payload.validate()?;

    let txn = state.orm.begin().await?;

    let client = ClientActive {
        id: Set(Uuid::new_v4()),
        name: Set(valid.name),
        email: Set(valid.email),
        phone: Set(valid.phone),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let pet = PetActive {
        id: Set(Uuid::new_v4()),
        name: Set(valid.pet_name),
        species: Set(valid.pet_species),
        breed: Set(valid.pet_breed),
        owner_id: Set(client.id),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(client_with_pets(client, vec![pet]))
}

pub async fn list_clients(state: &AppState) -> AppResult<Vec<ClientWithPets>> {
    let rows = Clients::find()
        .find_with_related(Pets)
        .all(&state.orm)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(client, pets)| client_with_pets(client, pets))
        .collect())
}

pub async fn update_client(
    state: &AppState,
    id: Uuid,
    payload: UpdateClientRequest,
) -> AppResult<Client> {
    let client = sqlx::query_as::<_, Client>(
        r#"
        UPDATE clients
        SET name = $2, email = $3, phone = $4
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.name)
    .bind(payload.email)
    .bind(payload.phone)
    .fetch_optional(&state.pool)
    .await?;

    match client {
        Some(client) => Ok(client),
        None => Err(AppError::NotFound),
    }
}

/// Dependent rows go first: consumption records reference the client and its
/// pets, pets reference the client.
pub async fn delete_client(state: &AppState, id: Uuid) -> AppResult<()> {
    let mut tx = state.pool.begin().await?;

    sqlx::query("DELETE FROM consumption_records WHERE client_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM pets WHERE owner_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    tx.commit().await?;
    Ok(())
}

fn client_with_pets(client: ClientModel, pets: Vec<PetModel>) -> ClientWithPets {
    ClientWithPets {
        id: client.id,
        name: client.name,
        email: client.email,
        phone: client.phone,
        pets: pets.into_iter().map(pet_from_entity).collect(),
    }
}

fn pet_from_entity(pet: PetModel) -> Pet {
    Pet {
        id: pet.id,
        name: pet.name,
        species: pet.species,
        breed: pet.breed,
        owner_id: pet.owner_id,
    }
}
