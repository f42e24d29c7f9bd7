#![allow(dead_code)]

use petshop_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    entity::{clients, pets, products, services},
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};
use uuid::Uuid;

/// Connect, migrate and truncate. Returns `None` (with a skip notice) when no
/// database is configured in the environment.
pub async fn setup_state() -> anyhow::Result<Option<AppState>> {
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
                );
                return Ok(None);
            }
        };

    let pool = create_pool(&database_url).await?;
    let orm = create_orm_conn(&pool);
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE consumption_records, pets, products, services, clients CASCADE",
    ))
    .await?;

    Ok(Some(AppState { pool, orm }))
}

pub async fn create_client(state: &AppState, name: &str, email: &str) -> anyhow::Result<Uuid> {
    let client = clients::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.into()),
        email: Set(email.into()),
        phone: Set(None),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(client.id)
}

pub async fn create_pet(
    state: &AppState,
    owner_id: Uuid,
    name: &str,
    species: &str,
    breed: &str,
) -> anyhow::Result<Uuid> {
    let pet = pets::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.into()),
        species: Set(species.into()),
        breed: Set(breed.into()),
        owner_id: Set(owner_id),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(pet.id)
}

pub async fn create_product(
    state: &AppState,
    name: &str,
    price: Decimal,
    stock: i32,
) -> anyhow::Result<products::Model> {
    let product = products::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.into()),
        description: Set(None),
        price: Set(price),
        stock: Set(stock),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(product)
}

pub async fn create_service(
    state: &AppState,
    name: &str,
    price: Decimal,
) -> anyhow::Result<services::Model> {
    let service = services::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.into()),
        description: Set(None),
        price: Set(price),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(service)
}
