use petshop_api::{config::AppConfig, db::create_pool};
use rust_decimal::Decimal;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_clients_and_pets(&pool).await?;
    seed_products(&pool).await?;
    seed_services(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_clients_and_pets(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let clients = vec![
        ("Ana Souza", "ana@example.com", Some("11 91234-5678"), "Rex", "Cão", "Labrador"),
        ("Bruno Lima", "bruno@example.com", None, "Mia", "Gato", "Siamês"),
        ("Carla Dias", "carla@example.com", Some("21 99876-5432"), "Bolt", "Cão", "Vira-lata"),
    ];

    for (name, email, phone, pet_name, species, breed) in clients {
        let client_id: Option<(Uuid,)> = sqlx::query_as(
            r#"
            INSERT INTO clients (id, name, email, phone)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(phone)
        .fetch_optional(pool)
        .await?;

        // Skip the pet when the client was already seeded.
        if let Some((client_id,)) = client_id {
            sqlx::query(
                "INSERT INTO pets (id, name, species, breed, owner_id) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(Uuid::new_v4())
            .bind(pet_name)
            .bind(species)
            .bind(breed)
            .bind(client_id)
            .execute(pool)
            .await?;
        }

        println!("Ensured client {email}");
    }

    Ok(())
}

async fn seed_products(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let products = vec![
        ("Ração Premium 10kg", "Ração seca para cães adultos", "189.90", 40),
        ("Areia Sanitária", "Areia higiênica para gatos, 4kg", "24.50", 120),
        ("Brinquedo Mordedor", "Mordedor de borracha atóxica", "19.90", 75),
        ("Coleira Ajustável", "Coleira de nylon com fivela", "34.90", 60),
    ];

    for (name, description, price, stock) in products {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, stock)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(description)
        .bind(price.parse::<Decimal>()?)
        .bind(stock)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}

async fn seed_services(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let services = vec![
        ("Banho e Tosa", "Banho completo com tosa higiênica", "80.00"),
        ("Consulta Veterinária", "Avaliação clínica geral", "150.00"),
        ("Vacinação", "Aplicação de vacina (dose avulsa)", "95.00"),
    ];

    for (name, description, price) in services {
        sqlx::query(
            r#"
            INSERT INTO services (id, name, description, price)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(description)
        .bind(price.parse::<Decimal>()?)
        .execute(pool)
        .await?;
    }

    println!("Seeded services");
    Ok(())
}
