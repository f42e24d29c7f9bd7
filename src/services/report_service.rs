use sqlx::FromRow;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::{
    dto::reports::{
        ConsumptionByPetReport, ItemConsumption, TopClientByQuantity, TopClientByValue,
        TopItemsReport,
    },
    error::{AppError, AppResult},
    state::AppState,
};

// The LEFT JOIN + COALESCE pairs keep the reports total even if a referenced
// row disappears; the foreign keys make that unreachable in practice.

#[derive(FromRow)]
struct ClientQuantityRow {
    client_id: Uuid,
    client_name: String,
    total_quantity: i64,
}

#[derive(FromRow)]
struct ClientValueRow {
    client_id: Uuid,
    client_name: String,
    total_value: rust_decimal::Decimal,
}

#[derive(FromRow)]
struct ItemRow {
    name: String,
    quantity: i64,
}

#[derive(FromRow)]
struct PetConsumptionRow {
    species: String,
    breed: String,
    item_name: String,
    quantity: i64,
}

pub async fn top_clients_by_quantity(state: &AppState) -> AppResult<Vec<TopClientByQuantity>> {
    let rows = sqlx::query_as::<_, ClientQuantityRow>(
        r#"
        SELECT cr.client_id,
               COALESCE(c.name, 'Cliente desconhecido') AS client_name,
               SUM(cr.quantity) AS total_quantity
        FROM consumption_records cr
        LEFT JOIN clients c ON c.id = cr.client_id
        GROUP BY cr.client_id, c.name
        ORDER BY total_quantity DESC, cr.client_id
        LIMIT 10
        "#,
    )
    .fetch_all(&state.pool)
    .await
    .map_err(AppError::ReportGeneration)?;

    Ok(rows
        .into_iter()
        .map(|row| TopClientByQuantity {
            client_id: row.client_id,
            client_name: row.client_name,
            total_quantity: row.total_quantity,
        })
        .collect())
}

pub async fn top_clients_by_value(state: &AppState) -> AppResult<Vec<TopClientByValue>> {
    let rows = sqlx::query_as::<_, ClientValueRow>(
        r#"
        SELECT cr.client_id,
               COALESCE(c.name, 'Cliente desconhecido') AS client_name,
               SUM(cr.total_price) AS total_value
        FROM consumption_records cr
        LEFT JOIN clients c ON c.id = cr.client_id
        GROUP BY cr.client_id, c.name
        ORDER BY total_value DESC, cr.client_id
        LIMIT 5
        "#,
    )
    .fetch_all(&state.pool)
    .await
    .map_err(AppError::ReportGeneration)?;

    Ok(rows
        .into_iter()
        .map(|row| TopClientByValue {
            client_id: row.client_id,
            client_name: row.client_name,
            total_value: row.total_value,
        })
        .collect())
}

/// Two independent rankings, one per item kind, both unbounded.
pub async fn top_items_consumed(state: &AppState) -> AppResult<TopItemsReport> {
    let products = sqlx::query_as::<_, ItemRow>(
        r#"
        SELECT COALESCE(p.name, 'Produto desconhecido') AS name,
               SUM(cr.quantity) AS quantity
        FROM consumption_records cr
        LEFT JOIN products p ON p.id = cr.product_id
        WHERE cr.product_id IS NOT NULL
        GROUP BY cr.product_id, p.name
        ORDER BY quantity DESC, name
        "#,
    )
    .fetch_all(&state.pool)
    .await
    .map_err(AppError::ReportGeneration)?;

    let services = sqlx::query_as::<_, ItemRow>(
        r#"
        SELECT COALESCE(s.name, 'Serviço desconhecido') AS name,
               SUM(cr.quantity) AS quantity
        FROM consumption_records cr
        LEFT JOIN services s ON s.id = cr.service_id
        WHERE cr.service_id IS NOT NULL
        GROUP BY cr.service_id, s.name
        ORDER BY quantity DESC, name
        "#,
    )
    .fetch_all(&state.pool)
    .await
    .map_err(AppError::ReportGeneration)?;

    Ok(TopItemsReport {
        products: products.into_iter().map(item_consumption).collect(),
        services: services.into_iter().map(item_consumption).collect(),
    })
}

/// Records without a pet are excluded; the rest group by (species, breed) and
/// then by consumed item name.
pub async fn consumption_by_pet(state: &AppState) -> AppResult<ConsumptionByPetReport> {
    let rows = sqlx::query_as::<_, PetConsumptionRow>(
        r#"
        SELECT p.species, p.breed,
               COALESCE(pr.name, s.name, 'Item desconhecido') AS item_name,
               SUM(cr.quantity) AS quantity
        FROM consumption_records cr
        JOIN pets p ON p.id = cr.pet_id
        LEFT JOIN products pr ON pr.id = cr.product_id
        LEFT JOIN services s ON s.id = cr.service_id
        GROUP BY p.species, p.breed, COALESCE(pr.name, s.name, 'Item desconhecido')
        "#,
    )
    .fetch_all(&state.pool)
    .await
    .map_err(AppError::ReportGeneration)?;

    Ok(fold_by_pet(rows))
}

fn item_consumption(row: ItemRow) -> ItemConsumption {
    ItemConsumption {
        name: row.name,
        quantity: row.quantity,
    }
}

fn fold_by_pet(rows: Vec<PetConsumptionRow>) -> ConsumptionByPetReport {
    let mut report: BTreeMap<String, BTreeMap<String, i64>> = BTreeMap::new();
    for row in rows {
        let key = format!("{} - {}", row.species, row.breed);
        *report
            .entry(key)
            .or_default()
            .entry(row.item_name)
            .or_default() += row.quantity;
    }
    ConsumptionByPetReport(report)
}
