mod common;

use petshop_api::{
    dto::consumption::{LineItem, RegisterConsumptionRequest},
    entity::{consumption_records, products},
    services::consumption_service,
};
use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

fn request(client_id: Uuid, items: Vec<LineItem>) -> RegisterConsumptionRequest {
    RegisterConsumptionRequest {
        client_id: Some(client_id),
        items: Some(items),
    }
}

// Registration flow: price snapshots, stock decrement, pet attribution, and
// all-or-nothing behavior when a line fails.
#[tokio::test]
async fn consumption_registration_flow() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let client_id = common::create_client(&state, "Ana Souza", "ana@example.com").await?;
    let pet_id = common::create_pet(&state, client_id, "Rex", "Cão", "Labrador").await?;
    let product = common::create_product(&state, "Ração Premium", dec!(7.50), 10).await?;
    let service = common::create_service(&state, "Banho e Tosa", dec!(50.00)).await?;

    // 2 units at 7.50 leave stock at 8 and snapshot a 15.00 total.
    consumption_service::register_consumption(
        &state,
        request(
            client_id,
            vec![LineItem::Produto {
                id: product.id,
                quantity: 2,
                pet_id: None,
            }],
        ),
    )
    .await?;

    let reloaded = products::Entity::find_by_id(product.id)
        .one(&state.orm)
        .await?
        .expect("product");
    assert_eq!(reloaded.stock, 8);

    let records = consumption_records::Entity::find()
        .filter(consumption_records::Column::ClientId.eq(client_id))
        .all(&state.orm)
        .await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].total_price, dec!(15.00));
    assert_eq!(records[0].product_id, Some(product.id));
    assert_eq!(records[0].service_id, None);

    // A batch mixing a product line and a pet-tagged service line creates one
    // record per line.
    consumption_service::register_consumption(
        &state,
        request(
            client_id,
            vec![
                LineItem::Produto {
                    id: product.id,
                    quantity: 1,
                    pet_id: None,
                },
                LineItem::Servico {
                    id: service.id,
                    quantity: 1,
                    pet_id: Some(pet_id),
                },
            ],
        ),
    )
    .await?;

    let reloaded = products::Entity::find_by_id(product.id)
        .one(&state.orm)
        .await?
        .expect("product");
    assert_eq!(reloaded.stock, 7);

    let service_record = consumption_records::Entity::find()
        .filter(consumption_records::Column::ServiceId.eq(service.id))
        .one(&state.orm)
        .await?
        .expect("service record");
    assert_eq!(service_record.pet_id, Some(pet_id));
    assert_eq!(service_record.total_price, dec!(50.00));

    let count_before = consumption_records::Entity::find()
        .count(&state.orm)
        .await?;
    assert_eq!(count_before, 3);

    // A missing reference in the second line rolls back the whole batch,
    // including the first line's stock decrement.
    let missing_id = Uuid::new_v4();
    let result = consumption_service::register_consumption(
        &state,
        request(
            client_id,
            vec![
                LineItem::Produto {
                    id: product.id,
                    quantity: 3,
                    pet_id: None,
                },
                LineItem::Produto {
                    id: missing_id,
                    quantity: 1,
                    pet_id: None,
                },
            ],
        ),
    )
    .await;
    assert!(result.is_err());

    let reloaded = products::Entity::find_by_id(product.id)
        .one(&state.orm)
        .await?
        .expect("product");
    assert_eq!(reloaded.stock, 7, "partial decrement must be rolled back");
    let count_after = consumption_records::Entity::find()
        .count(&state.orm)
        .await?;
    assert_eq!(count_after, count_before, "no record may survive a failed batch");

    // Stock cannot go negative.
    let result = consumption_service::register_consumption(
        &state,
        request(
            client_id,
            vec![LineItem::Produto {
                id: product.id,
                quantity: 99,
                pet_id: None,
            }],
        ),
    )
    .await;
    assert!(result.is_err());
    let reloaded = products::Entity::find_by_id(product.id)
        .one(&state.orm)
        .await?
        .expect("product");
    assert_eq!(reloaded.stock, 7);

    // A pet belonging to another client is rejected.
    let other_client = common::create_client(&state, "Bruno Lima", "bruno@example.com").await?;
    let result = consumption_service::register_consumption(
        &state,
        request(
            other_client,
            vec![LineItem::Servico {
                id: service.id,
                quantity: 1,
                pet_id: Some(pet_id),
            }],
        ),
    )
    .await;
    assert!(result.is_err());

    // Unknown client fails before any lookup side effects.
    let result = consumption_service::register_consumption(
        &state,
        request(
            Uuid::new_v4(),
            vec![LineItem::Servico {
                id: service.id,
                quantity: 1,
                pet_id: None,
            }],
        ),
    )
    .await;
    assert!(result.is_err());

    Ok(())
}
