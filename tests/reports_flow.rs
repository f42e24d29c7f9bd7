mod common;

use petshop_api::{
    dto::consumption::{LineItem, RegisterConsumptionRequest},
    services::{consumption_service, report_service},
};
use rust_decimal_macros::dec;
use uuid::Uuid;

fn request(client_id: Uuid, items: Vec<LineItem>) -> RegisterConsumptionRequest {
    RegisterConsumptionRequest {
        client_id: Some(client_id),
        items: Some(items),
    }
}

// Reporting flow over a known consumption history: 3 units of a 10.00 product
// plus 1 unit of a 50.00 service must rank the client at 80.00.
#[tokio::test]
async fn reporting_flow() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let client_id = common::create_client(&state, "Cliente Um", "um@example.com").await?;
    let pet_id = common::create_pet(&state, client_id, "Rex", "Cão", "Labrador").await?;
    let product = common::create_product(&state, "Ração Premium", dec!(10.00), 100).await?;
    let service = common::create_service(&state, "Banho e Tosa", dec!(50.00)).await?;

    consumption_service::register_consumption(
        &state,
        request(
            client_id,
            vec![
                LineItem::Produto {
                    id: product.id,
                    quantity: 3,
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

    let by_value = report_service::top_clients_by_value(&state).await?;
    assert_eq!(by_value.len(), 1);
    assert_eq!(by_value[0].client_id, client_id);
    assert_eq!(by_value[0].client_name, "Cliente Um");
    assert_eq!(by_value[0].total_value, dec!(80.00));

    let by_quantity = report_service::top_clients_by_quantity(&state).await?;
    assert_eq!(by_quantity.len(), 1);
    assert_eq!(by_quantity[0].total_quantity, 4);

    let top_items = report_service::top_items_consumed(&state).await?;
    assert_eq!(top_items.products.len(), 1);
    assert_eq!(top_items.products[0].name, "Ração Premium");
    assert_eq!(top_items.products[0].quantity, 3);
    assert_eq!(top_items.services.len(), 1);
    assert_eq!(top_items.services[0].name, "Banho e Tosa");
    assert_eq!(top_items.services[0].quantity, 1);

    // Only the pet-tagged line lands in the by-pet report.
    let by_pet = report_service::consumption_by_pet(&state).await?;
    let group = by_pet.0.get("Cão - Labrador").expect("pet group");
    assert_eq!(group.get("Banho e Tosa"), Some(&1));
    assert_eq!(group.get("Ração Premium"), None);

    // Repeated reads return the same data absent intervening mutation.
    let again = report_service::top_items_consumed(&state).await?;
    assert_eq!(
        serde_json::to_value(&top_items)?,
        serde_json::to_value(&again)?
    );

    // With 13 consuming clients, the quantity ranking caps at 10 entries in
    // non-increasing order and the value ranking at 5.
    for i in 0..12 {
        let other = common::create_client(
            &state,
            &format!("Cliente {i}"),
            &format!("cliente{i}@example.com"),
        )
        .await?;
        consumption_service::register_consumption(
            &state,
            request(
                other,
                vec![LineItem::Produto {
                    id: product.id,
                    quantity: i + 1,
                    pet_id: None,
                }],
            ),
        )
        .await?;
    }

    let by_quantity = report_service::top_clients_by_quantity(&state).await?;
    assert_eq!(by_quantity.len(), 10);
    assert!(
        by_quantity
            .windows(2)
            .all(|pair| pair[0].total_quantity >= pair[1].total_quantity),
        "ranking must be non-increasing"
    );

    let by_value = report_service::top_clients_by_value(&state).await?;
    assert_eq!(by_value.len(), 5);
    assert_eq!(by_value[0].total_value, dec!(120.00), "12 units at 10.00");

    Ok(())
}
