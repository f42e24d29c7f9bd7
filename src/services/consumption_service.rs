use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, LockType};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    dto::consumption::{LineItem, RegisterConsumptionRequest},
    entity::{
        clients::Entity as Clients,
        consumption_records::ActiveModel as RecordActive,
        pets::Entity as Pets,
        products::{Column as ProdCol, Entity as Products},
        services::Entity as Services,
    },
    error::{AppError, AppResult},
    response::Message,
    state::AppState,
};

/// Records one purchase event for a client: per line item, resolve the current
/// unit price, decrement product stock and insert a consumption record with the
/// price snapshot. The whole batch runs in one transaction, so a failing line
/// rolls back every decrement and insert before it.
pub async fn register_consumption(
    state: &AppState,
    payload: RegisterConsumptionRequest,
) -> AppResult<Message> {
    let (client_id, items) = payload.validate()?;

    let txn = state.orm.begin().await?;

    Clients::find_by_id(client_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::reference_not_found("Cliente", client_id))?;

    // Items are applied in request order; a product repeated across lines
    // accumulates its decrements under the same row lock.
    for item in items {
        if let Some(pet_id) = item.pet_id() {
            let pet = Pets::find_by_id(pet_id)
                .one(&txn)
                .await?
                .ok_or_else(|| AppError::reference_not_found("Pet", pet_id))?;
            if pet.owner_id != client_id {
                return Err(AppError::validation(
                    "O pet informado não pertence ao cliente.",
                ));
            }
        }

        let (product_id, service_id, unit_price, quantity) = match &item {
            LineItem::Produto { id, quantity, .. } => {
                let product = Products::find_by_id(*id)
                    .lock(LockType::Update)
                    .one(&txn)
                    .await?
                    .ok_or_else(|| AppError::reference_not_found("Produto", *id))?;

                if product.stock < *quantity {
                    return Err(AppError::validation(format!(
                        "Estoque insuficiente para o produto {}.",
                        product.name
                    )));
                }

                Products::update_many()
                    .col_expr(ProdCol::Stock, Expr::col(ProdCol::Stock).sub(*quantity))
                    .filter(ProdCol::Id.eq(*id))
                    .exec(&txn)
                    .await?;

                (Some(*id), None, product.price, *quantity)
            }
            LineItem::Servico { id, quantity, .. } => {
                let service = Services::find_by_id(*id)
                    .one(&txn)
                    .await?
                    .ok_or_else(|| AppError::reference_not_found("Serviço", *id))?;

                (None, Some(*id), service.price, *quantity)
            }
        };

        RecordActive {
            id: Set(Uuid::new_v4()),
            client_id: Set(client_id),
            pet_id: Set(item.pet_id()),
            product_id: Set(product_id),
            service_id: Set(service_id),
            quantity: Set(quantity),
            total_price: Set(unit_price * Decimal::from(quantity)),
            created_at: NotSet,
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    Ok(Message::new("Consumo registado com sucesso."))
}
