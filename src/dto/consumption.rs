use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterConsumptionRequest {
    #[serde(rename = "clienteId")]
    pub client_id: Option<Uuid>,
    pub items: Option<Vec<LineItem>>,
}

/// One purchased line. The `tipo` tag decides whether `id` points at a product
/// or a service; `petId` optionally attributes the line to one of the client's
/// pets for the by-pet report.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(tag = "tipo", rename_all = "lowercase")]
pub enum LineItem {
    Produto {
        id: Uuid,
        #[serde(rename = "quantidade")]
        quantity: i32,
        #[serde(rename = "petId", default)]
        pet_id: Option<Uuid>,
    },
    Servico {
        id: Uuid,
        #[serde(rename = "quantidade")]
        quantity: i32,
        #[serde(rename = "petId", default)]
        pet_id: Option<Uuid>,
    },
}

impl LineItem {
    pub fn quantity(&self) -> i32 {
        match self {
            LineItem::Produto { quantity, .. } | LineItem::Servico { quantity, .. } => *quantity,
        }
    }

    pub fn pet_id(&self) -> Option<Uuid> {
        match self {
            LineItem::Produto { pet_id, .. } | LineItem::Servico { pet_id, .. } => *pet_id,
        }
    }
}

impl RegisterConsumptionRequest {
    /// Precondition for registration: a client id and at least one item.
    pub fn validate(self) -> Result<(Uuid, Vec<LineItem>), AppError> {
        let invalid = || AppError::validation("Dados inválidos para registar consumo.");
        let client_id = self.client_id.ok_or_else(invalid)?;
        let items = self.items.filter(|i| !i.is_empty()).ok_or_else(invalid)?;
        if items.iter().any(|item| item.quantity() <= 0) {
            return Err(AppError::validation(
                "A quantidade de cada item deve ser positiva.",
            ));
        }
        Ok((client_id, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_product_line() {
        let item: LineItem = serde_json::from_value(json!({
            "tipo": "produto",
            "id": "00000000-0000-0000-0000-000000000005",
            "quantidade": 2
        }))
        .expect("line item");
        assert!(matches!(item, LineItem::Produto { quantity: 2, pet_id: None, .. }));
    }

    #[test]
    fn parses_service_line_with_pet() {
        let item: LineItem = serde_json::from_value(json!({
            "tipo": "servico",
            "id": "00000000-0000-0000-0000-000000000001",
            "quantidade": 1,
            "petId": "00000000-0000-0000-0000-000000000009"
        }))
        .expect("line item");
        assert!(matches!(item, LineItem::Servico { pet_id: Some(_), .. }));
    }

    #[test]
    fn rejects_unknown_kind_tag() {
        let result: Result<LineItem, _> = serde_json::from_value(json!({
            "tipo": "assinatura",
            "id": "00000000-0000-0000-0000-000000000001",
            "quantidade": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_client_or_items() {
        let no_client = RegisterConsumptionRequest {
            client_id: None,
            items: Some(vec![]),
        };
        assert!(no_client.validate().is_err());

        let empty_items = RegisterConsumptionRequest {
            client_id: Some(Uuid::nil()),
            items: Some(vec![]),
        };
        assert!(empty_items.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let request = RegisterConsumptionRequest {
            client_id: Some(Uuid::nil()),
            items: Some(vec![LineItem::Produto {
                id: Uuid::nil(),
                quantity: 0,
                pet_id: None,
            }]),
        };
        assert!(request.validate().is_err());
    }
}
