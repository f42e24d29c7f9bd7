use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateServiceRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<Decimal>,
}

pub struct ValidService {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

impl CreateServiceRequest {
    pub fn validate(self) -> Result<ValidService, AppError> {
        let missing = || AppError::validation("Nome e preço do serviço são obrigatórios.");
        let name = self.name.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let price = self.price.ok_or_else(missing)?;
        Ok(ValidService {
            name,
            description: self.description,
            price,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateServiceRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Decimal,
}
