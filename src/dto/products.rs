use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<Decimal>,
    #[serde(rename = "estoque")]
    pub stock: Option<i32>,
}

pub struct ValidProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

impl CreateProductRequest {
    pub fn validate(self) -> Result<ValidProduct, AppError> {
        let missing = || AppError::validation("Nome, preço e estoque do produto são obrigatórios.");
        let name = self.name.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let price = self.price.ok_or_else(missing)?;
        let stock = self.stock.ok_or_else(missing)?;
        Ok(ValidProduct {
            name,
            description: self.description,
            price,
            stock,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Decimal,
    #[serde(rename = "estoque")]
    pub stock: i32,
}
