use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopClientByQuantity {
    #[serde(rename = "clienteId")]
    pub client_id: Uuid,
    #[serde(rename = "clienteNome")]
    pub client_name: String,
    #[serde(rename = "totalQuantidade")]
    pub total_quantity: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopClientByValue {
    #[serde(rename = "clienteId")]
    pub client_id: Uuid,
    #[serde(rename = "clienteNome")]
    pub client_name: String,
    #[serde(rename = "totalValor")]
    pub total_value: Decimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemConsumption {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopItemsReport {
    #[serde(rename = "produtos")]
    pub products: Vec<ItemConsumption>,
    #[serde(rename = "servicos")]
    pub services: Vec<ItemConsumption>,
}

/// `"tipo - raca"` → item name → summed quantity. BTreeMap keeps repeated
/// reads in one stable order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ConsumptionByPetReport(pub BTreeMap<String, BTreeMap<String, i64>>);
