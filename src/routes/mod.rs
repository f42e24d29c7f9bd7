use axum::{Router, routing::get};

use crate::state::AppState;

pub mod clients;
pub mod consumption;
pub mod doc;
pub mod health;
pub mod pets;
pub mod products;
pub mod reports;
pub mod services;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::api_welcome))
        .nest("/clientes", clients::router())
        .nest("/pets", pets::router())
        .nest("/produtos", products::router())
        .nest("/servicos", services::router())
        .nest("/consumos", consumption::router())
        .nest("/relatorios", reports::router())
}
