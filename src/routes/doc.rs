use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        clients::{ClientWithPets, CreateClientRequest, NewClientPet, UpdateClientRequest},
        consumption::{LineItem, RegisterConsumptionRequest},
        pets::{CreatePetRequest, UpdatePetRequest},
        products::{CreateProductRequest, UpdateProductRequest},
        reports::{
            ConsumptionByPetReport, ItemConsumption, TopClientByQuantity, TopClientByValue,
            TopItemsReport,
        },
        services::{CreateServiceRequest, UpdateServiceRequest},
    },
    models::{Client, Pet, Product, Service},
    response::Message,
    routes::{clients, consumption, health, pets, products, reports, services},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::api_welcome,
        clients::create_client,
        clients::list_clients,
        clients::update_client,
        clients::delete_client,
        pets::create_pet,
        pets::update_pet,
        pets::delete_pet,
        products::create_product,
        products::list_products,
        products::update_product,
        products::delete_product,
        services::create_service,
        services::list_services,
        services::update_service,
        services::delete_service,
        consumption::register_consumption,
        reports::top_clients_by_quantity,
        reports::top_clients_by_value,
        reports::top_items_consumed,
        reports::consumption_by_pet
    ),
    components(
        schemas(
            Client,
            Pet,
            Product,
            Service,
            ClientWithPets,
            CreateClientRequest,
            NewClientPet,
            UpdateClientRequest,
            CreatePetRequest,
            UpdatePetRequest,
            CreateProductRequest,
            UpdateProductRequest,
            CreateServiceRequest,
            UpdateServiceRequest,
            RegisterConsumptionRequest,
            LineItem,
            TopClientByQuantity,
            TopClientByValue,
            ItemConsumption,
            TopItemsReport,
            ConsumptionByPetReport,
            Message
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Clientes", description = "Client endpoints"),
        (name = "Pets", description = "Pet endpoints"),
        (name = "Produtos", description = "Product endpoints"),
        (name = "Servicos", description = "Service endpoints"),
        (name = "Consumos", description = "Consumption registration"),
        (name = "Relatorios", description = "Aggregate reports"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
