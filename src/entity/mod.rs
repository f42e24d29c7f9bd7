pub mod clients;
pub mod consumption_records;
pub mod pets;
pub mod products;
pub mod services;

pub use clients::Entity as Clients;
pub use consumption_records::Entity as ConsumptionRecords;
pub use pets::Entity as Pets;
pub use products::Entity as Products;
pub use services::Entity as Services;
