pub mod clients;
pub mod consumption;
pub mod pets;
pub mod products;
pub mod reports;
pub mod services;
