pub mod client_service;
pub mod consumption_service;
pub mod report_service;
