use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{error::AppError, models::Pet};

/// Registration bundles the client with its first pet. Fields are optional so
/// missing data yields the contract's 400 instead of a deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClientRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    pub pet: Option<NewClientPet>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewClientPet {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "tipo")]
    pub species: Option<String>,
    #[serde(rename = "raca")]
    pub breed: Option<String>,
}

pub struct ValidClientRegistration {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub pet_name: String,
    pub pet_species: String,
    pub pet_breed: String,
}

impl CreateClientRequest {
    pub fn validate(self) -> Result<ValidClientRegistration, AppError> {
        let missing =
            || AppError::validation("Dados do cliente e de pelo menos um pet são obrigatórios.");
        let name = self.name.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let email = self.email.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let pet = self.pet.ok_or_else(missing)?;
        let pet_name = pet.name.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let pet_species = pet.species.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let pet_breed = pet.breed.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        Ok(ValidClientRegistration {
            name,
            email,
            phone: self.phone,
            pet_name,
            pet_species,
            pet_breed,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateClientRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientWithPets {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    pub pets: Vec<Pet>,
}
