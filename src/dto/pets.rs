use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePetRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "tipo")]
    pub species: Option<String>,
    #[serde(rename = "raca")]
    pub breed: Option<String>,
    #[serde(rename = "donoId")]
    pub owner_id: Option<Uuid>,
}

pub struct ValidPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub owner_id: Uuid,
}

impl CreatePetRequest {
    pub fn validate(self) -> Result<ValidPet, AppError> {
        let missing = || AppError::validation("Nome, tipo, raça e dono do pet são obrigatórios.");
        let name = self.name.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let species = self.species.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let breed = self.breed.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let owner_id = self.owner_id.ok_or_else(missing)?;
        Ok(ValidPet {
            name,
            species,
            breed,
            owner_id,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePetRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub species: String,
    #[serde(rename = "raca")]
    pub breed: String,
}
