use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Recurso não encontrado.")]
    NotFound,

    #[error("{entity} com id {id} não encontrado.")]
    ReferenceNotFound { entity: &'static str, id: Uuid },

    #[error("Erro de base de dados.")]
    DbError(#[from] sqlx::Error),

    #[error("Erro de base de dados.")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Não foi possível gerar o relatório.")]
    ReportGeneration(#[source] sqlx::Error),

    #[error("Erro interno do servidor.")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn reference_not_found(entity: &'static str, id: Uuid) -> Self {
        AppError::ReferenceNotFound { entity, id }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone(), None),
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string(), None),
            AppError::ReferenceNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "Referência não encontrada.".to_string(),
                Some(self.to_string()),
            ),
            AppError::DbError(_) | AppError::OrmError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string(), None)
            }
            AppError::ReportGeneration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string(), None)
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string(), None),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "request failed");
        }

        let body = ErrorBody { error, details };
        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_not_found_names_entity_and_id() {
        let id = Uuid::nil();
        let err = AppError::reference_not_found("Produto", id);
        assert_eq!(
            err.to_string(),
            format!("Produto com id {id} não encontrado.")
        );
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let response = AppError::validation("Dados inválidos.").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn reference_not_found_maps_to_not_found() {
        let response = AppError::reference_not_found("Serviço", Uuid::nil()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
