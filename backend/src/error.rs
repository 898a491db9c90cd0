use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Données invalides")]
    Validation(Vec<String>),

    #[error("Élément {index}: {}", .details.join(", "))]
    BatchItem { index: usize, details: Vec<String> },

    #[error("Liste vide")]
    EmptyBatch,

    #[error("Requête JSON invalide: {0}")]
    BadPayload(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Erreur d'exécution: {0}")]
    Blocking(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ApiError {
    fn details(&self) -> Vec<String> {
        match self {
            ApiError::Validation(details) | ApiError::BatchItem { details, .. } => details.clone(),
            _ => Vec::new(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::BatchItem { .. }
            | ApiError::EmptyBatch
            | ApiError::BadPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            details: self.details(),
        })
    }
}
