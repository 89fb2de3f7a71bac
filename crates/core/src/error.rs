use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors surfaced over HTTP.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed => 405,
            Self::Internal(_) => 500,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => Self::NotFound("Media not found".into()),
            CatalogError::DuplicateId(_) => Self::Internal(e.to_string()),
        }
    }
}

/// JSON error body: `{ "detail": "…" }`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub detail: String,
}

impl From<&ApiError> for ErrorEnvelope {
    fn from(e: &ApiError) -> Self {
        Self {
            detail: e.to_string(),
        }
    }
}
