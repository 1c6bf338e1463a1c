//! Item operation errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item not found")]
    NotFound(String),

    #[error("Name and price are required")]
    Validation,

    #[error("Item already exists")]
    DuplicateName(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// JSON body sent for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ItemError {
    /// HTTP status matching this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ItemError::NotFound(_) => StatusCode::NOT_FOUND,
            ItemError::Validation => StatusCode::BAD_REQUEST,
            ItemError::DuplicateName(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
