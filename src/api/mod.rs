// API module for exposing the census engine via HTTP
// Author: Gabriel Demetrios Lafis

mod server;
mod routes;
mod handlers;
pub mod models;

pub use server::*;
pub use routes::*;
pub use handlers::*;
pub use models::*;

use std::error::Error;
use std::fmt;

use actix_web::http::StatusCode;
use actix_web::ResponseError;

use crate::processing::ProcessingError;

/// Represents an error in the API module
#[derive(Debug)]
pub enum ApiError {
    ProcessingError(ProcessingError),
    ValidationError(String),
    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::ProcessingError(err) => write!(f, "Processing error: {}", err),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl Error for ApiError {}

impl From<ProcessingError> for ApiError {
    fn from(err: ProcessingError) -> Self {
        ApiError::ProcessingError(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ProcessingError(_) | ApiError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
