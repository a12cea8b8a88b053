use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Cocktail not found: {0}")]
    CocktailNotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::CocktailNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

impl From<shaker_core::Error> for ApiError {
    fn from(e: shaker_core::Error) -> Self {
        match e {
            shaker_core::Error::CocktailNotFound(name) => ApiError::CocktailNotFound(name),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}
