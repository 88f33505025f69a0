//! Maps `ns_core::errors::DomainError` onto the HTTP surface.
//!
//! Every handler returns `Result<HttpResponse, ApiError>`; `ApiError`
//! implements `actix_web::ResponseError` so `?` alone is enough to produce
//! the right status code and the shared `ErrorResponse` envelope (spec §7).

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use ns_core::errors::{DefenseError, DomainError};
use ns_shared::errors::ErrorResponse;

#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        tracing::warn!(code = self.0.code(), "request failed: {}", self.0);
        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.0.code(), self.0.user_message()))
    }
}

fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Input(_) => StatusCode::BAD_REQUEST,
        DomainError::Auth(_) => StatusCode::UNAUTHORIZED,
        DomainError::Username(_) => StatusCode::CONFLICT,
        DomainError::Avatar(_) => StatusCode::BAD_REQUEST,
        DomainError::Session(_) => StatusCode::UNAUTHORIZED,
        DomainError::Defense(DefenseError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
        DomainError::Defense(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Content(_) => StatusCode::NOT_FOUND,
        DomainError::Progress(_) => StatusCode::CONFLICT,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
