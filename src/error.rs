use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    // Authentication errors
    AccessTokenRequired,
    InvalidCredentials,
    InvalidToken,
    TokenExpired,
    AccessDenied,

    // Lookup errors
    NotFound(String),

    // Validation errors
    ValidationFailed(String),

    // Store errors
    DatabaseError(String),
    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::AccessTokenRequired => write!(f, "Access token required"),
            ApiError::InvalidCredentials => write!(f, "Invalid credentials"),
            ApiError::InvalidToken => write!(f, "Invalid token"),
            ApiError::TokenExpired => write!(f, "Token expired"),
            ApiError::AccessDenied => write!(f, "Access denied"),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::ValidationFailed(msg) => write!(f, "Validation failed: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ApiError {
    fn error_id(&self) -> &'static str {
        match self {
            ApiError::AccessTokenRequired => "access_token_required",
            ApiError::InvalidCredentials => "invalid_credentials",
            ApiError::InvalidToken => "invalid_token",
            ApiError::TokenExpired => "token_expired",
            ApiError::AccessDenied => "access_denied",
            ApiError::NotFound(_) => "not_found",
            ApiError::ValidationFailed(_) => "validation_failed",
            ApiError::DatabaseError(_) => "database_error",
            ApiError::InternalError(_) => "internal_error",
        }
    }

    // Store and runtime detail stays server-side; the caller only sees a
    // generic message for 5xx failures.
    fn public_message(&self) -> String {
        match self {
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::AccessTokenRequired | ApiError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::InvalidToken | ApiError::TokenExpired | ApiError::AccessDenied => {
                StatusCode::FORBIDDEN
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(detail = %self, "request failed");
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.error_id().to_string(),
            message: self.public_message(),
            code: None,
        })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<diesel::result::Error> for ApiError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => ApiError::NotFound("Record not found".to_string()),
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError::ValidationFailed(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn status_codes_follow_the_contract() {
        assert_eq!(
            ApiError::AccessTokenRequired.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::InvalidToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::TokenExpired.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::AccessDenied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::NotFound("Animal not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::ValidationFailed("name".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::DatabaseError("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn server_errors_do_not_leak_detail() {
        let response =
            ApiError::DatabaseError("SELECT * FROM users exploded".to_string()).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(body.contains("Internal server error"));
        assert!(!body.contains("SELECT"));
    }

    #[test]
    fn diesel_not_found_maps_to_404() {
        let error: ApiError = diesel::result::Error::NotFound.into();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }
}
