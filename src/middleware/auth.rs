//! Bearer-token authentication guard for protected routes.

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{
    error::ApiError,
    services::jwt::{Claims, JwtService},
};

/// Guard that admits a request only when it carries a verifiable bearer
/// token. On failure the handler is never invoked: a missing header or
/// token segment terminates the request with 401, a token that fails
/// verification with 403. No data-store access happens here; the claims
/// are trusted verbatim for the token's lifetime.
pub struct Authenticated(pub Claims);

impl FromRequest for Authenticated {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(Authenticated))
    }
}

pub(crate) fn authenticate(req: &HttpRequest) -> Result<Claims, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| {
            auth_header
                .to_str()
                .ok()
                .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        })
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::AccessTokenRequired)?;

    let jwt_service = req
        .app_data::<web::Data<JwtService>>()
        .ok_or_else(|| ApiError::InternalError("JWT service not configured".to_string()))?;

    jwt_service.verify_token(token)
}
