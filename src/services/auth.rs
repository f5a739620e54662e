//! Login flow: credential lookup, password verification, token issuance.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::{models::User, schema::users, DbPool},
    error::{ApiError, ApiResult},
    services::{jwt::JwtService, password},
};

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

pub struct AuthService {
    db_pool: DbPool,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(db_pool: DbPool, jwt_service: JwtService) -> Self {
        Self {
            db_pool,
            jwt_service,
        }
    }

    /// An unknown email and a wrong password are indistinguishable to the
    /// caller; both come back as `InvalidCredentials` and no token is
    /// issued.
    pub async fn login(&self, request: LoginRequest) -> ApiResult<LoginResponse> {
        let mut conn = self
            .db_pool
            .get()
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        let user = users::table
            .filter(users::email.eq(&request.email))
            .first::<User>(&mut conn)
            .optional()?
            .ok_or(ApiError::InvalidCredentials)?;

        if !password::verify_password(&request.password, &user.password_hash)? {
            return Err(ApiError::InvalidCredentials);
        }

        let token = self
            .jwt_service
            .issue_token(user.id, &user.email, &user.role)?;

        Ok(LoginResponse {
            token,
            user: user.into(),
        })
    }
}
