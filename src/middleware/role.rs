//! Role-based authorization guard, composed on top of authentication.

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use std::marker::PhantomData;

use crate::{db::models::UserRole, error::ApiError, services::jwt::Claims};

/// The role a guarded route demands.
pub trait RolePolicy {
    const ROLE: UserRole;
}

pub struct AdminOnly;

impl RolePolicy for AdminOnly {
    const ROLE: UserRole = UserRole::Admin;
}

/// Authorization guard parameterized by the required role. Runs the
/// authentication guard first, then checks the token's role claim against
/// the policy — the claim is trusted as-is, with no store lookup. A
/// mismatch terminates the request with 403.
pub struct RequireRole<P: RolePolicy> {
    pub claims: Claims,
    _policy: PhantomData<P>,
}

pub type AdminUser = RequireRole<AdminOnly>;

impl<P: RolePolicy + 'static> FromRequest for RequireRole<P> {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = super::auth::authenticate(req).and_then(|claims| {
            if P::ROLE.matches(&claims.role) {
                Ok(Self {
                    claims,
                    _policy: PhantomData,
                })
            } else {
                Err(ApiError::AccessDenied)
            }
        });

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::JwtConfig, services::jwt::JwtService};
    use actix_web::{http::header, http::StatusCode, test, web, App, HttpResponse};

    fn jwt_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret".to_string(),
            token_expiry: 86400,
        })
    }

    async fn admin_area(admin: AdminUser) -> HttpResponse {
        HttpResponse::Ok().body(admin.claims.role)
    }

    fn admin_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(jwt_service()))
            .route("/admin", web::get().to(admin_area))
    }

    #[actix_web::test]
    async fn missing_token_is_unauthorized() {
        let app = test::init_service(admin_app()).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request())
            .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn non_admin_token_is_forbidden() {
        let app = test::init_service(admin_app()).await;

        let token = jwt_service().issue_token(7, "ana@example.com", "user").unwrap();
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/admin")
                .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn admin_token_passes() {
        let app = test::init_service(admin_app()).await;

        let token = jwt_service()
            .issue_token(1, "root@example.com", "admin")
            .unwrap();
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/admin")
                .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
