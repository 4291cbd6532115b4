//! 쿠키 기반 인증 미들웨어
//!
//! `access_token` 쿠키를 검증하고 Redis 세션에서 [`SessionUser`](crate::domain::models::auth::SessionUser)를
//! 꺼내 request extension에 넣습니다. 실제 처리는 [`AuthMiddlewareService`]가 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::authentication_request::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 미들웨어
pub struct AuthMiddleware {
    mode: AuthMode,
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            required_role: None,
        }
    }

    pub fn new_with_role(mode: AuthMode, required_role: RequiredRole) -> Self {
        Self {
            mode,
            required_role: Some(required_role),
        }
    }

    /// 로그인 필수
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 로그인하지 않아도 통과
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    /// 로그인 + 특정 역할 필수 (예: `"admin"`)
    pub fn required_with_role(role: &str) -> Self {
        Self::new_with_role(
            AuthMode::Required,
            RequiredRole::Single(role.to_string())
        )
    }

    pub fn required_with_roles(roles: Vec<&str>) -> Self {
        let role_strings: Vec<String> = roles.into_iter().map(|s| s.to_string()).collect();
        Self::new_with_role(
            AuthMode::Required,
            RequiredRole::Any(role_strings)
        )
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use crate::domain::models::auth::{OptionalUser, SessionUser};

    async fn protected(user: SessionUser) -> HttpResponse {
        HttpResponse::Ok().body(user.id)
    }

    async fn public(user: OptionalUser) -> HttpResponse {
        HttpResponse::Ok().body(if user.0.is_some() { "user" } else { "guest" })
    }

    #[actix_web::test]
    async fn test_required_without_cookie_is_unauthorized() {
        let app = test::init_service(
            App::new().service(
                web::scope("/me")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(protected)),
            ),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Unauthorized Access");
    }

    #[actix_web::test]
    async fn test_admin_route_without_cookie_is_unauthorized() {
        let app = test::init_service(
            App::new().service(
                web::scope("/admin")
                    .wrap(AuthMiddleware::required_with_role("admin"))
                    .route("", web::get().to(protected)),
            ),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_optional_without_cookie_continues_as_guest() {
        let app = test::init_service(
            App::new().service(
                web::scope("/courses")
                    .wrap(AuthMiddleware::optional())
                    .route("", web::get().to(public)),
            ),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/courses").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "guest");
    }
}
