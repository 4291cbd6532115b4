//! AuthMiddleware 인증 로직
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::config::CookieConfig;
use crate::core::errors::AppError;
use crate::domain::models::auth::authentication_request::{AuthMode, RequiredRole};
use crate::domain::models::auth::session_user::SessionUser;
use crate::services::auth::AuthService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let auth_result = match access_token(&req) {
                Some(token) => AuthService::instance().authenticate(&token).await,
                None => Err(AppError::AuthenticationError("Unauthorized Access".to_string())),
            };

            match (&mode, auth_result) {
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패 {}: {}", req.path(), err);
                    return Ok(reject(req, err));
                },
                (AuthMode::Required, Ok(user)) => {
                    if let Err(err) = check_role(required_role.as_ref(), &user) {
                        log::warn!("권한 부족: 사용자 {} (role={}), 필요 권한: {:?}",
                            user.id, user.role, required_role);
                        return Ok(reject(req, err));
                    }

                    log::debug!("인증 성공: 사용자 {}", user.id);
                    req.extensions_mut().insert(user);
                },
                (AuthMode::Optional, Ok(user)) => {
                    if check_role(required_role.as_ref(), &user).is_ok() {
                        log::debug!("선택적 인증 성공: 사용자 {}", user.id);
                        req.extensions_mut().insert(user);
                    }
                },
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 비로그인 요청 진행");
                },
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn access_token(req: &ServiceRequest) -> Option<String> {
    req.cookie(CookieConfig::ACCESS_TOKEN)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// 역할 요구 조건 검사. 조건이 없으면 통과합니다.
pub(crate) fn check_role(required: Option<&RequiredRole>, user: &SessionUser) -> Result<(), AppError> {
    match required {
        Some(role) if !role.is_satisfied(&user.role) => Err(AppError::AuthorizationError(format!(
            "Role: {} is not allowed to access this resource",
            user.role
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> SessionUser {
        SessionUser {
            id: "u1".to_string(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            role: role.to_string(),
            avatar: None,
            is_verified: true,
            courses: Vec::new(),
        }
    }

    #[test]
    fn test_no_role_requirement_passes() {
        assert!(check_role(None, &user("user")).is_ok());
    }

    #[test]
    fn test_role_mismatch_names_the_role() {
        let required = RequiredRole::Single("admin".to_string());

        match check_role(Some(&required), &user("user")) {
            Err(AppError::AuthorizationError(msg)) => {
                assert_eq!(msg, "Role: user is not allowed to access this resource")
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(check_role(Some(&required), &user("admin")).is_ok());
    }
}
