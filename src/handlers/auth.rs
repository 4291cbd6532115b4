//! # Authentication HTTP Handlers
//!
//! 가입/활성화, 로그인, 소셜 로그인, 토큰 갱신, 로그아웃 엔드포인트입니다.
//! 로그인 계열 응답은 토큰을 `access_token` / `refresh_token` 쿠키로 내려보내고,
//! 본문에는 세션 사용자와 액세스 토큰을 담습니다.
//!
//! | 메서드 | 경로 | 인증 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/registerUser` | - | 201 |
//! | `POST` | `/activateUser` | - | 201 |
//! | `POST` | `/loginUser` | - | 200 |
//! | `POST` | `/socialAuth` | - | 200 |
//! | `GET` | `/refreshToken` | refresh 쿠키 | 200 |
//! | `GET` | `/logoutUser` | 필수 | 200 |

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::config::CookieConfig;
use crate::core::errors::AppError;
use crate::domain::dto::common::MessageResponse;
use crate::domain::dto::users::request::{ActivationRequest, LoginRequest, RegisterRequest, SocialAuthRequest};
use crate::domain::dto::users::response::{AuthResponse, RegistrationResponse};
use crate::domain::models::auth::session_user::SessionUser;
use crate::handlers::cookies::{clear_token_cookies, set_token_cookies};
use crate::middlewares::AuthMiddleware;
use crate::services::auth::{AuthService, AuthSession};

fn session_response(session: AuthSession) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    set_token_cookies(&mut builder, &session.tokens);
    builder.json(AuthResponse::new(session.user, session.tokens.access_token))
}

/// 가입 요청
///
/// 계정은 활성화 후에 만들어집니다. 4자리 코드가 메일로 발송되고,
/// 응답의 `activationToken`과 함께 `/activateUser`로 보내야 합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/registerUser \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Jane","email":"jane@example.com","password":"secret123"}'
/// ```
#[post("/registerUser")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token = AuthService::instance().register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(RegistrationResponse::new(token)))
}

/// 활성화 코드 확인 후 계정 생성
#[post("/activateUser")]
pub async fn activate(
    payload: web::Json<ActivationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = AuthService::instance().activate(payload.into_inner()).await?;
    log::info!("✅ 계정 활성화: {}", user.email);

    Ok(HttpResponse::Created().json(serde_json::json!({ "success": true })))
}

#[post("/loginUser")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let session = AuthService::instance().login(payload.into_inner()).await?;

    Ok(session_response(session))
}

/// 소셜 로그인
///
/// 프론트엔드가 OAuth 프로바이더에서 받은 `email`, `name`, `avatar`를 보냅니다.
#[post("/socialAuth")]
pub async fn social_auth(
    payload: web::Json<SocialAuthRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let session = AuthService::instance().social_auth(payload.into_inner()).await?;

    Ok(session_response(session))
}

/// `refresh_token` 쿠키로 토큰 쌍을 다시 발급합니다.
#[get("/refreshToken")]
pub async fn refresh_token(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let cookie = req.cookie(CookieConfig::REFRESH_TOKEN);
    let token = cookie.as_ref().map(|c| c.value());

    let session = AuthService::instance().refresh(token).await?;

    Ok(session_response(session))
}

#[get("/logoutUser", wrap = "AuthMiddleware::required()")]
pub async fn logout(user: SessionUser) -> Result<HttpResponse, AppError> {
    AuthService::instance().logout(&user.id).await?;

    let mut builder = HttpResponse::Ok();
    clear_token_cookies(&mut builder);

    Ok(builder.json(MessageResponse::ok("User logged out successfully")))
}
