//! # User Profile HTTP Handlers
//!
//! 로그인한 사용자의 정보 조회와 변경 엔드포인트입니다. 모두 인증이 필요하며,
//! 대상 사용자는 항상 세션 사용자 자신입니다.
//!
//! | 메서드 | 경로 | 상태 코드 |
//! |--------|------|-----------|
//! | `GET` | `/me` | 200 |
//! | `PUT` | `/updateUserInfo` | 201 |
//! | `PUT` | `/updateUserPassword` | 201 |
//! | `PUT` | `/updateUserAvatar` | 200 |

use actix_web::{get, put, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{UpdateAvatarRequest, UpdatePasswordRequest, UpdateUserInfoRequest};
use crate::domain::dto::users::response::{SessionUserEnvelope, UserEnvelope};
use crate::domain::models::auth::session_user::SessionUser;
use crate::middlewares::AuthMiddleware;
use crate::services::users::UserService;

/// 현재 사용자 조회
///
/// 세션(Redis)을 먼저 보고, 없으면 DB에서 읽어 세션을 다시 채웁니다.
#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn get_user_info(user: SessionUser) -> Result<HttpResponse, AppError> {
    let user = UserService::instance().get_user_info(&user.id).await?;

    Ok(HttpResponse::Ok().json(SessionUserEnvelope::new(user)))
}

/// 이름/이메일 변경
///
/// ```json
/// { "name": "Jane Doe", "email": "jane.doe@example.com" }
/// ```
#[put("/updateUserInfo", wrap = "AuthMiddleware::required()")]
pub async fn update_user_info(
    user: SessionUser,
    payload: web::Json<UpdateUserInfoRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let updated = UserService::instance()
        .update_user_info(&user.id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(UserEnvelope::new(updated)))
}

#[put("/updateUserPassword", wrap = "AuthMiddleware::required()")]
pub async fn update_password(
    user: SessionUser,
    payload: web::Json<UpdatePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let updated = UserService::instance()
        .update_password(&user.id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(UserEnvelope::new(updated)))
}

/// 아바타 변경. `avatar`는 data URI 또는 이미지 URL
#[put("/updateUserAvatar", wrap = "AuthMiddleware::required()")]
pub async fn update_avatar(
    user: SessionUser,
    payload: web::Json<UpdateAvatarRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let updated = UserService::instance()
        .update_avatar(&user.id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(UserEnvelope::new(updated)))
}
