//! # 사용자 관리 서비스 구현
//!
//! 로그인한 사용자의 프로필 조회와 변경(이름/이메일, 비밀번호, 아바타)을 담당합니다.
//!
//! 모든 변경은 MongoDB에 반영한 뒤 Redis 세션을 같은 내용으로 덮어씁니다.
//! 인증 미들웨어는 세션만 읽으므로, 세션 갱신을 빠뜨리면 다음 요청부터 오래된 정보가 보입니다.

use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId, Document};
use once_cell::sync::OnceCell;
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::dto::users::request::{UpdateAvatarRequest, UpdatePasswordRequest, UpdateUserInfoRequest};
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::session_user::SessionUser;
use crate::repositories::{SessionRepository, SessionStore, UserRepository, UserStore};
use crate::services::auth::password::{hash_password, verify_password};
use crate::services::media::MediaService;
use crate::utils::string_utils::{normalize_email, parse_object_id};

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

pub struct UserService {
    user_repo: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    media: Arc<MediaService>,
}

static USER_SERVICE_INSTANCE: OnceCell<Arc<UserService>> = OnceCell::new();

impl UserService {
    pub fn instance() -> Arc<Self> {
        USER_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    UserRepository::instance(),
                    SessionRepository::instance(),
                    MediaService::instance(),
                ))
            })
            .clone()
    }

    pub fn new(user_repo: Arc<dyn UserStore>, sessions: Arc<dyn SessionStore>, media: Arc<MediaService>) -> Self {
        Self { user_repo, sessions, media }
    }

    /// 세션에서 사용자 정보를 읽고, 세션이 없으면 DB에서 읽어 세션을 다시 만듭니다.
    pub async fn get_user_info(&self, user_id: &str) -> Result<SessionUser, AppError> {
        if let Some(session) = self.sessions.find(user_id).await? {
            return Ok(session);
        }

        log::debug!("세션 미스, DB 조회: {}", user_id);
        let id = parse_object_id(user_id, "user")?;
        let user = self.user_repo.find_by_id(&id).await?.ok_or_else(user_not_found)?;

        self.refresh_session(&user).await
    }

    /// 이름/이메일 변경. 보내지 않은 필드는 유지됩니다.
    pub async fn update_user_info(&self, user_id: &str, request: UpdateUserInfoRequest) -> Result<User, AppError> {
        let id = parse_object_id(user_id, "user")?;
        let current = self.user_repo.find_by_id(&id).await?.ok_or_else(user_not_found)?;

        let mut fields = Document::new();

        if let Some(email) = request.email.as_deref().map(normalize_email) {
            if email != current.email {
                if self.user_repo.exists_by_email(&email).await? {
                    return Err(AppError::BadRequest("Email already exist".to_string()));
                }
                fields.insert("email", email);
            }
        }

        if let Some(name) = request.name {
            fields.insert("name", name);
        }

        if fields.is_empty() {
            return Ok(current);
        }

        let user = self.apply(&id, fields).await?;
        log::info!("👤 프로필 변경: {}", user_id);
        Ok(user)
    }

    pub async fn update_password(&self, user_id: &str, request: UpdatePasswordRequest) -> Result<User, AppError> {
        let id = parse_object_id(user_id, "user")?;
        let user = self.user_repo.find_by_id(&id).await?;

        let hash = user
            .as_ref()
            .and_then(|u| u.password.as_deref())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| AppError::BadRequest("User not found or invalid user".to_string()))?;

        if !verify_password(&request.old_password, hash) {
            log::warn!("비밀번호 변경 거절 (기존 비밀번호 불일치): {}", user_id);
            return Err(AppError::BadRequest("Invalid old password".to_string()));
        }

        if verify_password(&request.new_password, hash) {
            return Err(AppError::BadRequest(
                "New password cannot be the same as the old password".to_string(),
            ));
        }

        let new_hash = hash_password(&request.new_password)?;
        let user = self.apply(&id, doc! { "password": new_hash }).await?;

        log::info!("🔑 비밀번호 변경: {}", user_id);
        Ok(user)
    }

    /// 아바타 교체. 이미지 호스트에 올린 기존 아바타는 삭제됩니다.
    pub async fn update_avatar(&self, user_id: &str, request: UpdateAvatarRequest) -> Result<User, AppError> {
        let id = parse_object_id(user_id, "user")?;
        let current = self.user_repo.find_by_id(&id).await?.ok_or_else(user_not_found)?;

        let avatar = self
            .media
            .replace_avatar(current.avatar.as_ref(), &request.avatar)
            .await?;

        let avatar = mongodb::bson::to_bson(&avatar).context("아바타 직렬화 실패")?;

        self.apply(&id, doc! { "avatar": avatar }).await
    }

    async fn apply(&self, id: &ObjectId, fields: Document) -> Result<User, AppError> {
        let user = self
            .user_repo
            .update_fields(id, fields)
            .await?
            .ok_or_else(user_not_found)?;

        self.refresh_session(&user).await?;
        Ok(user)
    }

    async fn refresh_session(&self, user: &User) -> Result<SessionUser, AppError> {
        let session = SessionUser::from_user(user)?;
        self.sessions.save(&session).await?;
        Ok(session)
    }
}

fn user_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(UserService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "user_service",
        constructor: user_service_constructor,
    }
}
