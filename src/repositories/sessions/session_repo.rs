//! 세션 저장소
//!
//! 로그인한 사용자의 [`SessionUser`]를 Redis에 `<user id>` 키로 보관합니다.
//! TTL은 리프레시 토큰 수명과 같아서, 갱신 없이 방치된 세션은 스스로 만료됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use once_cell::sync::OnceCell;
use crate::caching::redis::RedisClient;
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::core::registry::{RepositoryRegistration, ServiceLocator};
use crate::domain::models::auth::session_user::SessionUser;

/// 세션 저장소 연산
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 세션을 저장하거나 덮어쓰고 TTL을 새로 시작합니다.
    async fn save(&self, user: &SessionUser) -> Result<(), AppError>;

    async fn find(&self, user_id: &str) -> Result<Option<SessionUser>, AppError>;

    async fn delete(&self, user_id: &str) -> Result<(), AppError>;
}

pub struct SessionRepository {
    redis: Arc<RedisClient>,
}

static SESSION_REPOSITORY_INSTANCE: OnceCell<Arc<SessionRepository>> = OnceCell::new();

impl SessionRepository {
    pub fn instance() -> Arc<Self> {
        SESSION_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<RedisClient>())))
            .clone()
    }

    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn save(&self, user: &SessionUser) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&user.id, user, JwtConfig::session_ttl_seconds())
            .await?;

        log::debug!("세션 저장: {}", user.id);
        Ok(())
    }

    async fn find(&self, user_id: &str) -> Result<Option<SessionUser>, AppError> {
        Ok(self.redis.get::<SessionUser>(user_id).await?)
    }

    async fn delete(&self, user_id: &str) -> Result<(), AppError> {
        self.redis.del(user_id).await?;

        log::debug!("세션 삭제: {}", user_id);
        Ok(())
    }
}

fn session_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(SessionRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

fn session_repository_initializer() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(async { Ok(()) })
}

inventory::submit! {
    RepositoryRegistration {
        name: "session_repository",
        constructor: session_repository_constructor,
        initializer: session_repository_initializer,
    }
}
