//! 강의 응답 캐시
//!
//! 공개 조회(`getSingleCourse`, `getAllCourses`)의 미리보기 응답을 Redis에 보관합니다.
//! 강의가 바뀌는 모든 쓰기 뒤에는 [`CourseCache::invalidate`]를 호출해야 합니다.
//! 키에는 항상 `ObjectId::to_hex()`(소문자) 형태의 ID를 씁니다.
//!
//! 캐시 오류는 요청을 실패시키지 않습니다. 읽기 실패는 캐시 미스로, 쓰기 실패는 경고 로그로 처리합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use once_cell::sync::OnceCell;
use crate::caching::redis::RedisClient;
use crate::config::CacheConfig;
use crate::core::errors::AppError;
use crate::core::registry::{RepositoryRegistration, ServiceLocator};
use crate::domain::dto::courses::response::CourseResponse;

pub const ALL_COURSES_KEY: &str = "allCourses";

pub fn course_key(course_id: &str) -> String {
    format!("course:{}", course_id)
}

/// 공개 조회 캐시 연산. 실패는 호출자에게 전파하지 않습니다.
#[async_trait]
pub trait CourseCache: Send + Sync {
    async fn get_all(&self) -> Option<Vec<CourseResponse>>;

    async fn set_all(&self, courses: &[CourseResponse]);

    async fn get_one(&self, course_id: &str) -> Option<CourseResponse>;

    async fn set_one(&self, course: &CourseResponse);

    /// 단건 키와 목록 키를 함께 지웁니다.
    async fn invalidate(&self, course_id: &str);
}

pub struct CourseCacheRepository {
    redis: Arc<RedisClient>,
}

static COURSE_CACHE_REPOSITORY_INSTANCE: OnceCell<Arc<CourseCacheRepository>> = OnceCell::new();

impl CourseCacheRepository {
    pub fn instance() -> Arc<Self> {
        COURSE_CACHE_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<RedisClient>())))
            .clone()
    }

    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl CourseCache for CourseCacheRepository {
    async fn get_all(&self) -> Option<Vec<CourseResponse>> {
        match self.redis.get::<Vec<CourseResponse>>(ALL_COURSES_KEY).await {
            Ok(cached) => {
                log::debug!("강의 목록 캐시 {}", if cached.is_some() { "hit" } else { "miss" });
                cached
            }
            Err(e) => {
                log::warn!("강의 목록 캐시 읽기 실패: {}", e);
                None
            }
        }
    }

    async fn set_all(&self, courses: &[CourseResponse]) {
        if let Err(e) = self
            .redis
            .set_with_expiry(ALL_COURSES_KEY, &courses, CacheConfig::course_ttl_seconds())
            .await
        {
            log::warn!("강의 목록 캐시 저장 실패: {}", e);
        }
    }

    async fn get_one(&self, course_id: &str) -> Option<CourseResponse> {
        match self.redis.get::<CourseResponse>(&course_key(course_id)).await {
            Ok(cached) => {
                log::debug!("강의 캐시 {} ({})", if cached.is_some() { "hit" } else { "miss" }, course_id);
                cached
            }
            Err(e) => {
                log::warn!("강의 캐시 읽기 실패 ({}): {}", course_id, e);
                None
            }
        }
    }

    async fn set_one(&self, course: &CourseResponse) {
        if let Err(e) = self
            .redis
            .set_with_expiry(&course_key(&course.id), course, CacheConfig::course_ttl_seconds())
            .await
        {
            log::warn!("강의 캐시 저장 실패 ({}): {}", course.id, e);
        }
    }

    async fn invalidate(&self, course_id: &str) {
        let keys = vec![course_key(course_id), ALL_COURSES_KEY.to_string()];

        if let Err(e) = self.redis.del_multiple(&keys).await {
            log::warn!("강의 캐시 무효화 실패 ({}): {}", course_id, e);
        }
    }
}

fn course_cache_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(CourseCacheRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

fn course_cache_repository_initializer() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(async { Ok(()) })
}

inventory::submit! {
    RepositoryRegistration {
        name: "course_cache_repository",
        constructor: course_cache_repository_constructor,
        initializer: course_cache_repository_initializer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keys() {
        assert_eq!(ALL_COURSES_KEY, "allCourses");
        assert_eq!(course_key("64f1c0"), "course:64f1c0");
    }
}
