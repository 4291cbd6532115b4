//! 강의 데이터 액세스 계층
//!
//! - [`course_repo`] - `courses` 컬렉션 (MongoDB)
//! - [`course_cache_repo`] - 공개 조회 응답 캐시 (Redis)

pub mod course_repo;
pub mod course_cache_repo;

pub use course_repo::{CourseRepository, CourseStore};
pub use course_cache_repo::{CourseCache, CourseCacheRepository};
