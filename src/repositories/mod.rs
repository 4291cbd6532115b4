//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `OnceCell` 싱글톤(`instance()`)이며, `inventory`로
//! [`RepositoryRegistration`](crate::core::registry::RepositoryRegistration)을 제출합니다.
//! 기동 시 [`ServiceLocator::initialize_all`](crate::core::registry::ServiceLocator::initialize_all)이
//! 모든 리포지토리를 만들고 MongoDB 인덱스를 생성합니다.
//!
//! 서비스는 구체 타입 대신 저장소 트레이트([`UserStore`], [`CourseStore`], [`SessionStore`], [`CourseCache`])에
//! 의존하므로 테스트에서는 메모리 구현을 주입할 수 있습니다.
//!
//! | 리포지토리 | 저장소 | 용도 |
//! |------------|--------|------|
//! | [`UserRepository`] | MongoDB `users` | 계정 |
//! | [`CourseRepository`] | MongoDB `courses` | 강의, 레슨, 질문/답변 |
//! | [`SessionRepository`] | Redis `<user id>` | 로그인 세션 |
//! | [`CourseCacheRepository`] | Redis `allCourses`, `course:<id>` | 공개 조회 캐시 |
//!
//! ```rust,ignore
//! use crate::repositories::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod courses;
pub mod sessions;

#[cfg(test)]
pub(crate) mod testing;

pub use users::{UserRepository, UserStore};
pub use courses::{CourseCache, CourseCacheRepository, CourseRepository, CourseStore};
pub use sessions::{SessionRepository, SessionStore};
