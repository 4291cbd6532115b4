//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 요청/응답 본문을 정의합니다.
//!
//! - 요청 DTO는 `validator::Validate`를 구현하며, 핸들러가 `payload.validate()?`로 검증합니다.
//!   검증 메시지는 그대로 클라이언트에 전달되므로 사용자용 문구로 작성합니다.
//! - 응답 DTO는 `camelCase`로 직렬화되고 문서 ID는 `_id` 문자열로 노출됩니다.
//!   강의 응답은 Redis 캐시에 그대로 저장되므로 `Deserialize`도 구현합니다.
//!
//! ```text
//! dto/
//! ├── common   - MessageResponse, 날짜 포맷
//! ├── users    - 가입/활성화/로그인/소셜/프로필 수정 요청, 사용자/인증 응답
//! └── courses  - 강의 생성/수정, 질문/답변 요청, 강의 응답
//! ```

pub mod common;
pub mod users;
pub mod courses;

pub use common::*;
pub use users::*;
pub use courses::*;
