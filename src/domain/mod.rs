//! # Domain Layer Module
//!
//! 학습 플랫폼의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 매핑되는 영속 객체 (User, Course)
//! ├── models    - 토큰 클레임, 세션 사용자, 인증 모드 같은 내부 모델
//! └── dto       - HTTP 요청/응답 계약 (validator 기반 검증 포함)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! ## 필드 이름 규칙
//!
//! - 엔티티는 MongoDB에 `snake_case`로 저장됩니다.
//! - DTO와 세션 사용자는 프론트엔드 계약에 맞춰 `camelCase`로 직렬화되며,
//!   문서 식별자는 `_id`로 노출됩니다.

pub mod entities;
pub mod dto;
pub mod models;
