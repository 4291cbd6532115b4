//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 `OnceCell` 싱글톤(`instance()`)이며 `inventory`로
//! [`ServiceRegistration`](crate::core::registry::ServiceRegistration)을 제출합니다.
//! 메일 전송기와 이미지 호스트처럼 외부 연결이 필요한 구현체는 `main`에서 만들어
//! `ServiceLocator`에 먼저 등록해야 합니다.
//!
//! # Modules
//!
//! - [`auth`] - 토큰, 활성화, 로그인/세션
//! - [`users`] - 프로필, 비밀번호, 아바타
//! - [`courses`] - 강의, 레슨 질문/답변
//! - [`mail`] - SMTP 메일 발송 (lettre + askama)
//! - [`media`] - 이미지 업로드 (Cloudinary)
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthService, courses::CourseService};
//!
//! let session = AuthService::instance().login(payload).await?;
//! let course = CourseService::instance().get_single_course(&id).await?;
//! ```

pub mod auth;
pub mod users;
pub mod courses;
pub mod mail;
pub mod media;
