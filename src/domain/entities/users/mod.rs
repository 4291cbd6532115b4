//! Users Entity Module
//!
//! 사용자 엔티티를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! // 이메일 인증을 마친 로컬 계정
//! let user = User::new_local("Jane".to_string(), "jane@example.com".to_string(), password_hash);
//!
//! // 소셜 로그인 계정 (비밀번호 없음)
//! let social = User::new_social("Jane".to_string(), "jane@gmail.com".to_string(), Some(avatar_url));
//! ```

pub mod user;

pub use user::*;
