//! # Domain Models Module
//!
//! 영속 엔티티가 아닌 내부 모델을 정의합니다.
//!
//! - [`auth`] - 세션 사용자(`SessionUser`), 인증 모드, 역할 요구 조건
//! - [`token`] - 액세스/리프레시/활성화 토큰 클레임과 토큰 쌍

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
