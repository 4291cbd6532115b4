//! 사용자 요청 DTO
//!
//! - [`auth_request`] - 가입, 활성화, 로그인, 소셜 로그인
//! - [`update_request`] - 프로필, 비밀번호, 아바타 변경

pub mod auth_request;
pub mod update_request;

pub use auth_request::*;
pub use update_request::*;
