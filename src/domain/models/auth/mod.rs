//! 인증 관련 모델

pub mod authentication_request;
pub mod session_user;

pub use authentication_request::*;
pub use session_user::*;
