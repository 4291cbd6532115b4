//! 사용자 프로필 서비스
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user = UserService::instance().update_user_info(&session.id, payload).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
