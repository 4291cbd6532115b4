//! Redis 세션 저장소

pub mod session_repo;

pub use session_repo::{SessionRepository, SessionStore};
