//! 인증 서비스 모듈
//!
//! - [`token_service`] - 액세스/리프레시 JWT 서명과 검증 (HS256, 토큰별 시크릿)
//! - [`activation_service`] - 가입 활성화 토큰과 4자리 코드
//! - [`password`] - bcrypt 해싱
//! - [`auth_service`] - 가입, 로그인, 소셜 로그인, 갱신, 로그아웃, 요청 인증
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let session = AuthService::instance().login(payload).await?;
//! let user = AuthService::instance().authenticate(&access_token).await?;
//! ```

pub mod token_service;
pub mod activation_service;
pub mod password;
pub mod auth_service;

pub use token_service::TokenService;
pub use activation_service::{ActivationService, ActivationTicket};
pub use auth_service::{AuthService, AuthSession};
