//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 인증/인가 같은 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `access_token` 쿠키의 JWT 검증
//! - Redis 세션에서 사용자 조회 후 request extension에 저장
//! - 필수/선택 인증 모드, 역할(`admin`) 검사
//!
//! | 상황 | 응답 |
//! |------|------|
//! | 쿠키 없음 | 401 `Unauthorized Access` |
//! | 토큰 서명 오류 / 만료 | 401 |
//! | 세션 없음 | 400 `Please login to access this resource` |
//! | 역할 불일치 | 403 `Role: <role> is not allowed to access this resource` |
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::scope("/api/v1/admin")
//!     .wrap(AuthMiddleware::required_with_role("admin"))
//!     .route("/create-course", web::post().to(create_course));
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
