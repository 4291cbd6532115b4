//! # HTTP Request Handlers Module
//!
//! actix-web 속성 매크로(`#[get]`, `#[post]`, `#[put]`)로 선언된 핸들러입니다.
//! 핸들러는 요청 DTO를 `validate()`로 검증하고, 싱글톤 서비스에 위임한 뒤,
//! 결과를 응답 DTO로 감쌉니다. 모든 에러는 `AppError`로 전파되어
//! `{ "success": false, "message": ... }` 형태로 응답됩니다.
//!
//! ```text
//! Client
//!   │  HTTP + access_token / refresh_token 쿠키
//!   ▼
//! AuthMiddleware (wrap = ...)  ← 라우트별 인증/역할 검사
//!   ▼
//! Handlers (이 모듈)            ← 검증, 응답 변환, 쿠키
//!   ▼
//! Services → Repositories → MongoDB / Redis
//! ```
//!
//! 인증이 필요한 핸들러는 매크로의 `wrap` 인자로 미들웨어를 붙이고,
//! `SessionUser` 추출자로 세션 사용자를 받습니다.
//!
//! ```rust,ignore
//! #[get("/me", wrap = "AuthMiddleware::required()")]
//! pub async fn get_user_info(user: SessionUser) -> Result<HttpResponse, AppError> {
//!     let user = UserService::instance().get_user_info(&user.id).await?;
//!     Ok(HttpResponse::Ok().json(SessionUserEnvelope::new(user)))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 가입, 활성화, 로그인, 소셜 로그인, 토큰 갱신, 로그아웃
//! - [`users`] - 내 정보, 프로필/비밀번호/아바타 변경
//! - [`courses`] - 강의 관리, 공개 조회, 수강 콘텐츠, 질문/답변
//! - [`cookies`] - 인증 쿠키 생성/삭제

pub mod auth;
pub mod users;
pub mod courses;
pub mod cookies;
