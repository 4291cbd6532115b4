//! 학습 플랫폼 백엔드
//!
//! 강의 판매/수강 서비스를 위한 REST API 서버입니다.
//! 쿠키 기반 JWT 세션, 메일 활성화 가입, 강의 관리, 레슨별 질문/답변을 제공합니다.
//!
//! # Features
//!
//! - **가입/인증**: 메일 활성화 코드, 로그인, 소셜 로그인, 토큰 갱신, 로그아웃
//! - **세션**: Redis에 캐시된 비밀번호 없는 사용자 레코드 (`SessionUser`)
//! - **프로필**: 이름/이메일, 비밀번호, 아바타(이미지 호스트 업로드) 변경
//! - **강의**: 관리자 생성/수정, 공개 미리보기(캐시), 수강생 전체 콘텐츠, 질문/답변 + 답변 알림 메일
//! - **싱글톤 DI**: `OnceCell` + `inventory` 기반 서비스 레지스트리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/v1 REST 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← access_token 쿠키 + Redis 세션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증, 응답/쿠키
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 메일(SMTP), 이미지(Cloudinary)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use learning_platform_backend::services::auth::AuthService;
//! use learning_platform_backend::services::courses::CourseService;
//!
//! let session = AuthService::instance().login(request).await?;
//! let courses = CourseService::instance().get_all_courses().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
