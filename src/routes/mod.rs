//! API 라우트 설정 모듈
//!
//! 모든 API는 `/api/v1` 아래에 있고, 헬스체크만 루트(`/health`)에 있습니다.
//! 인증/역할 검사는 각 핸들러의 `wrap` 인자로 붙어 있으므로, 여기서는 기능별로 묶어 등록만 합니다.
//!
//! # Route Table
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | `POST` | `/registerUser`, `/activateUser`, `/loginUser`, `/socialAuth` | - |
//! | `GET` | `/refreshToken` | refresh 쿠키 |
//! | `GET` | `/logoutUser`, `/me` | 필수 |
//! | `PUT` | `/updateUserInfo`, `/updateUserPassword`, `/updateUserAvatar` | 필수 |
//! | `POST` | `/createCourse` | admin |
//! | `PUT` | `/editCourse/{id}` | admin |
//! | `GET` | `/getSingleCourse/{id}`, `/getAllCourses` | - |
//! | `GET` | `/getCourseByUser/{id}` | 필수 |
//! | `PUT` | `/addQuestion`, `/addAnswer` | 필수 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

pub const API_PREFIX: &str = "/api/v1";

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(
        web::scope(API_PREFIX)
            .configure(configure_auth_routes)
            .configure(configure_user_routes)
            .configure(configure_course_routes),
    );
}

/// 가입/로그인/토큰 라우트
///
/// ```bash
/// curl -i -X POST http://localhost:8080/api/v1/loginUser \
///   -H "Content-Type: application/json" \
///   -d '{"email":"jane@example.com","password":"secret123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::activate)
        .service(handlers::auth::login)
        .service(handlers::auth::social_auth)
        .service(handlers::auth::refresh_token)
        .service(handlers::auth::logout);
}

/// 내 정보 라우트 (모두 인증 필요)
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::get_user_info)
        .service(handlers::users::update_user_info)
        .service(handlers::users::update_password)
        .service(handlers::users::update_avatar);
}

fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::courses::create_course)
        .service(handlers::courses::edit_course)
        .service(handlers::courses::get_single_course)
        .service(handlers::courses::get_all_courses)
        .service(handlers::courses::get_course_by_user)
        .service(handlers::courses::add_question)
        .service(handlers::courses::add_answer);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "learning_platform_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": { "database": "MongoDB", "cache": "Redis", "mail": "SMTP", "media": "Cloudinary" }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "learning_platform_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "mail": "SMTP",
            "media": "Cloudinary"
        }
    }))
}
