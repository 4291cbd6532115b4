//! # Application Error Handling System
//!
//! 백엔드 서비스 전체에서 사용하는 통합 에러 타입입니다.
//! 각 계층(저장소, 외부 서비스, 비즈니스 로직)에서 발생한 오류를 `AppError`로 모으고,
//! `actix_web::ResponseError` 구현을 통해 일관된 JSON 응답으로 변환합니다.
//!
//! ## 응답 형식
//!
//! 모든 에러 응답은 같은 형태를 가집니다.
//!
//! ```json
//! { "success": false, "message": "Invalid email and password" }
//! ```
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | HTTP 상태 |
//! |------|-----------|
//! | `ValidationError`, `BadRequest` | 400 |
//! | `AuthenticationError` | 401 |
//! | `AuthorizationError` | 403 |
//! | `NotFound` | 404 |
//! | `ConflictError` | 409 |
//! | `DatabaseError`, `RedisError`, `ExternalServiceError`, `InternalError` | 500 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn login(&self, email: &str) -> AppResult<User> {
//!     self.user_repo
//!         .find_by_email(email)
//!         .await?
//!         .ok_or_else(|| AppError::BadRequest("Invalid email and password".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Redis error: {0}")]
    RedisError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 입력은 형식상 올바르지만 요청을 처리할 수 없는 경우 (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict error: {0}")]
    ConflictError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 변형 접두사를 제외한 사용자용 메시지
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::RedisError(msg)
            | AppError::ValidationError(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "success": false,
            "message": self.message()
        }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::RedisError(e.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(e: bcrypt::BcryptError) -> Self {
        AppError::InternalError(format!("비밀번호 해싱 실패: {}", e))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(collect_validation_messages(&errors))
    }
}

/// 필드별 검증 메시지를 `, `로 이어 붙입니다. 메시지가 없는 항목은 에러 코드를 사용합니다.
fn collect_validation_messages(errors: &validator::ValidationErrors) -> String {
    let mut messages = Vec::new();
    push_validation_messages(errors, &mut messages);

    messages.sort();
    messages.dedup();
    messages.join(", ")
}

// 중첩 구조체/리스트 검증 결과까지 내려갑니다.
fn push_validation_messages(errors: &validator::ValidationErrors, messages: &mut Vec<String>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errs) => {
                messages.extend(errs.iter().map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{}: {}", field, err.code),
                }));
            }
            ValidationErrorsKind::Struct(inner) => push_validation_messages(inner, messages),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    push_validation_messages(inner, messages);
                }
            }
        }
    }
}

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
