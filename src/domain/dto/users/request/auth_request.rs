use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::utils::string_utils::deserialize_optional_string;

/// 회원 가입 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Please enter your name"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please enter your email"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_register_password"))]
    pub password: String,
}

fn validate_register_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new("required")
            .with_message("Please enter your password".into()));
    }

    if password.chars().count() < 6 {
        return Err(ValidationError::new("weak_password")
            .with_message("Password must be at least 6 characters".into()));
    }

    Ok(())
}

/// 계정 활성화 요청 (메일로 받은 4자리 코드와 가입 시 받은 토큰)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ActivationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Activation token is required"))]
    pub activation_token: String,

    #[serde(default)]
    #[validate(length(equal = 4, message = "Invalid activation code"))]
    pub activation_code: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter email and password"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter email and password"))]
    pub password: String,
}

/// 소셜 로그인 요청
///
/// 프론트엔드가 OAuth 프로바이더에서 받은 프로필을 그대로 전달합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SocialAuthRequest {
    #[serde(default)]
    #[validate(email(message = "Please enter your email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub avatar: Option<String>,
}
