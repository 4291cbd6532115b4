use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::utils::string_utils::deserialize_optional_string;

/// 프로필 변경 요청. 보낸 필드만 바뀝니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserInfoRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 50, message = "Name is too long"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "Please enter a valid email"))]
    pub email: Option<String>,
}

impl UpdateUserInfoRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter password field"))]
    pub old_password: String,

    #[serde(default)]
    #[validate(custom(function = "validate_new_password"))]
    pub new_password: String,
}

fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new("required")
            .with_message("Please enter password field".into()));
    }

    if password.chars().count() < 6 {
        return Err(ValidationError::new("weak_password")
            .with_message("Password must be at least 6 characters".into()));
    }

    Ok(())
}

/// 아바타 변경 요청. `avatar`는 data URI(base64) 또는 원격 이미지 URL입니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAvatarRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Avatar not found"))]
    pub avatar: String,
}
