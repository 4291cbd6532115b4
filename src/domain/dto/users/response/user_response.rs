use serde::{Deserialize, Serialize};
use crate::domain::dto::common::format_datetime;
use crate::domain::entities::shared::ImageAsset;
use crate::domain::entities::users::user::{CourseRef, User};
use crate::domain::models::auth::session_user::SessionUser;

/// 사용자 응답 (비밀번호 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<ImageAsset>,
    pub is_verified: bool,
    pub courses: Vec<CourseRef>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            avatar,
            role,
            is_verified,
            courses,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            role,
            avatar,
            is_verified,
            courses,
            created_at: format_datetime(created_at),
            updated_at: format_datetime(updated_at),
        }
    }
}

/// `{ success, user }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub success: bool,
    pub user: UserResponse,
}

impl UserEnvelope {
    pub fn new(user: User) -> Self {
        Self {
            success: true,
            user: UserResponse::from(user),
        }
    }
}

/// 로그인/소셜 로그인/토큰 갱신 응답
///
/// 토큰은 쿠키로도 내려가며, 본문에는 액세스 토큰만 포함됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub user: SessionUser,
    pub access_token: String,
}

impl AuthResponse {
    pub fn new(user: SessionUser, access_token: String) -> Self {
        Self {
            success: true,
            user,
            access_token,
        }
    }
}

/// `GET /me` 응답. 세션에 캐시된 사용자를 그대로 돌려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUserEnvelope {
    pub success: bool,
    pub user: SessionUser,
}

impl SessionUserEnvelope {
    pub fn new(user: SessionUser) -> Self {
        Self { success: true, user }
    }
}

/// 가입 요청 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
    pub activation_token: String,
}

impl RegistrationResponse {
    pub fn new(activation_token: String) -> Self {
        Self {
            success: true,
            message: "Please check your email to activate your account!".to_string(),
            activation_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_hides_password() {
        let mut user = User::new_local("Jane".to_string(), "jane@example.com".to_string(), "hash".to_string());
        let id = ObjectId::new();
        user.id = Some(id);

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["_id"], id.to_hex());
        assert_eq!(json["isVerified"], true);
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_registration_response_shape() {
        let json = serde_json::to_value(RegistrationResponse::new("tok".to_string())).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["activationToken"], "tok");
        assert_eq!(json["message"], "Please check your email to activate your account!");
    }
}
