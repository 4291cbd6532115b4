//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일 활성화를 거친 로컬 계정과 비밀번호가 없는 소셜 계정을 하나의 모델로 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::shared::ImageAsset;

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

fn default_role() -> String {
    ROLE_USER.to_string()
}

/// 사용자가 수강 중인 강의 참조
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRef {
    #[serde(rename = "courseId")]
    pub course_id: String,
}

impl CourseRef {
    /// 저장된 ID 문자열이 `course_id`와 같은 `ObjectId`인지
    pub fn matches(&self, course_id: &ObjectId) -> bool {
        ObjectId::parse_str(self.course_id.trim()).is_ok_and(|id| &id == course_id)
    }
}

/// 사용자 엔티티 (`users` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 소문자로 정규화된 이메일 (unique)
    pub email: String,
    /// bcrypt 해시. 소셜 계정은 `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageAsset>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub courses: Vec<CourseRef>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 활성화 코드 확인을 마친 로컬 계정
    pub fn new_local(name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password: Some(password_hash),
            avatar: None,
            role: default_role(),
            is_verified: true,
            courses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 소셜 로그인으로 처음 들어온 계정
    ///
    /// 외부 프로바이더가 이메일을 확인했으므로 인증된 상태로 시작하며 비밀번호가 없습니다.
    pub fn new_social(name: String, email: String, avatar_url: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password: None,
            avatar: avatar_url
                .filter(|url| !url.trim().is_empty())
                .map(ImageAsset::external),
            role: default_role(),
            is_verified: true,
            courses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 비밀번호 로그인이 가능한 계정인지 확인
    pub fn has_password(&self) -> bool {
        self.password.as_deref().is_some_and(|hash| !hash.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user_defaults() {
        let user = User::new_local(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert_eq!(user.role, ROLE_USER);
        assert!(user.is_verified);
        assert!(user.has_password());
        assert!(user.avatar.is_none());
        assert!(user.id_string().is_none());
    }

    #[test]
    fn test_new_social_user_has_no_password() {
        let user = User::new_social(
            "Jane".to_string(),
            "jane@gmail.com".to_string(),
            Some("https://lh3.googleusercontent.com/a/photo".to_string()),
        );

        assert!(!user.has_password());
        let avatar = user.avatar.expect("avatar");
        assert!(!avatar.is_hosted());
    }

    #[test]
    fn test_blank_social_avatar_is_dropped() {
        let user = User::new_social("Jane".to_string(), "jane@gmail.com".to_string(), Some("  ".to_string()));
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_course_ref_matches_any_hex_case() {
        let reference = CourseRef { course_id: "64B7F0C2A1B2C3D4E5F60718".to_string() };

        assert!(reference.matches(&ObjectId::parse_str("64b7f0c2a1b2c3d4e5f60718").unwrap()));
        assert!(!reference.matches(&ObjectId::parse_str("64b7f0c2a1b2c3d4e5f60719").unwrap()));
        assert!(!CourseRef { course_id: "not-an-id".to_string() }.matches(&ObjectId::new()));
    }

    #[test]
    fn test_missing_role_deserializes_as_user() {
        let document = mongodb::bson::doc! {
            "name": "Jane",
            "email": "jane@example.com",
            "created_at": DateTime::now(),
            "updated_at": DateTime::now(),
        };

        let user: User = mongodb::bson::from_document(document).unwrap();
        assert_eq!(user.role, ROLE_USER);
        assert!(user.courses.is_empty());
    }
}
