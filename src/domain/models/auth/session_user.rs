//! 세션 사용자
//!
//! Redis에 `<user id>` 키로 캐시되는 비밀번호 없는 사용자 레코드입니다.
//! 인증 미들웨어가 요청 extension에 넣어 두며, 핸들러는 `FromRequest`로 꺼내 씁니다.
//! 질문/답변 작성자 정보로 강의 문서에도 그대로 내장됩니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::domain::entities::shared::ImageAsset;
use crate::domain::entities::users::user::{CourseRef, User, ROLE_ADMIN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageAsset>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub courses: Vec<CourseRef>,
}

impl SessionUser {
    /// 저장된 사용자로부터 세션 레코드를 만듭니다. 아직 `_id`가 없으면 실패합니다.
    pub fn from_user(user: &User) -> Result<Self, AppError> {
        let id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        Ok(Self {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            avatar: user.avatar.clone(),
            is_verified: user.is_verified,
            courses: user.courses.clone(),
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// 수강 목록에 강의가 있는지. 저장된 ID의 대소문자와 무관하게 `ObjectId`로 비교합니다.
    pub fn owns_course(&self, course_id: &ObjectId) -> bool {
        self.courses.iter().any(|c| c.matches(course_id))
    }
}

impl FromRequest for SessionUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<SessionUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Please login to access this resource".to_string(),
            ).into())),
        }
    }
}

/// 선택적 인증 라우트용 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<SessionUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<SessionUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn stored_user() -> User {
        let mut user = User::new_local(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "$2b$04$secret-hash".to_string(),
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_from_user_omits_password() {
        let user = stored_user();
        let session = SessionUser::from_user(&user).unwrap();

        assert_eq!(session.id, user.id_string().unwrap());
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["_id"], session.id);
        assert_eq!(json["isVerified"], true);
    }

    #[test]
    fn test_from_user_without_id_fails() {
        let mut user = stored_user();
        user.id = None;

        assert!(SessionUser::from_user(&user).is_err());
    }

    #[test]
    fn test_admin_and_ownership() {
        let mut user = stored_user();
        user.role = ROLE_ADMIN.to_string();
        user.courses.push(CourseRef { course_id: "64B7F0C2A1B2C3D4E5F60718".to_string() });

        let session = SessionUser::from_user(&user).unwrap();
        assert!(session.is_admin());
        assert!(session.owns_course(&ObjectId::parse_str("64b7f0c2a1b2c3d4e5f60718").unwrap()));
        assert!(!session.owns_course(&ObjectId::new()));
    }

    #[actix_web::test]
    async fn test_extractor_reads_extension() {
        let session = SessionUser::from_user(&stored_user()).unwrap();
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(session.clone());

        let extracted = SessionUser::extract(&req).await.unwrap();
        assert_eq!(extracted, session);
    }

    #[actix_web::test]
    async fn test_extractor_without_session_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        assert!(SessionUser::extract(&req).await.is_err());
        let optional = OptionalUser::extract(&req).await.unwrap();
        assert!(optional.0.is_none());
    }
}
