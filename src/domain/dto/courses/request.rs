use mongodb::bson::{oid::ObjectId, DateTime};
use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::courses::course::{Course, CourseData, Link, TitledItem};
use crate::domain::entities::shared::ImageAsset;
use crate::utils::string_utils::deserialize_optional_string;

/// 레슨 입력
///
/// 수정 요청에서 `_id`가 기존 레슨과 일치하면 그 레슨의 질문/답변이 보존됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseDataInput {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,

    #[validate(length(min = 1, message = "Lesson title is required"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, message = "Lesson video url is required"))]
    pub video_url: String,

    #[serde(default)]
    pub video_section: String,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "Video length cannot be negative"))]
    pub video_length: f64,

    #[serde(default)]
    pub video_player: String,

    #[serde(default)]
    pub links: Vec<Link>,

    #[serde(default)]
    pub suggestion: String,
}

impl CourseDataInput {
    /// 엔티티로 변환합니다. `existing`이 주어지면 ID, 썸네일, 질문을 이어받습니다.
    pub fn into_course_data(self, existing: Option<&CourseData>) -> CourseData {
        let (id, video_thumbnail, questions) = match existing {
            Some(current) => (current.id, current.video_thumbnail.clone(), current.questions.clone()),
            None => (ObjectId::new(), None, Vec::new()),
        };

        CourseData {
            id,
            title: self.title,
            description: self.description,
            video_url: self.video_url,
            video_thumbnail,
            video_section: self.video_section,
            video_length: self.video_length,
            video_player: self.video_player,
            links: self.links,
            suggestion: self.suggestion,
            questions,
        }
    }

    pub fn object_id(&self) -> Option<ObjectId> {
        self.id.as_deref().and_then(|id| ObjectId::parse_str(id).ok())
    }
}

/// 강의 생성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "Please enter course name"))]
    pub name: String,

    #[validate(length(min = 1, message = "Please enter course description"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[serde(default)]
    pub estimated_price: Option<f64>,

    /// data URI 또는 원격 URL. 업로드 후 `ImageAsset`으로 저장됩니다.
    #[serde(default, alias = "thumbNail", deserialize_with = "deserialize_optional_string")]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub tags: String,

    #[serde(default)]
    pub level: String,

    #[serde(default)]
    pub demo_url: String,

    #[serde(default)]
    pub benefits: Vec<TitledItem>,

    #[serde(default)]
    pub prerequisites: Vec<TitledItem>,

    #[serde(default)]
    #[validate(nested)]
    pub course_data: Vec<CourseDataInput>,
}

impl CreateCourseRequest {
    pub fn into_course(self, thumbnail: Option<ImageAsset>) -> Course {
        let now = DateTime::now();

        Course {
            id: None,
            name: self.name,
            description: self.description,
            price: self.price,
            estimated_price: self.estimated_price,
            thumbnail,
            tags: self.tags,
            level: self.level,
            demo_url: self.demo_url,
            benefits: self.benefits,
            prerequisites: self.prerequisites,
            reviews: Vec::new(),
            course_data: self
                .course_data
                .into_iter()
                .map(|input| input.into_course_data(None))
                .collect(),
            ratings: 0.0,
            purchased: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 강의 수정 요청. 보낸 필드만 `$set` 됩니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditCourseRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,

    #[serde(default)]
    pub estimated_price: Option<f64>,

    #[serde(default, alias = "thumbNail", deserialize_with = "deserialize_optional_string")]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub tags: Option<String>,

    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub demo_url: Option<String>,

    #[serde(default)]
    pub benefits: Option<Vec<TitledItem>>,

    #[serde(default)]
    pub prerequisites: Option<Vec<TitledItem>>,

    #[serde(default)]
    #[validate(nested)]
    pub course_data: Option<Vec<CourseDataInput>>,
}

/// 레슨 질문 작성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddQuestionRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter your question"))]
    pub question: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Invalid course id"))]
    pub course_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Invalid content id"))]
    pub content_id: String,
}

/// 질문 답변 작성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddAnswerRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter your answer"))]
    pub answer: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Invalid course id"))]
    pub course_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Invalid content id"))]
    pub content_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Invalid question id"))]
    pub question_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::courses::course::Question;
    use crate::domain::models::auth::session_user::SessionUser;

    fn create_payload() -> serde_json::Value {
        serde_json::json!({
            "name": "Rust Backend",
            "description": "Build services with actix-web",
            "price": 49.0,
            "estimatedPrice": 99.0,
            "thumbNail": "data:image/png;base64,AAAA",
            "tags": "rust",
            "level": "Beginner",
            "demoUrl": "https://videos.example.com/demo",
            "benefits": [{ "title": "Ship APIs" }],
            "prerequisites": [],
            "courseData": [{
                "title": "Intro",
                "videoUrl": "https://videos.example.com/1",
                "videoSection": "Getting started",
                "videoLength": 10,
                "links": [{ "title": "Book", "url": "https://doc.rust-lang.org/book" }]
            }]
        })
    }

    #[test]
    fn test_create_request_accepts_thumbnail_alias() {
        let request: CreateCourseRequest = serde_json::from_value(create_payload()).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.thumbnail.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(request.course_data.len(), 1);
    }

    #[test]
    fn test_create_request_validates_nested_lessons() {
        let mut payload = create_payload();
        payload["courseData"][0]["videoUrl"] = serde_json::json!("");

        let request: CreateCourseRequest = serde_json::from_value(payload).unwrap();
        let error = crate::core::errors::AppError::from(request.validate().unwrap_err());

        assert_eq!(error.message(), "Lesson video url is required");
    }

    #[test]
    fn test_into_course_assigns_lesson_ids() {
        let request: CreateCourseRequest = serde_json::from_value(create_payload()).unwrap();
        let course = request.into_course(None);

        assert!(course.id.is_none());
        assert_eq!(course.course_data.len(), 1);
        assert!(course.course_data[0].questions.is_empty());
        assert_eq!(course.purchased, 0);
    }

    #[test]
    fn test_lesson_update_preserves_questions() {
        let existing = CourseData {
            id: ObjectId::new(),
            title: "Old".to_string(),
            description: String::new(),
            video_url: "https://videos.example.com/old".to_string(),
            video_thumbnail: None,
            video_section: String::new(),
            video_length: 1.0,
            video_player: String::new(),
            links: Vec::new(),
            suggestion: String::new(),
            questions: vec![Question::new(
                SessionUser {
                    id: "u1".to_string(),
                    name: "Jane".to_string(),
                    email: "jane@example.com".to_string(),
                    role: "user".to_string(),
                    avatar: None,
                    is_verified: true,
                    courses: Vec::new(),
                },
                "Still valid?".to_string(),
            )],
        };

        let input: CourseDataInput = serde_json::from_value(serde_json::json!({
            "_id": existing.id.to_hex(),
            "title": "New",
            "videoUrl": "https://videos.example.com/new"
        }))
        .unwrap();

        assert_eq!(input.object_id(), Some(existing.id));
        let updated = input.into_course_data(Some(&existing));

        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.questions.len(), 1);
    }

    #[test]
    fn test_add_answer_request_camel_case() {
        let request: AddAnswerRequest = serde_json::from_value(serde_json::json!({
            "answer": "Use tokio",
            "courseId": "c1",
            "contentId": "d1",
            "questionId": "q1"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.question_id, "q1");
    }
}
