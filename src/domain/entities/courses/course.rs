//! Course Entity Implementation
//!
//! 강의 문서(`courses` 컬렉션)와 내장 문서들입니다.
//! 질문/답변은 별도 컬렉션 없이 해당 레슨(`CourseData`) 안에 누적되므로,
//! 추가 연산은 엔티티 메서드로 수행한 뒤 문서 전체를 교체 저장합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::errors::AppError;
use crate::domain::entities::shared::ImageAsset;
use crate::domain::models::auth::session_user::SessionUser;

/// 제목만 가진 항목 (수강 혜택, 선수 지식)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledItem {
    pub title: String,
}

/// 레슨에 첨부된 외부 링크
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub url: String,
}

/// 질문에 달린 답변
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: SessionUser,
    pub answer: String,
    pub created_at: DateTime,
}

/// 레슨에 남긴 질문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: SessionUser,
    pub question: String,
    #[serde(default)]
    pub question_replies: Vec<Reply>,
    pub created_at: DateTime,
}

/// 강의 리뷰
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: SessionUser,
    #[serde(default)]
    pub rating: f64,
    pub comment: String,
    #[serde(default)]
    pub comment_replies: Vec<Reply>,
}

/// 강의 콘텐츠 (레슨 한 개)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseData {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_thumbnail: Option<ImageAsset>,
    #[serde(default)]
    pub video_section: String,
    #[serde(default)]
    pub video_length: f64,
    #[serde(default)]
    pub video_player: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// 강의 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ImageAsset>,
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
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub course_data: Vec<CourseData>,
    #[serde(default)]
    pub ratings: f64,
    #[serde(default)]
    pub purchased: u32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// 질문/답변 추가 실패 사유
#[derive(Debug, Error, PartialEq)]
pub enum QnaError {
    #[error("Invalid content id")]
    ContentNotFound,
    #[error("Invalid question id")]
    QuestionNotFound,
}

impl From<QnaError> for AppError {
    fn from(e: QnaError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

/// 수정 후 `updated_at` 값. 같은 밀리초 안의 수정이라도 이전 값보다 항상 큽니다.
pub fn next_revision(previous: DateTime) -> DateTime {
    let now = DateTime::now();

    if now.timestamp_millis() > previous.timestamp_millis() {
        now
    } else {
        DateTime::from_millis(previous.timestamp_millis() + 1)
    }
}

impl Question {
    pub fn new(user: SessionUser, question: String) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            question,
            question_replies: Vec::new(),
            created_at: DateTime::now(),
        }
    }
}

impl Reply {
    pub fn new(user: SessionUser, answer: String) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            answer,
            created_at: DateTime::now(),
        }
    }
}

impl Course {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn content(&self, content_id: &ObjectId) -> Option<&CourseData> {
        self.course_data.iter().find(|c| &c.id == content_id)
    }

    pub fn content_mut(&mut self, content_id: &ObjectId) -> Option<&mut CourseData> {
        self.course_data.iter_mut().find(|c| &c.id == content_id)
    }

    /// 레슨에 질문을 추가하고 추가된 질문을 돌려줍니다.
    pub fn add_question(
        &mut self,
        content_id: &ObjectId,
        user: SessionUser,
        question: String,
    ) -> Result<&Question, QnaError> {
        let content = self.content_mut(content_id).ok_or(QnaError::ContentNotFound)?;
        content.questions.push(Question::new(user, question));
        self.updated_at = next_revision(self.updated_at);

        // 방금 push 했으므로 마지막 원소가 존재한다
        self.content(content_id)
            .and_then(|c| c.questions.last())
            .ok_or(QnaError::ContentNotFound)
    }

    /// 질문에 답변을 추가하고, 답변이 달린 질문을 돌려줍니다.
    pub fn add_answer(
        &mut self,
        content_id: &ObjectId,
        question_id: &ObjectId,
        user: SessionUser,
        answer: String,
    ) -> Result<&Question, QnaError> {
        let content = self.content_mut(content_id).ok_or(QnaError::ContentNotFound)?;
        let question = content
            .questions
            .iter_mut()
            .find(|q| &q.id == question_id)
            .ok_or(QnaError::QuestionNotFound)?;

        question.question_replies.push(Reply::new(user, answer));
        self.updated_at = next_revision(self.updated_at);

        self.content(content_id)
            .and_then(|c| c.questions.iter().find(|q| &q.id == question_id))
            .ok_or(QnaError::QuestionNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(id: &str, name: &str) -> SessionUser {
        SessionUser {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: "user".to_string(),
            avatar: None,
            is_verified: true,
            courses: Vec::new(),
        }
    }

    fn lesson(title: &str) -> CourseData {
        CourseData {
            id: ObjectId::new(),
            title: title.to_string(),
            description: String::new(),
            video_url: "https://videos.example.com/1".to_string(),
            video_thumbnail: None,
            video_section: "Intro".to_string(),
            video_length: 12.0,
            video_player: "vdocipher".to_string(),
            links: vec![Link { title: "Docs".to_string(), url: "https://doc.rust-lang.org".to_string() }],
            suggestion: "Watch twice".to_string(),
            questions: Vec::new(),
        }
    }

    fn course_with(lessons: Vec<CourseData>) -> Course {
        Course {
            id: Some(ObjectId::new()),
            name: "Rust Backend".to_string(),
            description: "Build services".to_string(),
            price: 49.0,
            estimated_price: Some(99.0),
            thumbnail: None,
            tags: "rust,actix".to_string(),
            level: "Intermediate".to_string(),
            demo_url: "https://videos.example.com/demo".to_string(),
            benefits: vec![TitledItem { title: "Ship APIs".to_string() }],
            prerequisites: Vec::new(),
            reviews: Vec::new(),
            course_data: lessons,
            ratings: 0.0,
            purchased: 0,
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        }
    }

    #[test]
    fn test_add_question_to_existing_content() {
        let first = lesson("One");
        let second = lesson("Two");
        let second_id = second.id;
        let mut course = course_with(vec![first, second]);

        let question = course
            .add_question(&second_id, author("u1", "Jane"), "What is Pin?".to_string())
            .unwrap();
        assert_eq!(question.question, "What is Pin?");
        assert!(question.question_replies.is_empty());

        assert!(course.course_data[0].questions.is_empty());
        assert_eq!(course.course_data[1].questions.len(), 1);
    }

    #[test]
    fn test_add_question_unknown_content() {
        let mut course = course_with(vec![lesson("One")]);

        let result = course.add_question(&ObjectId::new(), author("u1", "Jane"), "?".to_string());
        assert_eq!(result.unwrap_err(), QnaError::ContentNotFound);
    }

    #[test]
    fn test_add_answer_keeps_question_author() {
        let content = lesson("One");
        let content_id = content.id;
        let mut course = course_with(vec![content]);

        let question_id = course
            .add_question(&content_id, author("u1", "Jane"), "Why async?".to_string())
            .unwrap()
            .id;

        let question = course
            .add_answer(&content_id, &question_id, author("u2", "Admin"), "Because IO".to_string())
            .unwrap();

        assert_eq!(question.user.id, "u1");
        assert_eq!(question.question_replies.len(), 1);
        assert_eq!(question.question_replies[0].user.id, "u2");
        assert_eq!(question.question_replies[0].answer, "Because IO");
    }

    #[test]
    fn test_add_answer_unknown_question() {
        let content = lesson("One");
        let content_id = content.id;
        let mut course = course_with(vec![content]);

        let result = course.add_answer(&content_id, &ObjectId::new(), author("u2", "Admin"), "x".to_string());
        assert_eq!(result.unwrap_err(), QnaError::QuestionNotFound);

        let result = course.add_answer(&ObjectId::new(), &ObjectId::new(), author("u2", "Admin"), "x".to_string());
        assert_eq!(result.unwrap_err(), QnaError::ContentNotFound);
    }

    #[test]
    fn test_qna_error_maps_to_bad_request() {
        let error = AppError::from(QnaError::ContentNotFound);
        assert!(matches!(error, AppError::BadRequest(ref msg) if msg == "Invalid content id"));
    }

    #[test]
    fn test_course_bson_round_trip_keeps_nested_ids() {
        let content = lesson("One");
        let content_id = content.id;
        let mut course = course_with(vec![content]);
        course.add_question(&content_id, author("u1", "Jane"), "Q".to_string()).unwrap();

        let document = mongodb::bson::to_document(&course).unwrap();
        let restored: Course = mongodb::bson::from_document(document).unwrap();

        assert_eq!(restored.course_data[0].id, content_id);
        assert_eq!(restored.course_data[0].questions.len(), 1);
    }

    #[test]
    fn test_next_revision_always_advances() {
        let future = DateTime::from_millis(DateTime::now().timestamp_millis() + 60_000);
        assert_eq!(next_revision(future).timestamp_millis(), future.timestamp_millis() + 1);

        let past = DateTime::from_millis(0);
        assert!(next_revision(past).timestamp_millis() > 0);
    }

    #[test]
    fn test_qna_writes_change_revision() {
        let mut course = course_with(vec![lesson("Intro")]);
        let content_id = course.course_data[0].id;
        course.updated_at = DateTime::from_millis(DateTime::now().timestamp_millis() + 60_000);

        let before = course.updated_at;
        let question_id = course.add_question(&content_id, author("u1", "Jane"), "Why?".to_string()).unwrap().id;
        assert!(course.updated_at.timestamp_millis() > before.timestamp_millis());

        let before = course.updated_at;
        course.add_answer(&content_id, &question_id, author("u2", "Mark"), "Because".to_string()).unwrap();
        assert!(course.updated_at.timestamp_millis() > before.timestamp_millis());
    }
}
