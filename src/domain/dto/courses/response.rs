use serde::{Deserialize, Serialize};
use crate::domain::dto::common::format_datetime;
use crate::domain::entities::courses::course::{
    Course, CourseData, Link, Question, Reply, Review, TitledItem,
};
use crate::domain::entities::shared::ImageAsset;
use crate::domain::models::auth::session_user::SessionUser;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: SessionUser,
    pub answer: String,
    pub created_at: String,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id.to_hex(),
            user: reply.user,
            answer: reply.answer,
            created_at: format_datetime(reply.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: SessionUser,
    pub question: String,
    pub question_replies: Vec<ReplyResponse>,
    pub created_at: String,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.to_hex(),
            user: question.user,
            question: question.question,
            question_replies: question.question_replies.into_iter().map(ReplyResponse::from).collect(),
            created_at: format_datetime(question.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: SessionUser,
    pub rating: f64,
    pub comment: String,
    pub comment_replies: Vec<ReplyResponse>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_hex(),
            user: review.user,
            rating: review.rating,
            comment: review.comment,
            comment_replies: review.comment_replies.into_iter().map(ReplyResponse::from).collect(),
        }
    }
}

/// 레슨 응답
///
/// 미리보기에서는 `video_url`, `links`, `suggestion`, `questions`가 빠집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDataResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_thumbnail: Option<ImageAsset>,
    pub video_section: String,
    pub video_length: f64,
    pub video_player: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuestionResponse>>,
}

impl CourseDataResponse {
    pub fn full(data: CourseData) -> Self {
        Self {
            id: data.id.to_hex(),
            title: data.title,
            description: data.description,
            video_url: Some(data.video_url),
            video_thumbnail: data.video_thumbnail,
            video_section: data.video_section,
            video_length: data.video_length,
            video_player: data.video_player,
            links: Some(data.links),
            suggestion: Some(data.suggestion),
            questions: Some(data.questions.into_iter().map(QuestionResponse::from).collect()),
        }
    }

    pub fn preview(data: CourseData) -> Self {
        Self {
            id: data.id.to_hex(),
            title: data.title,
            description: data.description,
            video_url: None,
            video_thumbnail: data.video_thumbnail,
            video_section: data.video_section,
            video_length: data.video_length,
            video_player: data.video_player,
            links: None,
            suggestion: None,
            questions: None,
        }
    }
}

/// 강의 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ImageAsset>,
    pub tags: String,
    pub level: String,
    pub demo_url: String,
    pub benefits: Vec<TitledItem>,
    pub prerequisites: Vec<TitledItem>,
    pub reviews: Vec<ReviewResponse>,
    pub course_data: Vec<CourseDataResponse>,
    pub ratings: f64,
    pub purchased: u32,
    pub created_at: String,
    pub updated_at: String,
}

impl CourseResponse {
    /// 수강생/관리자용 전체 응답
    pub fn full(course: Course) -> Self {
        Self::build(course, CourseDataResponse::full)
    }

    /// 비구매자용 미리보기 응답
    pub fn preview(course: Course) -> Self {
        Self::build(course, CourseDataResponse::preview)
    }

    fn build(course: Course, lesson: fn(CourseData) -> CourseDataResponse) -> Self {
        Self {
            id: course.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: course.name,
            description: course.description,
            price: course.price,
            estimated_price: course.estimated_price,
            thumbnail: course.thumbnail,
            tags: course.tags,
            level: course.level,
            demo_url: course.demo_url,
            benefits: course.benefits,
            prerequisites: course.prerequisites,
            reviews: course.reviews.into_iter().map(ReviewResponse::from).collect(),
            course_data: course.course_data.into_iter().map(lesson).collect(),
            ratings: course.ratings,
            purchased: course.purchased,
            created_at: format_datetime(course.created_at),
            updated_at: format_datetime(course.updated_at),
        }
    }
}

/// `{ success, course }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEnvelope {
    pub success: bool,
    pub course: CourseResponse,
}

impl CourseEnvelope {
    pub fn new(course: CourseResponse) -> Self {
        Self { success: true, course }
    }
}

/// `{ success, courses }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub success: bool,
    pub courses: Vec<CourseResponse>,
}

impl CourseListResponse {
    pub fn new(courses: Vec<CourseResponse>) -> Self {
        Self { success: true, courses }
    }
}

/// 구매한 강의의 레슨 목록 `{ success, content }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseContentResponse {
    pub success: bool,
    pub content: Vec<CourseDataResponse>,
}

impl CourseContentResponse {
    pub fn new(course: Course) -> Self {
        Self {
            success: true,
            content: course.course_data.into_iter().map(CourseDataResponse::full).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, DateTime};

    fn sample_course() -> Course {
        let mut course = Course {
            id: Some(ObjectId::new()),
            name: "Rust Backend".to_string(),
            description: "Build services".to_string(),
            price: 49.0,
            estimated_price: None,
            thumbnail: Some(ImageAsset::external("https://img.example.com/t.png".to_string())),
            tags: "rust".to_string(),
            level: "Beginner".to_string(),
            demo_url: String::new(),
            benefits: Vec::new(),
            prerequisites: Vec::new(),
            reviews: Vec::new(),
            course_data: vec![CourseData {
                id: ObjectId::new(),
                title: "Intro".to_string(),
                description: String::new(),
                video_url: "https://videos.example.com/secret".to_string(),
                video_thumbnail: None,
                video_section: "Start".to_string(),
                video_length: 3.5,
                video_player: String::new(),
                links: vec![Link { title: "Docs".to_string(), url: "https://docs.rs".to_string() }],
                suggestion: "Take notes".to_string(),
                questions: Vec::new(),
            }],
            ratings: 0.0,
            purchased: 0,
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        };
        let content_id = course.course_data[0].id;
        let user = SessionUser {
            id: "u1".to_string(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            role: "user".to_string(),
            avatar: None,
            is_verified: true,
            courses: Vec::new(),
        };
        course.add_question(&content_id, user, "How?".to_string()).unwrap();
        course
    }

    #[test]
    fn test_preview_hides_paid_content() {
        let json = serde_json::to_value(CourseResponse::preview(sample_course())).unwrap();
        let lesson = &json["courseData"][0];

        assert_eq!(lesson["title"], "Intro");
        assert_eq!(lesson["videoLength"], 3.5);
        assert!(lesson.get("videoUrl").is_none());
        assert!(lesson.get("links").is_none());
        assert!(lesson.get("suggestion").is_none());
        assert!(lesson.get("questions").is_none());
    }

    #[test]
    fn test_full_response_includes_questions() {
        let json = serde_json::to_value(CourseResponse::full(sample_course())).unwrap();
        let lesson = &json["courseData"][0];

        assert_eq!(lesson["videoUrl"], "https://videos.example.com/secret");
        assert_eq!(lesson["questions"][0]["question"], "How?");
        assert_eq!(lesson["questions"][0]["user"]["_id"], "u1");
        assert!(lesson["questions"][0]["questionReplies"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_cached_preview_round_trip() {
        let preview = CourseResponse::preview(sample_course());
        let encoded = serde_json::to_string(&preview).unwrap();
        let decoded: CourseResponse = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.id, preview.id);
        assert!(decoded.course_data[0].video_url.is_none());
    }

    #[test]
    fn test_content_response_lists_lessons() {
        let json = serde_json::to_value(CourseContentResponse::new(sample_course())).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["content"].as_array().unwrap().len(), 1);
    }
}
