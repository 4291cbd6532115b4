//! # Course HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/createCourse` | admin | 201 |
//! | `PUT` | `/editCourse/{id}` | admin | 201 |
//! | `GET` | `/getSingleCourse/{id}` | - | 200 (미리보기) |
//! | `GET` | `/getAllCourses` | - | 200 (미리보기) |
//! | `GET` | `/getCourseByUser/{id}` | 수강생/admin | 200 (전체 레슨) |
//! | `PUT` | `/addQuestion` | 필수 | 200 |
//! | `PUT` | `/addAnswer` | 필수 | 200 |

use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::courses::request::{AddAnswerRequest, AddQuestionRequest, CreateCourseRequest, EditCourseRequest};
use crate::domain::dto::courses::response::{CourseContentResponse, CourseEnvelope, CourseListResponse};
use crate::domain::models::auth::session_user::SessionUser;
use crate::middlewares::AuthMiddleware;
use crate::services::courses::CourseService;

/// 강의 생성
///
/// `thumbnail`이 있으면 이미지 호스트의 `courses` 폴더에 업로드됩니다.
#[post("/createCourse", wrap = "AuthMiddleware::required_with_role(\"admin\")")]
pub async fn create_course(
    payload: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let course = CourseService::instance().create_course(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(CourseEnvelope::new(course)))
}

#[put("/editCourse/{course_id}", wrap = "AuthMiddleware::required_with_role(\"admin\")")]
pub async fn edit_course(
    course_id: web::Path<String>,
    payload: web::Json<EditCourseRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let course = CourseService::instance()
        .edit_course(&course_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(CourseEnvelope::new(course)))
}

/// 공개 강의 조회. 레슨 영상/링크/질문은 빠져 있습니다.
#[get("/getSingleCourse/{course_id}")]
pub async fn get_single_course(
    course_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = CourseService::instance().get_single_course(&course_id).await?;

    Ok(HttpResponse::Ok().json(CourseEnvelope::new(course)))
}

#[get("/getAllCourses")]
pub async fn get_all_courses() -> Result<HttpResponse, AppError> {
    let courses = CourseService::instance().get_all_courses().await?;

    Ok(HttpResponse::Ok().json(CourseListResponse::new(courses)))
}

/// 수강 중인 강의의 전체 레슨
#[get("/getCourseByUser/{course_id}", wrap = "AuthMiddleware::required()")]
pub async fn get_course_by_user(
    user: SessionUser,
    course_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = CourseService::instance()
        .get_course_by_user(&user, &course_id)
        .await?;

    Ok(HttpResponse::Ok().json(CourseContentResponse::new(course)))
}

/// 레슨 질문 작성
///
/// ```json
/// { "question": "How do lifetimes work here?", "courseId": "...", "contentId": "..." }
/// ```
#[put("/addQuestion", wrap = "AuthMiddleware::required()")]
pub async fn add_question(
    user: SessionUser,
    payload: web::Json<AddQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let course = CourseService::instance()
        .add_question(&user, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(CourseEnvelope::new(course)))
}

/// 질문 답변 작성. 다른 사용자의 질문이면 작성자에게 알림 메일이 갑니다.
#[put("/addAnswer", wrap = "AuthMiddleware::required()")]
pub async fn add_answer(
    user: SessionUser,
    payload: web::Json<AddAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let course = CourseService::instance()
        .add_answer(&user, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(CourseEnvelope::new(course)))
}
