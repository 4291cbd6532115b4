//! # 강의 서비스 구현
//!
//! 강의 생성/수정, 공개 조회(미리보기 + 캐시), 수강생용 콘텐츠 조회,
//! 레슨 질문/답변을 담당합니다.
//!
//! ## 캐시 규칙
//!
//! - 공개 조회는 [`CourseResponse::preview`]를 캐시합니다. 유료 콘텐츠(영상 URL, 링크, 제안, 질문)는 캐시에도 남지 않습니다.
//! - 강의가 바뀌는 모든 쓰기 뒤에는 해당 강의 키와 목록 키를 함께 지웁니다.
//! - 캐시 키는 요청 문자열이 아니라 파싱한 `ObjectId`의 `to_hex()`로 만듭니다.
//!
//! ## 접근 규칙
//!
//! 전체 레슨(영상, 링크, 질문)이 응답에 담기는 조회와 질문/답변은 수강생과 관리자만 쓸 수 있습니다.

use std::sync::Arc;
use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use once_cell::sync::OnceCell;
use serde::Serialize;
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::dto::courses::request::{AddAnswerRequest, AddQuestionRequest, CreateCourseRequest, EditCourseRequest};
use crate::domain::dto::courses::response::CourseResponse;
use crate::domain::entities::courses::course::{Course, CourseData};
use crate::domain::models::auth::session_user::SessionUser;
use crate::repositories::{CourseCache, CourseCacheRepository, CourseRepository, CourseStore};
use crate::services::mail::MailService;
use crate::services::media::MediaService;
use crate::utils::string_utils::parse_object_id;

fn course_not_found() -> AppError {
    AppError::NotFound("Course not found".to_string())
}

fn to_bson<T: Serialize>(value: &T) -> Result<Bson, AppError> {
    bson::to_bson(value).context("강의 필드 직렬화 실패")
}

/// 수정 요청을 `$set` 문서로 바꿉니다. 썸네일은 업로드가 필요하므로 호출자가 따로 처리합니다.
///
/// 레슨 목록은 통째로 교체되지만, `_id`가 기존 레슨과 일치하는 항목은 그 레슨의 질문과 썸네일을 이어받습니다.
pub fn build_edit_fields(current: &Course, request: EditCourseRequest) -> Result<Document, AppError> {
    let mut fields = Document::new();

    if let Some(name) = request.name {
        fields.insert("name", name);
    }
    if let Some(description) = request.description {
        fields.insert("description", description);
    }
    if let Some(price) = request.price {
        fields.insert("price", price);
    }
    if let Some(estimated_price) = request.estimated_price {
        fields.insert("estimated_price", estimated_price);
    }
    if let Some(tags) = request.tags {
        fields.insert("tags", tags);
    }
    if let Some(level) = request.level {
        fields.insert("level", level);
    }
    if let Some(demo_url) = request.demo_url {
        fields.insert("demo_url", demo_url);
    }
    if let Some(benefits) = request.benefits {
        fields.insert("benefits", to_bson(&benefits)?);
    }
    if let Some(prerequisites) = request.prerequisites {
        fields.insert("prerequisites", to_bson(&prerequisites)?);
    }
    if let Some(inputs) = request.course_data {
        let merged: Vec<CourseData> = inputs
            .into_iter()
            .map(|input| {
                let existing = input.object_id().and_then(|id| current.content(&id));
                input.into_course_data(existing)
            })
            .collect();
        fields.insert("course_data", to_bson(&merged)?);
    }

    Ok(fields)
}

/// 동시 수정으로 Q&A 쓰기가 거절됐을 때 다시 읽고 적용하는 최대 횟수
const MAX_WRITE_ATTEMPTS: usize = 3;

pub struct CourseService {
    courses: Arc<dyn CourseStore>,
    cache: Arc<dyn CourseCache>,
    media: Arc<MediaService>,
    mail: Arc<MailService>,
}

static COURSE_SERVICE_INSTANCE: OnceCell<Arc<CourseService>> = OnceCell::new();

impl CourseService {
    pub fn instance() -> Arc<Self> {
        COURSE_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    CourseRepository::instance(),
                    CourseCacheRepository::instance(),
                    MediaService::instance(),
                    MailService::instance(),
                ))
            })
            .clone()
    }

    pub fn new(
        courses: Arc<dyn CourseStore>,
        cache: Arc<dyn CourseCache>,
        media: Arc<MediaService>,
        mail: Arc<MailService>,
    ) -> Self {
        Self { courses, cache, media, mail }
    }

    async fn load(&self, id: &ObjectId) -> Result<Course, AppError> {
        self.courses.find_by_id(id).await?.ok_or_else(course_not_found)
    }

    /// 강의를 읽어 `apply`로 바꾼 뒤 읽은 시점 조건으로 저장합니다.
    ///
    /// 그 사이 다른 요청이 먼저 저장했다면 다시 읽어 `apply`를 반복하고,
    /// [`MAX_WRITE_ATTEMPTS`]번 모두 충돌하면 `ConflictError`를 돌려줍니다.
    async fn modify<R, F>(&self, id: &ObjectId, mut apply: F) -> Result<(Course, R), AppError>
    where
        F: FnMut(&mut Course) -> Result<R, AppError>,
    {
        let mut attempt = 1;

        loop {
            let mut course = self.load(id).await?;
            let loaded_at = course.updated_at;
            let output = apply(&mut course)?;

            match self.courses.replace(&course, loaded_at).await {
                Ok(()) => return Ok((course, output)),
                Err(AppError::ConflictError(_)) if attempt < MAX_WRITE_ATTEMPTS => {
                    log::debug!("강의 쓰기 충돌, 재시도 {}/{}: {}", attempt, MAX_WRITE_ATTEMPTS, id);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub async fn create_course(&self, mut request: CreateCourseRequest) -> Result<CourseResponse, AppError> {
        let thumbnail = match request.thumbnail.take() {
            Some(source) => Some(self.media.replace_course_thumbnail(None, &source).await?),
            None => None,
        };

        let course = self.courses.create(request.into_course(thumbnail)).await?;

        if let Some(id) = course.id_string() {
            self.cache.invalidate(&id).await;
        }

        Ok(CourseResponse::full(course))
    }

    /// 강의 수정. 읽은 뒤 다른 요청이 강의를 바꿨다면 409로 거절됩니다.
    pub async fn edit_course(&self, course_id: &str, mut request: EditCourseRequest) -> Result<CourseResponse, AppError> {
        let id = parse_object_id(course_id, "course")?;
        let current = self.load(&id).await?;

        let thumbnail_source = request.thumbnail.take();
        let mut fields = build_edit_fields(&current, request)?;

        if let Some(source) = thumbnail_source {
            let thumbnail = self
                .media
                .replace_course_thumbnail(current.thumbnail.as_ref(), &source)
                .await?;
            fields.insert("thumbnail", to_bson(&thumbnail)?);
        }

        if fields.is_empty() {
            return Ok(CourseResponse::full(current));
        }

        let updated = self.courses.update_fields(&id, current.updated_at, fields).await?;

        self.cache.invalidate(&id.to_hex()).await;
        log::info!("📚 강의 수정: {}", id);

        Ok(CourseResponse::full(updated))
    }

    /// 공개 강의 조회 (미리보기)
    pub async fn get_single_course(&self, course_id: &str) -> Result<CourseResponse, AppError> {
        let id = parse_object_id(course_id, "course")?;

        if let Some(cached) = self.cache.get_one(&id.to_hex()).await {
            return Ok(cached);
        }

        let preview = CourseResponse::preview(self.load(&id).await?);
        self.cache.set_one(&preview).await;

        Ok(preview)
    }

    /// 공개 강의 목록 (미리보기)
    pub async fn get_all_courses(&self) -> Result<Vec<CourseResponse>, AppError> {
        if let Some(cached) = self.cache.get_all().await {
            return Ok(cached);
        }

        let previews: Vec<CourseResponse> = self
            .courses
            .find_all()
            .await?
            .into_iter()
            .map(CourseResponse::preview)
            .collect();
        self.cache.set_all(&previews).await;

        Ok(previews)
    }

    /// 수강생 또는 관리자에게 전체 강의를 돌려줍니다.
    pub async fn get_course_by_user(&self, user: &SessionUser, course_id: &str) -> Result<Course, AppError> {
        let id = parse_object_id(course_id, "course")?;
        ensure_enrolled(user, &id)?;

        self.load(&id).await
    }

    /// 레슨 질문 작성. 전체 강의가 응답으로 나가므로 수강생과 관리자만 가능합니다.
    pub async fn add_question(&self, user: &SessionUser, request: AddQuestionRequest) -> Result<CourseResponse, AppError> {
        let content_id = parse_object_id(&request.content_id, "content")?;
        let id = parse_object_id(&request.course_id, "course")?;
        ensure_enrolled(user, &id)?;

        let (course, ()) = self
            .modify(&id, |course| {
                course.add_question(&content_id, user.clone(), request.question.clone())?;
                Ok(())
            })
            .await?;
        self.cache.invalidate(&id.to_hex()).await;

        log::info!("❓ 질문 등록: course={} content={} user={}", id, content_id, user.id);
        Ok(CourseResponse::full(course))
    }

    /// 답변 등록. 질문 작성자가 아닌 사람이 답하면 작성자에게 메일을 보냅니다.
    pub async fn add_answer(&self, user: &SessionUser, request: AddAnswerRequest) -> Result<CourseResponse, AppError> {
        let content_id = parse_object_id(&request.content_id, "content")?;
        let question_id = parse_object_id(&request.question_id, "question")?;
        let id = parse_object_id(&request.course_id, "course")?;
        ensure_enrolled(user, &id)?;

        let (course, (author, lesson_title)) = self
            .modify(&id, |course| {
                let author = course
                    .add_answer(&content_id, &question_id, user.clone(), request.answer.clone())?
                    .user
                    .clone();
                let lesson_title = course
                    .content(&content_id)
                    .map(|c| c.title.clone())
                    .unwrap_or_default();
                Ok((author, lesson_title))
            })
            .await?;
        self.cache.invalidate(&id.to_hex()).await;

        if author.id != user.id {
            // 알림 메일 실패는 답변 저장을 되돌리지 않는다
            if let Err(e) = self.mail.send_question_reply(&author.email, &author.name, &lesson_title).await {
                log::error!("답변 알림 메일 실패 ({}): {}", author.email, e);
            }
        }

        Ok(CourseResponse::full(course))
    }
}

fn ensure_enrolled(user: &SessionUser, course_id: &ObjectId) -> Result<(), AppError> {
    if user.is_admin() || user.owns_course(course_id) {
        return Ok(());
    }

    log::warn!("수강하지 않은 강의 접근: user={} course={}", user.id, course_id);
    Err(AppError::NotFound("You are not eligible to access this course".to_string()))
}

fn course_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(CourseService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "course_service",
        constructor: course_service_constructor,
    }
}
