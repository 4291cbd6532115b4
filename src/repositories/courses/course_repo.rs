//! # 강의 리포지토리 구현
//!
//! `courses` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 질문/답변은 레슨 안에 내장되므로, 엔티티에서 수정한 뒤 [`CourseStore::replace`]로 문서 전체를 저장합니다.
//!
//! ## 동시 수정
//!
//! 쓰기 연산은 읽어 온 시점의 `updated_at`을 함께 받아 필터에 넣습니다.
//! 그 사이 다른 요청이 강의를 바꿨다면 아무 문서도 매치되지 않고 `ConflictError`(409)가 됩니다.
//! 엔티티는 수정할 때마다 [`next_revision`]으로 `updated_at`을 반드시 앞으로 옮깁니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use once_cell::sync::OnceCell;
use crate::core::errors::AppError;
use crate::core::registry::{RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::courses::course::{next_revision, Course};

const COLLECTION: &str = "courses";

pub fn course_conflict() -> AppError {
    AppError::ConflictError("Course was modified by another request, please try again".to_string())
}

/// 서비스가 의존하는 강의 저장소 연산
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn create(&self, course: Course) -> Result<Course, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Course>, AppError>;

    /// 전체 강의 (최신순)
    async fn find_all(&self) -> Result<Vec<Course>, AppError>;

    /// `loaded_at` 시점의 문서에 `$set`을 적용하고 갱신된 문서를 반환합니다.
    async fn update_fields(&self, id: &ObjectId, loaded_at: DateTime, fields: Document) -> Result<Course, AppError>;

    /// `loaded_at` 시점의 문서를 `course`로 교체합니다.
    async fn replace(&self, course: &Course, loaded_at: DateTime) -> Result<(), AppError>;
}

pub struct CourseRepository {
    db: Arc<Database>,
}

static COURSE_REPOSITORY_INSTANCE: OnceCell<Arc<CourseRepository>> = OnceCell::new();

impl CourseRepository {
    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// # Panics
    ///
    /// `Database`가 `ServiceLocator`에 등록되기 전에 호출하면 패닉이 발생합니다.
    pub fn instance() -> Arc<Self> {
        COURSE_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<Database>())))
            .clone()
    }

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Course> {
        self.db.collection::<Course>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .name("name_asc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([created_at_index, name_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl CourseStore for CourseRepository {
    async fn create(&self, mut course: Course) -> Result<Course, AppError> {
        let result = self.collection().insert_one(&course).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("삽입된 강의 ID가 ObjectId가 아닙니다".to_string()))?;
        course.id = Some(id);

        log::info!("📚 강의 생성: {} ({})", course.name, id);
        Ok(course)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Course>, AppError> {
        Ok(self.collection().find_one(doc! { "_id": id }).await?)
    }

    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;

        let courses: Vec<Course> = cursor.try_collect().await?;
        Ok(courses)
    }

    async fn update_fields(&self, id: &ObjectId, loaded_at: DateTime, mut fields: Document) -> Result<Course, AppError> {
        fields.insert("updated_at", next_revision(loaded_at));

        self.collection()
            .find_one_and_update(doc! { "_id": id, "updated_at": loaded_at }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(course_conflict)
    }

    async fn replace(&self, course: &Course, loaded_at: DateTime) -> Result<(), AppError> {
        let id = course
            .id
            .ok_or_else(|| AppError::InternalError("저장되지 않은 강의는 교체할 수 없습니다".to_string()))?;

        let result = self
            .collection()
            .replace_one(doc! { "_id": id, "updated_at": loaded_at }, course)
            .await?;

        if result.matched_count == 0 {
            log::warn!("강의 동시 수정 감지: {}", id);
            return Err(course_conflict());
        }

        Ok(())
    }
}

fn course_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(CourseRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

fn course_repository_initializer() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(async { CourseRepository::instance().create_indexes().await })
}

inventory::submit! {
    RepositoryRegistration {
        name: "course_repository",
        constructor: course_repository_constructor,
        initializer: course_repository_initializer,
    }
}
