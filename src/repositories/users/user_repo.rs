//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 로그인한 사용자의 읽기는 Redis 세션([`SessionRepository`](crate::repositories::sessions::SessionRepository))이
//! 담당하므로, 이 리포지토리는 캐시 없이 MongoDB만 다룹니다.
//!
//! ## 인덱스
//!
//! - `email_unique`: 이메일 유니크 인덱스 (소문자로 정규화된 값)
//! - `created_at_desc`: 가입일 역순

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use once_cell::sync::OnceCell;
use crate::core::errors::AppError;
use crate::core::registry::{RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::users::user::User;

const COLLECTION: &str = "users";

/// 서비스가 의존하는 사용자 저장소 연산
///
/// 운영에서는 [`UserRepository`]가, 테스트에서는 메모리 구현이 주입됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 사용자 조회 (비밀번호 해시 포함)
    ///
    /// `email`은 호출 전에 [`normalize_email`](crate::utils::string_utils::normalize_email)로 정규화되어 있어야 합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// 새 사용자 저장. 이메일 중복은 `BadRequest("Email already exist")`.
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// `$set`으로 필드를 부분 갱신하고 갱신된 문서를 반환합니다. `updated_at`은 자동으로 갱신됩니다.
    async fn update_fields(&self, id: &ObjectId, fields: Document) -> Result<Option<User>, AppError>;
}

/// 사용자 데이터 액세스 리포지토리
///
/// ```rust,ignore
/// let repo = UserRepository::instance();
///
/// if repo.exists_by_email("jane@example.com").await? {
///     return Err(AppError::BadRequest("Email already exists".to_string()));
/// }
///
/// let created = repo.create(User::new_local(name, email, hash)).await?;
/// let updated = repo.update_fields(&created.id.unwrap(), doc! { "name": "Jane" }).await?;
/// ```
pub struct UserRepository {
    db: Arc<Database>,
}

static USER_REPOSITORY_INSTANCE: OnceCell<Arc<UserRepository>> = OnceCell::new();

impl UserRepository {
    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// # Panics
    ///
    /// `Database`가 `ServiceLocator`에 등록되기 전에 호출하면 패닉이 발생합니다.
    pub fn instance() -> Arc<Self> {
        USER_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<Database>())))
            .clone()
    }

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.collection().find_one(doc! { "email": email }).await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.collection().find_one(doc! { "_id": id }).await?)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let count = self
            .collection()
            .count_documents(doc! { "email": email })
            .limit(1)
            .await?;

        Ok(count > 0)
    }

    /// 유니크 인덱스 위반(동시 가입)도 같은 오류로 변환됩니다.
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::BadRequest("Email already exist".to_string())
                } else {
                    AppError::from(e)
                }
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("삽입된 사용자 ID가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        log::info!("👤 사용자 생성: {} ({})", user.email, id);
        Ok(user)
    }

    async fn update_fields(&self, id: &ObjectId, mut fields: Document) -> Result<Option<User>, AppError> {
        fields.insert("updated_at", DateTime::now());

        let updated = self
            .collection()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }
}

/// MongoDB 중복 키 오류(E11000) 여부
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}

fn user_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(UserRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

fn user_repository_initializer() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(async { UserRepository::instance().create_indexes().await })
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        constructor: user_repository_constructor,
        initializer: user_repository_initializer,
    }
}
