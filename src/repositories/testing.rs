//! 테스트용 메모리 저장소
//!
//! 서비스 흐름을 MongoDB/Redis 없이 검증하기 위한 저장소 트레이트 구현입니다.

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, DateTime, Document};
use serde::{de::DeserializeOwned, Serialize};
use crate::core::errors::AppError;
use crate::domain::dto::courses::response::CourseResponse;
use crate::domain::entities::courses::course::{next_revision, Course};
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::session_user::SessionUser;
use crate::repositories::courses::course_cache_repo::course_key;
use crate::repositories::courses::course_repo::course_conflict;
use crate::repositories::{CourseCache, CourseStore, SessionStore, UserStore};
use crate::services::auth::password::hash_password_with_cost;

/// 비용 4로 해시한 비밀번호를 가진 저장된 로컬 계정
pub fn stored_local_user(name: &str, email: &str, password: &str) -> User {
    let hash = hash_password_with_cost(password, 4).unwrap();
    let mut user = User::new_local(name.to_string(), email.to_string(), hash);
    user.id = Some(ObjectId::new());
    user
}

pub fn stored_social_user(name: &str, email: &str) -> User {
    let mut user = User::new_social(name.to_string(), email.to_string(), None);
    user.id = Some(ObjectId::new());
    user
}

/// `$set` 적용
fn apply_set<T: Serialize + DeserializeOwned>(current: &T, fields: Document) -> T {
    let mut document = bson::to_document(current).unwrap();
    for (key, value) in fields {
        document.insert(key, value);
    }
    bson::from_document(document).unwrap()
}

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub fn with(users: Vec<User>) -> Self {
        Self { users: Mutex::new(users) }
    }

    pub fn get(&self, id: &ObjectId) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.id.as_ref() == Some(id)).cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.get(id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == email))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::BadRequest("Email already exist".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn update_fields(&self, id: &ObjectId, mut fields: Document) -> Result<Option<User>, AppError> {
        fields.insert("updated_at", DateTime::now());

        let mut users = self.users.lock().unwrap();
        Ok(users.iter_mut().find(|u| u.id.as_ref() == Some(id)).map(|user| {
            *user = apply_set(&*user, fields);
            user.clone()
        }))
    }
}

#[derive(Default)]
pub struct InMemorySessions {
    sessions: Mutex<HashMap<String, SessionUser>>,
}

impl InMemorySessions {
    pub fn get(&self, user_id: &str) -> Option<SessionUser> {
        self.sessions.lock().unwrap().get(user_id).cloned()
    }
}

#[async_trait]
impl SessionStore for InMemorySessions {
    async fn save(&self, user: &SessionUser) -> Result<(), AppError> {
        self.sessions.lock().unwrap().insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn find(&self, user_id: &str) -> Result<Option<SessionUser>, AppError> {
        Ok(self.get(user_id))
    }

    async fn delete(&self, user_id: &str) -> Result<(), AppError> {
        self.sessions.lock().unwrap().remove(user_id);
        Ok(())
    }
}

type ConcurrentWrite = Box<dyn FnOnce(&mut Course) + Send>;

/// `updated_at` 조건부 쓰기를 흉내 내는 강의 저장소
#[derive(Default)]
pub struct InMemoryCourses {
    courses: Mutex<HashMap<ObjectId, Course>>,
    pending_writes: Mutex<Vec<ConcurrentWrite>>,
}

impl InMemoryCourses {
    pub fn with(course: Course) -> Self {
        let store = Self::default();
        if let Some(id) = course.id {
            store.courses.lock().unwrap().insert(id, course);
        }
        store
    }

    pub fn get(&self, id: &ObjectId) -> Option<Course> {
        self.courses.lock().unwrap().get(id).cloned()
    }

    /// 다음 조회 직후 다른 요청이 먼저 저장한 것처럼 강의를 바꿉니다. 조회마다 하나씩 소비됩니다.
    pub fn write_after_next_read(&self, write: impl FnOnce(&mut Course) + Send + 'static) {
        self.pending_writes.lock().unwrap().push(Box::new(write));
    }
}

#[async_trait]
impl CourseStore for InMemoryCourses {
    async fn create(&self, mut course: Course) -> Result<Course, AppError> {
        let id = ObjectId::new();
        course.id = Some(id);
        self.courses.lock().unwrap().insert(id, course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Course>, AppError> {
        let mut courses = self.courses.lock().unwrap();
        let snapshot = courses.get(id).cloned();

        let mut pending = self.pending_writes.lock().unwrap();
        if !pending.is_empty() {
            let write = pending.remove(0);
            if let Some(stored) = courses.get_mut(id) {
                write(stored);
                stored.updated_at = next_revision(stored.updated_at);
            }
        }

        Ok(snapshot)
    }

    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.courses.lock().unwrap().values().cloned().collect())
    }

    async fn update_fields(&self, id: &ObjectId, loaded_at: DateTime, mut fields: Document) -> Result<Course, AppError> {
        let mut courses = self.courses.lock().unwrap();
        let stored = courses
            .get_mut(id)
            .filter(|c| c.updated_at == loaded_at)
            .ok_or_else(course_conflict)?;

        fields.insert("updated_at", next_revision(loaded_at));
        *stored = apply_set(&*stored, fields);
        Ok(stored.clone())
    }

    async fn replace(&self, course: &Course, loaded_at: DateTime) -> Result<(), AppError> {
        let id = course.id.ok_or_else(course_conflict)?;
        let mut courses = self.courses.lock().unwrap();
        let stored = courses
            .get_mut(&id)
            .filter(|c| c.updated_at == loaded_at)
            .ok_or_else(course_conflict)?;

        *stored = course.clone();
        Ok(())
    }
}

/// 캐시 내용과 무효화된 키를 기록하는 캐시
#[derive(Default)]
pub struct RecordingCourseCache {
    entries: Mutex<HashMap<String, CourseResponse>>,
    all: Mutex<Option<Vec<CourseResponse>>>,
    pub invalidated: Mutex<Vec<String>>,
}

impl RecordingCourseCache {
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn has_list(&self) -> bool {
        self.all.lock().unwrap().is_some()
    }
}

#[async_trait]
impl CourseCache for RecordingCourseCache {
    async fn get_all(&self) -> Option<Vec<CourseResponse>> {
        self.all.lock().unwrap().clone()
    }

    async fn set_all(&self, courses: &[CourseResponse]) {
        *self.all.lock().unwrap() = Some(courses.to_vec());
    }

    async fn get_one(&self, course_id: &str) -> Option<CourseResponse> {
        self.entries.lock().unwrap().get(&course_key(course_id)).cloned()
    }

    async fn set_one(&self, course: &CourseResponse) {
        self.entries.lock().unwrap().insert(course_key(&course.id), course.clone());
    }

    async fn invalidate(&self, course_id: &str) {
        let key = course_key(course_id);
        self.entries.lock().unwrap().remove(&key);
        *self.all.lock().unwrap() = None;
        self.invalidated.lock().unwrap().push(key);
    }
}
