//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 대응되는 문서 구조입니다.
//!
//! | 엔티티 | 컬렉션 | 내장 문서 |
//! |--------|--------|-----------|
//! | [`users::user::User`] | `users` | 아바타, 수강 강의 참조 |
//! | [`courses::course::Course`] | `courses` | 강의 콘텐츠, 질문/답변, 리뷰, 썸네일 |
//!
//! 모든 엔티티는 `_id`를 `Option<ObjectId>`로 가지며, 삽입 전에는 `None`입니다.
//! 강의 콘텐츠 내부의 질문/답변처럼 부모 문서에 내장되는 항목은 생성 시점에 `ObjectId`를 발급합니다.

pub mod shared;
pub mod users;
pub mod courses;

pub use shared::*;
pub use users::*;
pub use courses::*;
