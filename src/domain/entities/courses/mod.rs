//! Courses Entity Module
//!
//! 강의 문서와 그 안에 내장되는 콘텐츠, 질문/답변, 리뷰를 정의합니다.
//!
//! ```text
//! Course
//! ├── thumbnail: ImageAsset
//! ├── benefits / prerequisites: [TitledItem]
//! ├── reviews: [Review]
//! └── course_data: [CourseData]        ← 강의 콘텐츠 (레슨)
//!      ├── links: [Link]
//!      └── questions: [Question]
//!           └── question_replies: [Reply]
//! ```

pub mod course;

pub use course::*;
