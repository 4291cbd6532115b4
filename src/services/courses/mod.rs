//! 강의 서비스
//!
//! ```rust,ignore
//! use crate::services::courses::CourseService;
//!
//! let courses = CourseService::instance().get_all_courses().await?;
//! ```

pub mod course_service;

pub use course_service::CourseService;
