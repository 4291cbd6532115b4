//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 이메일 정규화, 선택 문자열 정리, 문서 ID 파싱
//! - [`display_terminal`] - 레지스트리 초기화/기동 배너 출력
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{normalize_email, parse_object_id};
//!
//! let email = normalize_email(&payload.email);
//! let course_id = parse_object_id(&payload.course_id, "course")?;
//! ```

pub mod string_utils;
pub mod display_terminal;
