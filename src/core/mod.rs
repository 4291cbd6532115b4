//! 핵심 인프라 모듈
//!
//! 애플리케이션 전역에서 사용하는 에러 타입과 의존성 레지스트리를 제공합니다.
//!
//! - [`errors`] - `AppError`, `AppResult`, HTTP 응답 변환
//! - [`registry`] - `ServiceLocator`와 `inventory` 기반 컴포넌트 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
