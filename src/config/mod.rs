//! # Configuration Module
//!
//! 학습 플랫폼 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, 값이 없으면 개발용 기본값을 사용합니다.
//! 프로필별 `.env` 파일 로딩은 `main.rs`의 `load_env_file()`이 담당합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 비밀번호 해싱, 캐시, CORS 설정
//! - [`auth_config`] - JWT 토큰 수명/시크릿, 인증 쿠키 설정
//! - [`external_config`] - SMTP 메일 서버, 이미지 호스팅(Cloudinary) 설정
//!
//! ## 설정 패턴
//!
//! 각 설정 그룹은 필드가 없는 구조체에 정적 접근자 함수를 제공하는 형태입니다.
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, ServerConfig};
//!
//! let secret = JwtConfig::access_secret();
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! ```
//!
//! ## 주요 환경 변수
//!
//! ```bash
//! # 실행 환경 (development | test | staging | production)
//! ENVIRONMENT=development
//!
//! # JWT
//! ACCESS_TOKEN_SECRET=...
//! REFRESH_TOKEN_SECRET=...
//! ACTIVATION_SECRET=...
//! ACCESS_TOKEN_EXPIRE=10        # 분
//! REFRESH_TOKEN_EXPIRE=7        # 일
//!
//! # 외부 서비스
//! SMTP_HOST=smtp.gmail.com
//! SMTP_PORT=465
//! SMTP_MAIL=...
//! SMTP_PASSWORD=...
//! CLOUD_NAME=...
//! CLOUD_API_KEY=...
//! CLOUD_SECRET_KEY=...
//! ```

pub mod data_config;
pub mod auth_config;
pub mod external_config;

pub use data_config::*;
pub use auth_config::*;
pub use external_config::*;
