//! 외부 서비스 설정
//!
//! 메일 발송용 SMTP 서버와 이미지 호스팅(Cloudinary) 접속 정보를 관리합니다.

use std::env;
use crate::config::data_config::env_or;

/// SMTP 메일 서버 설정
pub struct SmtpConfig;

impl SmtpConfig {
    pub fn host() -> String {
        env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string())
    }

    /// 465는 암시적 TLS, 그 외 포트는 STARTTLS로 연결합니다.
    pub fn port() -> u16 {
        env_or("SMTP_PORT", 465)
    }

    /// 발신 계정 (From 주소로도 사용)
    pub fn user() -> String {
        env::var("SMTP_MAIL").unwrap_or_else(|_| {
            log::warn!("SMTP_MAIL not set, using default sender");
            "no-reply@localhost".to_string()
        })
    }

    pub fn password() -> String {
        env::var("SMTP_PASSWORD").unwrap_or_default()
    }
}

/// Cloudinary 이미지 호스팅 설정
pub struct CloudinaryConfig;

impl CloudinaryConfig {
    pub fn cloud_name() -> String {
        env::var("CLOUD_NAME").unwrap_or_else(|_| {
            log::warn!("CLOUD_NAME not set, image uploads will fail");
            "demo".to_string()
        })
    }

    pub fn api_key() -> String {
        env::var("CLOUD_API_KEY").unwrap_or_default()
    }

    pub fn api_secret() -> String {
        env::var("CLOUD_SECRET_KEY").unwrap_or_default()
    }

    pub fn api_base_url() -> String {
        env::var("CLOUDINARY_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.cloudinary.com/v1_1".to_string())
    }
}
