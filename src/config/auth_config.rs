//! # Authentication Configuration Module
//!
//! JWT 토큰 시크릿/수명과 인증 쿠키 설정을 관리하는 모듈입니다.
//!
//! 세 종류의 토큰은 각기 다른 시크릿으로 서명됩니다.
//!
//! | 토큰 | 시크릿 | 기본 수명 |
//! |------|--------|-----------|
//! | 액세스 토큰 | `ACCESS_TOKEN_SECRET` | 10분 (`ACCESS_TOKEN_EXPIRE`) |
//! | 리프레시 토큰 | `REFRESH_TOKEN_SECRET` | 7일 (`REFRESH_TOKEN_EXPIRE`) |
//! | 계정 활성화 토큰 | `ACTIVATION_SECRET` | 5분 (`ACTIVATION_TOKEN_EXPIRE`) |
//!
//! 시크릿이 설정되지 않은 경우 경고 로그를 남기고 개발용 기본값을 사용합니다.

use std::env;
use crate::config::data_config::{env_or, Environment};

fn secret_or_default(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        log::warn!("{} not set, using default (not secure for production!)", key);
        fallback.to_string()
    })
}

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    pub fn access_secret() -> String {
        secret_or_default("ACCESS_TOKEN_SECRET", "dev-access-token-secret")
    }

    pub fn refresh_secret() -> String {
        secret_or_default("REFRESH_TOKEN_SECRET", "dev-refresh-token-secret")
    }

    pub fn activation_secret() -> String {
        secret_or_default("ACTIVATION_SECRET", "dev-activation-secret")
    }

    /// 액세스 토큰 수명 (분)
    pub fn access_expire_minutes() -> i64 {
        env_or("ACCESS_TOKEN_EXPIRE", 10)
    }

    /// 리프레시 토큰 수명 (일)
    pub fn refresh_expire_days() -> i64 {
        env_or("REFRESH_TOKEN_EXPIRE", 7)
    }

    /// 계정 활성화 토큰 수명 (분)
    pub fn activation_expire_minutes() -> i64 {
        env_or("ACTIVATION_TOKEN_EXPIRE", 5)
    }

    /// Redis 세션 수명 (초). 리프레시 토큰 수명과 같습니다.
    pub fn session_ttl_seconds() -> usize {
        (Self::refresh_expire_days().max(1) * 24 * 60 * 60) as usize
    }
}

/// 인증 쿠키 설정
///
/// 두 쿠키 모두 `HttpOnly`, `SameSite=Lax`, `Path=/` 이며
/// 프로덕션 환경에서만 `Secure` 속성이 붙습니다.
pub struct CookieConfig;

impl CookieConfig {
    pub const ACCESS_TOKEN: &'static str = "access_token";
    pub const REFRESH_TOKEN: &'static str = "refresh_token";

    /// 액세스 토큰 쿠키 수명 (초)
    pub fn access_max_age() -> i64 {
        JwtConfig::access_expire_minutes() * 60
    }

    /// 리프레시 토큰 쿠키 수명 (초)
    pub fn refresh_max_age() -> i64 {
        JwtConfig::refresh_expire_days() * 24 * 60 * 60
    }

    pub fn secure() -> bool {
        Environment::current().is_production()
    }
}
