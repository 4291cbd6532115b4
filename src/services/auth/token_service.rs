//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰을 HMAC-SHA256으로 서명하고 검증합니다.
//! 두 토큰은 서로 다른 비밀키를 사용하므로 한쪽 토큰으로 다른 쪽을 대신할 수 없습니다.
//! 클레임에는 사용자 ID만 담기며, 사용자 정보는 Redis 세션에서 읽습니다.

use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use crate::config::JwtConfig;
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::models::token::token::{TokenClaims, TokenPair};

/// 서명 대상 토큰 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    fn label(&self) -> &'static str {
        match self {
            TokenKind::Access => "Access",
            TokenKind::Refresh => "Refresh",
        }
    }
}

/// JWT 토큰 관리 서비스
pub struct TokenService {
    access_secret: String,
    refresh_secret: String,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

static TOKEN_SERVICE_INSTANCE: OnceCell<Arc<TokenService>> = OnceCell::new();

impl TokenService {
    pub fn instance() -> Arc<Self> {
        TOKEN_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    JwtConfig::access_secret(),
                    JwtConfig::refresh_secret(),
                    Duration::minutes(JwtConfig::access_expire_minutes()),
                    Duration::days(JwtConfig::refresh_expire_days()),
                ))
            })
            .clone()
    }

    pub fn new(
        access_secret: String,
        refresh_secret: String,
        access_lifetime: Duration,
        refresh_lifetime: Duration,
    ) -> Self {
        Self {
            access_secret,
            refresh_secret,
            access_lifetime,
            refresh_lifetime,
        }
    }

    fn secret(&self, kind: TokenKind) -> &[u8] {
        match kind {
            TokenKind::Access => self.access_secret.as_bytes(),
            TokenKind::Refresh => self.refresh_secret.as_bytes(),
        }
    }

    fn lifetime(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_lifetime,
            TokenKind::Refresh => self.refresh_lifetime,
        }
    }

    fn sign(&self, kind: TokenKind, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            id: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime(kind)).timestamp(),
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(self.secret(kind)))
            .with_context(|| format!("{} 토큰 생성 실패", kind.label()))
    }

    fn verify(&self, kind: TokenKind, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &DecodingKey::from_secret(self.secret(kind)), &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError(format!("{} token is expired", kind.label()))
                }
                _ => AppError::AuthenticationError(format!("{} token is not valid", kind.label())),
            })
    }

    pub fn sign_access(&self, user_id: &str) -> Result<String, AppError> {
        self.sign(TokenKind::Access, user_id)
    }

    pub fn sign_refresh(&self, user_id: &str) -> Result<String, AppError> {
        self.sign(TokenKind::Refresh, user_id)
    }

    pub fn verify_access(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify(TokenKind::Access, token)
    }

    pub fn verify_refresh(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify(TokenKind::Refresh, token)
    }

    /// 액세스/리프레시 토큰 쌍 발급
    ///
    /// ```rust,ignore
    /// let pair = TokenService::instance().issue_pair(&session.id)?;
    /// handlers::cookies::set_token_cookies(&mut HttpResponse::Ok(), &pair);
    /// ```
    pub fn issue_pair(&self, user_id: &str) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.sign_access(user_id)?,
            refresh_token: self.sign_refresh(user_id)?,
            access_expires_in: self.access_lifetime.num_seconds(),
            refresh_expires_in: self.refresh_lifetime.num_seconds(),
        })
    }
}

fn token_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(TokenService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "token_service",
        constructor: token_service_constructor,
    }
}
