//! 계정 활성화 토큰 서비스
//!
//! 가입 요청은 바로 저장하지 않고, 가입 정보와 4자리 코드를 담은 단기 JWT로 돌려줍니다.
//! 사용자가 메일로 받은 코드와 토큰을 함께 제출하면 그때 계정이 만들어집니다.

use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;
use crate::config::JwtConfig;
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::models::token::token::{ActivationClaims, PendingUser};

/// 발급된 활성화 토큰과 메일로 보낼 코드
#[derive(Debug, Clone)]
pub struct ActivationTicket {
    pub token: String,
    pub activation_code: String,
}

pub struct ActivationService {
    secret: String,
    lifetime: Duration,
}

static ACTIVATION_SERVICE_INSTANCE: OnceCell<Arc<ActivationService>> = OnceCell::new();

/// 1000..=9999 범위의 활성화 코드
pub fn generate_activation_code() -> String {
    rand::rng().random_range(1000..10000).to_string()
}

impl ActivationService {
    pub fn instance() -> Arc<Self> {
        ACTIVATION_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    JwtConfig::activation_secret(),
                    Duration::minutes(JwtConfig::activation_expire_minutes()),
                ))
            })
            .clone()
    }

    pub fn new(secret: String, lifetime: Duration) -> Self {
        Self { secret, lifetime }
    }

    pub fn create_activation(&self, user: PendingUser) -> Result<ActivationTicket, AppError> {
        let activation_code = generate_activation_code();
        let now = Utc::now();

        let claims = ActivationClaims {
            user,
            activation_code: activation_code.clone(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(self.secret.as_bytes()))
            .context("활성화 토큰 생성 실패")?;

        Ok(ActivationTicket { token, activation_code })
    }

    /// 토큰을 검증하고 코드가 일치하면 가입 정보를 돌려줍니다.
    pub fn verify_activation(&self, token: &str, activation_code: &str) -> Result<PendingUser, AppError> {
        let claims = decode::<ActivationClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::BadRequest("Activation token is expired".to_string()),
            _ => AppError::BadRequest("Invalid activation token".to_string()),
        })?;

        if claims.activation_code != activation_code.trim() {
            return Err(AppError::BadRequest("Invalid activation code".to_string()));
        }

        Ok(claims.user)
    }
}

fn activation_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(ActivationService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "activation_service",
        constructor: activation_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> PendingUser {
        PendingUser {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
        }
    }

    #[test]
    fn test_activation_code_is_four_digits() {
        for _ in 0..200 {
            let code: u32 = generate_activation_code().parse().unwrap();
            assert!((1000..=9999).contains(&code));
        }
    }

    #[test]
    fn test_verify_with_matching_code() {
        let service = ActivationService::new("activation-secret".to_string(), Duration::minutes(5));
        let ticket = service.create_activation(pending()).unwrap();

        let user = service.verify_activation(&ticket.token, &ticket.activation_code).unwrap();
        assert_eq!(user, pending());
    }

    #[test]
    fn test_wrong_code_is_rejected() {
        let service = ActivationService::new("activation-secret".to_string(), Duration::minutes(5));
        let ticket = service.create_activation(pending()).unwrap();
        let wrong = if ticket.activation_code == "1000" { "1001" } else { "1000" };

        let error = service.verify_activation(&ticket.token, wrong).unwrap_err();
        assert!(matches!(error, AppError::BadRequest(ref msg) if msg == "Invalid activation code"));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let expired = ActivationService::new("activation-secret".to_string(), Duration::minutes(-5));
        let ticket = expired.create_activation(pending()).unwrap();

        let error = expired.verify_activation(&ticket.token, &ticket.activation_code).unwrap_err();
        assert_eq!(error.message(), "Activation token is expired");
    }

    #[test]
    fn test_token_signed_with_other_secret() {
        let issuer = ActivationService::new("one".to_string(), Duration::minutes(5));
        let verifier = ActivationService::new("two".to_string(), Duration::minutes(5));
        let ticket = issuer.create_activation(pending()).unwrap();

        let error = verifier.verify_activation(&ticket.token, &ticket.activation_code).unwrap_err();
        assert_eq!(error.message(), "Invalid activation token");
    }
}
