//! bcrypt 비밀번호 해싱

use crate::config::PasswordConfig;
use crate::core::errors::AppError;

/// 환경별 비용(`PasswordConfig::bcrypt_cost`)으로 해시합니다.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_password_with_cost(password, PasswordConfig::bcrypt_cost())
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// 해시 형식이 깨진 경우도 불일치로 취급합니다.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(matched) => matched,
        Err(e) => {
            log::warn!("저장된 비밀번호 해시 검증 실패: {}", e);
            false
        }
    }
}
