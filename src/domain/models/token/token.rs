use serde::{Deserialize, Serialize};

/// 액세스/리프레시 토큰 클레임
///
/// 두 토큰 모두 사용자 ID만 담고, 사용자 정보는 Redis 세션에서 읽습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (MongoDB ObjectId 문자열)
    pub id: String,
    pub iat: i64,
    pub exp: i64,
}

/// 발급된 토큰 쌍과 각각의 수명(초)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub access_expires_in: i64,
    pub refresh_expires_in: i64,
}

/// 활성화 대기 중인 가입 정보
///
/// 비밀번호는 해시된 상태로만 토큰에 실립니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// 계정 활성화 토큰 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationClaims {
    pub user: PendingUser,
    #[serde(rename = "activationCode")]
    pub activation_code: String,
    pub iat: i64,
    pub exp: i64,
}
