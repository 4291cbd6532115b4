//! # 문자열 유틸리티
//!
//! 요청 값 정리와 식별자 파싱에 쓰는 공통 함수들입니다.

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use crate::core::errors::AppError;

/// 이메일 정규화 (앞뒤 공백 제거, 소문자 변환)
///
/// 가입, 로그인, 소셜 로그인, 프로필 변경 모두 같은 규칙으로 비교해야
/// 대소문자만 다른 중복 계정이 생기지 않습니다.
///
/// ```rust,ignore
/// assert_eq!(normalize_email("  Jane@Example.COM "), "jane@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 선택적 문자열 필드 정리
///
/// 값이 없거나 공백뿐이면 `None`, 아니면 앞뒤 공백을 제거한 값을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
///
/// ```rust,ignore
/// // {"name": "  Alice  "} → Some("Alice")
/// // {"name": ""}          → None
/// // {"name": null}        → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 경로/본문으로 받은 문서 ID 파싱
///
/// 형식이 잘못된 ID는 `"Invalid {label} id"` 메시지의 `BadRequest`가 됩니다.
pub fn parse_object_id(value: &str, label: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::BadRequest(format!("Invalid {} id", label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jane@Example.COM "), "jane@example.com");
        assert_eq!(normalize_email("plain@example.com"), "plain@example.com");
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            field: Option<String>,
        }

        let result: Probe = serde_json::from_str(r#"{"field": "  Hello World  "}"#).unwrap();
        assert_eq!(result.field, Some("Hello World".to_string()));

        let result: Probe = serde_json::from_str(r#"{"field": "\t\n  "}"#).unwrap();
        assert_eq!(result.field, None);

        let result: Probe = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert_eq!(result.field, None);

        let result: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.field, None);

        // 한글 값도 공백만 정리
        let result: Probe = serde_json::from_str(r#"{"field": "  안녕하세요  "}"#).unwrap();
        assert_eq!(result.field, Some("안녕하세요".to_string()));
    }

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex(), "course").unwrap(), id);

        let error = parse_object_id("not-an-id", "content").unwrap_err();
        assert_eq!(error.message(), "Invalid content id");
    }
}
