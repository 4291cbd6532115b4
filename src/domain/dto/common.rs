use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 본문이 메시지뿐인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// BSON 시각을 RFC 3339 문자열로 변환합니다.
pub fn format_datetime(value: DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_epoch() {
        let formatted = format_datetime(DateTime::from_millis(0));
        assert!(formatted.starts_with("1970-01-01T00:00:00"));
    }
}
