//! 인증 미들웨어 동작 설정

/// 인증 강제 여부
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 유효한 액세스 토큰 쿠키와 세션이 없으면 요청을 거부합니다.
    Required,
    /// 인증에 성공하면 사용자를 붙이고, 실패해도 요청을 진행합니다.
    Optional,
}

/// 라우트가 요구하는 역할
#[derive(Debug, Clone)]
pub enum RequiredRole {
    Single(String),
    Any(Vec<String>),
}

impl RequiredRole {
    pub fn is_satisfied(&self, user_role: &str) -> bool {
        match self {
            RequiredRole::Single(required_role) => required_role == user_role,
            RequiredRole::Any(required_roles) => {
                required_roles.iter().any(|role| role == user_role)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role_single() {
        let required = RequiredRole::Single("admin".to_string());

        assert!(required.is_satisfied("admin"));
        assert!(!required.is_satisfied("user"));
    }

    #[test]
    fn test_required_role_any() {
        let required = RequiredRole::Any(vec!["admin".to_string(), "instructor".to_string()]);

        assert!(required.is_satisfied("admin"));
        assert!(required.is_satisfied("instructor"));
        assert!(!required.is_satisfied("user"));
        assert!(!required.is_satisfied(""));
    }
}
