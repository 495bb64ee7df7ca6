//! 로그인 요청 DTO
//!
//! 이메일/비밀번호 기반 인증 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_rejected() {
        let req = LoginRequest {
            email: "user@example.com".to_string(),
            password: "".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_valid_login_passes() {
        let req = LoginRequest {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
