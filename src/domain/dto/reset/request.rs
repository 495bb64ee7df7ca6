use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::config::ResetCodeConfig;
use crate::domain::dto::users::request::create_user_request::validate_password_strength;

/// 재설정 코드 발송 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct SendResetCodeRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 비밀번호 재설정 확정 요청 DTO
///
/// 이메일로 받은 일회용 코드와 새 비밀번호를 함께 제출합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 이메일로 발송된 일회용 숫자 코드
    #[validate(custom(function = "validate_reset_code"))]
    pub code: String,

    /// 새 비밀번호 (최소 8자, 대소문자+숫자 포함)
    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub new_password: String,
}

/// 재설정 코드 형식 검증 (숫자 6자리)
fn validate_reset_code(code: &str) -> Result<(), ValidationError> {
    let is_numeric = code.chars().all(|c| c.is_ascii_digit());

    if !(is_numeric && code.len() == ResetCodeConfig::CODE_LENGTH) {
        return Err(ValidationError::new("invalid_reset_code")
            .with_message("재설정 코드는 숫자 6자리여야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reset_request_passes() {
        let req = ResetPasswordRequest {
            email: "jane@example.com".to_string(),
            code: "123456".to_string(),
            new_password: "NewSecure456".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_code_format_rules() {
        assert!(validate_reset_code("123456").is_ok());
        assert!(validate_reset_code("12345").is_err()); // 5자리
        assert!(validate_reset_code("1234567").is_err()); // 7자리
        assert!(validate_reset_code("12345a").is_err()); // 숫자 아님
    }

    #[test]
    fn test_invalid_email_rejected() {
        let req = SendResetCodeRequest {
            email: "not-an-email".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
