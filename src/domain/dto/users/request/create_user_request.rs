//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// `username`은 클라이언트가 보내지 않습니다. 서버가 이메일을 그대로 복사합니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "first_name": "Jane",
///   "last_name": "Doe",
///   "email": "jane@example.com",
///   "phone_number": "01012345678",
///   "address": "Seoul",
///   "password": "SecurePass123",
///   "password_confirm": "SecurePass123"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_passwords_match"))]
pub struct CreateUserRequest {
    /// 이름 (1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub first_name: String,

    /// 성 (1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "성은 1-50자 사이여야 합니다"
    ))]
    pub last_name: String,

    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 전화번호 (숫자 9-12자리)
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,

    /// 주소 (선택)
    pub address: Option<String>,

    /// 계정 비밀번호 (최소 8자, 대소문자+숫자 포함)
    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 비밀번호 확인 (password와 일치해야 함)
    pub password_confirm: String,
}

/// 비밀번호 일치 여부를 검증
fn validate_passwords_match(req: &CreateUserRequest) -> Result<(), ValidationError> {
    if req.password != req.password_confirm {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}

/// 전화번호 형식 검증 (숫자만, 9-12자리)
pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    let is_numeric = phone_number.chars().all(|c| c.is_ascii_digit());
    let valid_length = (9..=12).contains(&phone_number.len());

    if !(is_numeric && valid_length) {
        return Err(ValidationError::new("invalid_phone_number")
            .with_message("전화번호는 숫자 9-12자리여야 합니다".into()));
    }
    Ok(())
}

/// 비밀번호 보안 강도 검증 (대문자, 소문자, 숫자 필수 포함)
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_digit(10));

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "01012345678".to_string(),
            address: None,
            password: "SecurePass123".to_string(),
            password_confirm: "SecurePass123".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_phone_number_rules() {
        assert!(validate_phone_number("123456789").is_ok());
        assert!(validate_phone_number("123456789012").is_ok());
        assert!(validate_phone_number("12345678").is_err()); // 8자리
        assert!(validate_phone_number("1234567890123").is_err()); // 13자리
        assert!(validate_phone_number("0101234567a").is_err()); // 숫자 아님
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut req = valid_request();
        req.password_confirm = "Different123".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_weak_password_rejected() {
        assert!(validate_password_strength("alllowercase1").is_err());
        assert!(validate_password_strength("ALLUPPERCASE1").is_err());
        assert!(validate_password_strength("NoDigitsHere").is_err());
        assert!(validate_password_strength("GoodPass123").is_ok());
    }
}
