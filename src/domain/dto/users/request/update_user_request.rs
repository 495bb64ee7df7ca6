//! 사용자 프로필 수정 요청 DTO
//!
//! 기존 계정의 프로필 필드를 갱신하기 위한 요청 데이터 구조를 정의합니다.
//! 비밀번호는 이 요청으로 변경할 수 없습니다. 별도의 비밀번호 변경 API를 사용합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::create_user_request::validate_phone_number;

/// 사용자 프로필 수정 요청 DTO
///
/// 이메일을 변경하면 `username`도 새 이메일로 함께 갱신됩니다.
/// 기존과 다른 이메일로 변경할 때는 서비스 계층에서 중복 여부를 다시 검증합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
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

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 전화번호 (숫자 9-12자리)
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,

    /// 주소 (선택)
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> UpdateUserRequest {
        UpdateUserRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "01012345678".to_string(),
            address: Some("Seoul".to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_phone_rejected() {
        let mut req = valid_request();
        req.phone_number = "010-1234-5678".to_string();
        assert!(req.validate().is_err());
    }
}
