//! 비밀번호 변경 요청 DTO
//!
//! 로그인한 사용자가 기존 비밀번호를 확인하고 새 비밀번호로 교체하는
//! 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::create_user_request::validate_password_strength;

/// 비밀번호 변경 요청 DTO
///
/// 기존 비밀번호가 일치하지 않으면 서비스 계층에서 401로 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// 현재 비밀번호
    #[validate(length(min = 1, message = "현재 비밀번호를 입력해주세요"))]
    pub old_password: String,

    /// 새 비밀번호 (최소 8자, 대소문자+숫자 포함)
    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let req = ChangePasswordRequest {
            old_password: "OldPass123".to_string(),
            new_password: "NewSecure456".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_weak_new_password_rejected() {
        let req = ChangePasswordRequest {
            old_password: "OldPass123".to_string(),
            new_password: "weakpass".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_old_password_rejected() {
        let req = ChangePasswordRequest {
            old_password: "".to_string(),
            new_password: "NewSecure456".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
