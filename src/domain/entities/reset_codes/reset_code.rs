//! 비밀번호 재설정 코드 엔티티
//!
//! `password_reset_codes` 컬렉션 문서와 매핑됩니다.
//! 이메일당 하나의 코드만 유효하며, `expires_at` 기준 TTL 인덱스로
//! 만료된 문서는 MongoDB가 백그라운드에서 정리합니다.
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 이메일로 발송된 일회용 비밀번호 재설정 코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetCode {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 코드를 요청한 사용자의 이메일
    pub email: String,

    /// 6자리 숫자 코드
    pub code: String,

    /// 만료 시각 (TTL 인덱스 기준 필드)
    pub expires_at: DateTime,

    pub created_at: DateTime,
}

impl PasswordResetCode {
    /// 새 재설정 코드를 생성합니다 (지금부터 `ttl_minutes` 분간 유효)
    pub fn new(email: String, code: String, ttl_minutes: i64) -> Self {
        let now = DateTime::now();
        let expires_at = DateTime::from_millis(now.timestamp_millis() + ttl_minutes * 60 * 1000);

        Self {
            id: None,
            email,
            code,
            expires_at,
            created_at: now,
        }
    }

    /// 코드가 이미 만료되었는지 확인
    pub fn is_expired(&self) -> bool {
        self.expires_at.timestamp_millis() <= DateTime::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code_is_not_expired() {
        let code = PasswordResetCode::new("jane@example.com".to_string(), "123456".to_string(), 15);
        assert!(!code.is_expired());
        assert!(code.id.is_none());
    }

    #[test]
    fn test_expiry_window() {
        let code = PasswordResetCode::new("jane@example.com".to_string(), "123456".to_string(), 15);
        let window = code.expires_at.timestamp_millis() - code.created_at.timestamp_millis();
        assert_eq!(window, 15 * 60 * 1000);
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let code = PasswordResetCode::new("jane@example.com".to_string(), "123456".to_string(), 0);
        assert!(code.is_expired());
    }
}
