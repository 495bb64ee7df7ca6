//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 프로필 정보와 bcrypt 해시된 비밀번호를 포함하는 계정 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// `username`은 항상 `email`과 동일한 값으로 유지됩니다.
/// 가입과 프로필 수정 모두 이메일을 username에 그대로 복사합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 로그인 식별자 (email과 동일, unique)
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 전화번호 (숫자 9-12자리)
    pub phone_number: String,
    /// 주소
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// bcrypt 해시된 비밀번호
    ///
    /// API 응답에는 절대 포함되지 않습니다. 외부 노출은 `UserResponse`를 통해서만 합니다.
    pub password_hash: String,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 사용자 역할
    pub roles: Vec<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// `username`은 이메일을 그대로 복사하며, 기본 역할 "user"와
    /// 활성 상태로 시작합니다.
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone_number: String,
        address: Option<String>,
        password_hash: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            first_name,
            last_name,
            username: email.clone(),
            email,
            phone_number,
            address,
            password_hash,
            is_active: true,
            roles: vec!["user".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 메일 인사말 등에 사용하는 전체 이름
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 해당 역할을 보유하는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "Jane".to_string(),
            "Doe".to_string(),
            "jane@example.com".to_string(),
            "01012345678".to_string(),
            Some("Seoul".to_string()),
            "$2b$04$hash".to_string(),
        )
    }

    #[test]
    fn test_username_mirrors_email() {
        let user = sample_user();
        assert_eq!(user.username, user.email);
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();
        assert!(user.id.is_none());
        assert!(user.is_active);
        assert_eq!(user.roles, vec!["user".to_string()]);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_full_name() {
        let user = sample_user();
        assert_eq!(user.full_name(), "Jane Doe");
    }

    #[test]
    fn test_has_role() {
        let user = sample_user();
        assert!(user.has_role("user"));
        assert!(!user.has_role("admin"));
    }
}
