use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// `password_hash`는 어떤 응답에도 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub is_active: bool,
    pub roles: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            username,
            email,
            phone_number,
            address,
            is_active,
            roles,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name,
            last_name,
            username,
            email,
            phone_number,
            address,
            is_active,
            roles,
            created_at,
            updated_at,
        }
    }
}

/// 사용자 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 사용자 목록 응답 DTO
///
/// 목록과 함께 전체 건수를 내려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub count: usize,
    pub users: Vec<UserResponse>,
}

impl UserListResponse {
    pub fn new(users: Vec<UserResponse>) -> Self {
        Self { count: users.len(), users }
    }
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(user: User, access_token: String, expires_in: i64) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
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
            None,
            "$2b$04$hash".to_string(),
        )
    }

    #[test]
    fn test_password_hash_not_exposed() {
        let response = UserResponse::from(sample_user());
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$04$hash"));
    }

    #[test]
    fn test_user_list_response_count() {
        let users = vec![
            UserResponse::from(sample_user()),
            UserResponse::from(sample_user()),
        ];
        let response = UserListResponse::new(users);
        assert_eq!(response.count, 2);
        assert_eq!(response.users.len(), 2);
    }

    #[test]
    fn test_login_response_token_type() {
        let response = LoginResponse::new(sample_user(), "token".to_string(), 3600);
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
    }
}
