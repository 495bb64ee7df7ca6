//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 무상태(stateless) 인증을 제공합니다.
//! 액세스 토큰의 생성과 검증을 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::{
    config::JwtConfig,
    core::errors::AppError,
    domain::entities::users::user::User,
    domain::models::token::token::TokenClaims,
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 JWT 토큰을 생성하고 검증합니다.
/// 서버는 세션을 저장하지 않으며 토큰 자체가 인증 상태를 담습니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `user` - 토큰을 발급받을 사용자 정보
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_service = TokenService::instance();
    /// let access_token = token_service.generate_access_token(&user)?;
    /// ```
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            roles: user.roles.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 액세스 토큰 만료 시간 (초 단위)
    ///
    /// 로그인 응답의 `expires_in` 필드에 사용됩니다.
    pub fn access_token_ttl_seconds(&self) -> i64 {
        JwtConfig::expiration_hours() * 3600
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let claims = token_service.verify_token(token)?;
    /// println!("User ID: {}", claims.sub);
    /// println!("Roles: {:?}", claims.roles);
    /// ```
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                },
                _ => AppError::AuthenticationError(format!("토큰 검증 실패: {}", e))
            })
    }

    /// 액세스 토큰으로부터 사용자 ID 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 검증 실패
    pub fn extract_user_id(&self, token: &str) -> Result<String, AppError> {
        let claims = self.verify_token(token)?;
        Ok(claims.sub)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth_header = "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...";
    /// let token = token_service.extract_bearer_token(auth_header)?;
    /// let claims = token_service.verify_token(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn service() -> TokenService {
        TokenService {}
    }

    fn sample_user() -> User {
        let mut user = User::new(
            "Jane".to_string(),
            "Doe".to_string(),
            "jane@example.com".to_string(),
            "01012345678".to_string(),
            None,
            "$2b$04$hash".to_string(),
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_generate_and_verify_token() {
        let service = service();
        let user = sample_user();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.roles, user.roles);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_generate_token_without_id_fails() {
        let service = service();
        let user = User::new(
            "Jane".to_string(),
            "Doe".to_string(),
            "jane@example.com".to_string(),
            "01012345678".to_string(),
            None,
            "$2b$04$hash".to_string(),
        );

        assert!(matches!(
            service.generate_access_token(&user),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_verify_garbage_token_is_authentication_error() {
        let service = service();

        assert!(matches!(
            service.verify_token("not-a-jwt"),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_tampered_signature_is_authentication_error() {
        let service = service();
        let user = sample_user();

        // 서명 중간의 문자를 바꿔 서명을 훼손 (마지막 문자는 패딩 비트라 신뢰할 수 없음)
        let token = service.generate_access_token(&user).unwrap();
        let sig_start = token.rfind('.').unwrap() + 1;
        let replacement = if token.as_bytes()[sig_start] == b'A' { "B" } else { "A" };
        let mut token = token;
        token.replace_range(sig_start..sig_start + 1, replacement);

        assert!(matches!(
            service.verify_token(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_extract_user_id() {
        let service = service();
        let user = sample_user();

        let token = service.generate_access_token(&user).unwrap();
        let user_id = service.extract_user_id(&token).unwrap();

        assert_eq!(user_id, user.id_string().unwrap());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }

    #[test]
    fn test_access_token_ttl_matches_expiration() {
        let service = service();
        assert_eq!(
            service.access_token_ttl_seconds(),
            JwtConfig::expiration_hours() * 3600
        );
    }
}
