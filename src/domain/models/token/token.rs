//! JWT 인증 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임과 애플리케이션 특화 클레임을 표시합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `roles`: 사용자 권한 목록
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 사용자 역할 목록 (권한 기반 접근 제어용)
    pub roles: Vec<String>,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_roundtrip() {
        let claims = TokenClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            roles: vec!["user".to_string()],
            iat: 1_700_000_000,
            exp: 1_700_086_400,
        };
        let json = serde_json::to_string(&claims).unwrap();
        let parsed: TokenClaims = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sub, claims.sub);
        assert_eq!(parsed.roles, claims.roles);
        assert_eq!(parsed.exp, claims.exp);
    }
}
