//! # Authentication Configuration Module
//!
//! JWT 토큰과 비밀번호 재설정 코드 관련 설정을 관리하는 모듈입니다.
//! Spring Security의 JWT 설정과 유사한 역할을 수행합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export RESET_CODE_TTL_MINUTES="15"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, ResetCodeConfig};
//!
//! let secret = JwtConfig::secret();
//! let expiration = JwtConfig::expiration_hours();
//! let ttl = ResetCodeConfig::ttl_minutes();
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// Spring Security JWT의 설정과 유사한 역할을 수행하며,
/// 토큰 생성, 검증, 만료 시간을 관리합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 프로덕션에서는 짧은 액세스 토큰 수명
/// 3. **환경별 키 분리**: 환경마다 다른 비밀키 사용
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// HMAC-SHA256 서명의 무결성을 보장하는 핵심 값입니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 권장 설정값
    ///
    /// - **개발**: 24시간 (편의성 우선)
    /// - **프로덕션**: 1시간 이하 (보안 우선)
    ///
    /// # 기본값
    ///
    /// 24시간
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// 비밀번호 재설정 코드 관련 설정을 관리하는 구조체
///
/// 이메일로 발송되는 일회용 숫자 코드의 형식과 유효 시간을 관리합니다.
pub struct ResetCodeConfig;

impl ResetCodeConfig {
    /// 재설정 코드의 자릿수
    pub const CODE_LENGTH: usize = 6;

    /// 재설정 코드의 유효 시간을 분 단위로 반환합니다.
    ///
    /// 만료된 코드는 검증 시 거부되고 즉시 삭제됩니다.
    ///
    /// # 기본값
    ///
    /// 15분
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export RESET_CODE_TTL_MINUTES="10"
    /// ```
    pub fn ttl_minutes() -> i64 {
        env::var("RESET_CODE_TTL_MINUTES")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .unwrap_or(15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_reset_code_ttl_default() {
        if env::var("RESET_CODE_TTL_MINUTES").is_err() {
            assert_eq!(ResetCodeConfig::ttl_minutes(), 15);
        }
    }

    #[test]
    fn test_reset_code_length() {
        assert_eq!(ResetCodeConfig::CODE_LENGTH, 6);
    }
}
