//! # Mail Configuration Module
//!
//! SMTP 발송 관련 설정을 관리하는 모듈입니다.
//! Spring Boot의 `spring.mail.*` 설정과 동일한 역할을 수행합니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export SMTP_HOST="smtp.gmail.com"
//! export SMTP_PORT="587"
//! export SMTP_USERNAME="noreply@example.com"
//! export SMTP_PASSWORD="app-password"
//! export SMTP_FROM_NAME="Account Service"
//! ```

use std::env;

/// SMTP 릴레이 설정을 관리하는 구조체
///
/// 비밀번호 재설정 코드 메일 발송에 사용되는 SMTP 자격 증명과
/// 발신자 정보를 관리합니다.
///
/// ## 보안 고려사항
///
/// - `SMTP_PASSWORD`는 절대 로그에 출력하지 마세요
/// - Gmail 사용 시 계정 비밀번호가 아닌 앱 비밀번호를 사용하세요
pub struct SmtpConfig;

impl SmtpConfig {
    /// SMTP 릴레이 호스트를 반환합니다.
    ///
    /// # Panics
    ///
    /// `SMTP_HOST` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn host() -> String {
        env::var("SMTP_HOST").expect("SMTP_HOST must be set")
    }

    /// SMTP 포트를 반환합니다. 기본값: 587 (STARTTLS)
    pub fn port() -> u16 {
        env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .unwrap_or(587)
    }

    /// SMTP 인증 사용자명을 반환합니다.
    ///
    /// # Panics
    ///
    /// `SMTP_USERNAME` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn username() -> String {
        env::var("SMTP_USERNAME").expect("SMTP_USERNAME must be set")
    }

    /// SMTP 인증 비밀번호를 반환합니다.
    ///
    /// # Panics
    ///
    /// `SMTP_PASSWORD` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn password() -> String {
        env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD must be set")
    }

    /// 발신자 주소를 반환합니다.
    ///
    /// `SMTP_FROM_ADDRESS`가 설정되지 않은 경우 `SMTP_USERNAME`을 사용합니다.
    pub fn from_address() -> String {
        env::var("SMTP_FROM_ADDRESS").unwrap_or_else(|_| Self::username())
    }

    /// 발신자 표시 이름을 반환합니다. 기본값: "Account Service"
    pub fn from_name() -> String {
        env::var("SMTP_FROM_NAME").unwrap_or_else(|_| "Account Service".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smtp_port_default() {
        if env::var("SMTP_PORT").is_err() {
            assert_eq!(SmtpConfig::port(), 587);
        }
    }

    #[test]
    fn test_smtp_from_name_default() {
        if env::var("SMTP_FROM_NAME").is_err() {
            assert_eq!(SmtpConfig::from_name(), "Account Service");
        }
    }
}
