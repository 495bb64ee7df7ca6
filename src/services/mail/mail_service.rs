//! SMTP 메일 발송 서비스 구현
//!
//! lettre 기반의 비동기 SMTP 발송을 제공합니다.
//! 현재는 비밀번호 재설정 코드 메일만 발송합니다.

use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use singleton_macro::service;
use crate::{
    config::SmtpConfig,
    core::errors::AppError,
};

/// SMTP 메일 발송 서비스
///
/// STARTTLS 릴레이로 SMTP 서버에 연결하여 메일을 발송합니다.
/// Spring Framework의 `JavaMailSender`와 유사한 역할을 수행합니다.
///
/// 발송 실패는 `AppError::ExternalServiceError`(502)로 매핑됩니다.
#[service(name = "mail")]
pub struct MailService {
    // 외부 의존성 없음 (transport는 발송 시점에 구성)
}

impl MailService {
    /// SMTP transport 구성
    ///
    /// 환경변수(SMTP_HOST, SMTP_PORT, SMTP_USERNAME, SMTP_PASSWORD)를 기반으로
    /// STARTTLS 릴레이를 생성합니다.
    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, AppError> {
        let credentials = Credentials::new(SmtpConfig::username(), SmtpConfig::password());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&SmtpConfig::host())
            .map_err(|e| AppError::ExternalServiceError(format!("SMTP transport 구성 실패: {}", e)))?
            .port(SmtpConfig::port())
            .credentials(credentials)
            .build();

        Ok(transport)
    }

    /// 비밀번호 재설정 코드 메일 발송
    ///
    /// # Arguments
    ///
    /// * `recipient` - 수신자 이메일 주소
    /// * `full_name` - 수신자 표시 이름 (인사말에 사용)
    /// * `code` - 6자리 재설정 코드
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - 주소 파싱/메시지 구성/SMTP 발송 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mail_service = MailService::instance();
    /// mail_service
    ///     .send_password_reset_code("jane@example.com", "Jane Doe", "123456")
    ///     .await?;
    /// ```
    pub async fn send_password_reset_code(
        &self,
        recipient: &str,
        full_name: &str,
        code: &str,
    ) -> Result<(), AppError> {
        let from = format!("{} <{}>", SmtpConfig::from_name(), SmtpConfig::from_address())
            .parse::<Mailbox>()
            .map_err(|e| AppError::ExternalServiceError(format!("발신자 주소가 올바르지 않습니다: {}", e)))?;

        let to = recipient
            .parse::<Mailbox>()
            .map_err(|e| AppError::ExternalServiceError(format!("수신자 주소가 올바르지 않습니다: {}", e)))?;

        let body = format!(
            "Hello {},\n\nYour password reset code is: {}\n\nIf you did not request this, please ignore this email.",
            full_name, code
        );

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject("PASSWORD RESET CODE")
            .header(header::ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| AppError::ExternalServiceError(format!("메일 메시지 구성 실패: {}", e)))?;

        let transport = self.transport()?;

        transport
            .send(message)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("메일 발송 실패: {}", e)))?;

        log::info!("✅ 비밀번호 재설정 메일 발송 완료 - to: {}", recipient);

        Ok(())
    }
}
