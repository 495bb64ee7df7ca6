//! # 비밀번호 재설정 서비스 구현
//!
//! 이메일 기반 일회용 코드 재설정 흐름의 비즈니스 로직을 담당합니다.
//!
//! ## 흐름
//!
//! ```text
//! 1. 코드 발송 (send_reset_code)
//!    사용자 조회 → 6자리 코드 생성 → 코드 저장(기존 코드 대체) → 메일 발송
//!
//! 2. 재설정 확정 (reset_password)
//!    코드 조회 → 만료 확인 → 코드 대조 → 새 비밀번호 저장 → 코드 소진(삭제)
//! ```
//!
//! ## 설계 규칙
//!
//! - 이메일당 유효한 코드는 항상 1개입니다. 재요청 시 이전 코드는 즉시 무효화됩니다.
//! - 코드는 저장이 완료된 뒤에만 메일로 발송됩니다. 메일 발송이 실패하면
//!   502가 반환되고, 저장된 코드는 TTL로 자동 만료됩니다.
//! - 만료된 코드는 발견 즉시 삭제되며 재사용할 수 없습니다.
//! - 코드는 재설정 성공 시 소진(삭제)되어 재사용이 불가능합니다.
//!   소진 삭제가 실패하면 요청 전체가 실패로 보고됩니다 (코드 1개 = 재설정 1회).

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    config::ResetCodeConfig,
    core::errors::AppError,
    domain::entities::reset_codes::reset_code::PasswordResetCode,
    repositories::{
        reset_codes::reset_code_repo::ResetCodeRepository,
        users::user_repo::UserRepository,
    },
    services::{mail::mail_service::MailService, users::user_service::UserService},
    utils::random_code::generate_numeric_code,
};

/// 비밀번호 재설정 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// 리포지토리와 메일/사용자 서비스가 자동 주입됩니다.
#[service(name = "passwordreset")]
pub struct PasswordResetService {
    /// 사용자 조회용 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,

    /// 재설정 코드 리포지토리 (자동 주입)
    reset_code_repo: Arc<ResetCodeRepository>,

    /// 비밀번호 갱신용 사용자 서비스 (자동 주입)
    user_service: Arc<UserService>,

    /// SMTP 메일 발송 서비스 (자동 주입)
    mail_service: Arc<MailService>,
}

impl PasswordResetService {
    /// 재설정 코드 발송
    ///
    /// 해당 이메일의 사용자가 존재하면 6자리 코드를 생성하여 저장하고
    /// 메일로 발송합니다. 같은 이메일의 기존 코드는 대체됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 코드 저장 및 메일 발송 완료
    /// * `Err(AppError::NotFound)` - 해당 이메일의 사용자가 존재하지 않음
    /// * `Err(AppError::ExternalServiceError)` - SMTP 발송 실패
    pub async fn send_reset_code(&self, email: &str) -> Result<(), AppError> {
        let user = self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("해당 이메일의 사용자를 찾을 수 없습니다".to_string()))?;

        let code = generate_numeric_code();

        // 코드 저장 (기존 코드가 있으면 대체)
        let reset_code = PasswordResetCode::new(
            email.to_string(),
            code.clone(),
            ResetCodeConfig::ttl_minutes(),
        );
        self.reset_code_repo.save(reset_code).await?;

        // 저장이 끝난 뒤에만 메일 발송
        self.mail_service
            .send_password_reset_code(email, &user.full_name(), &code)
            .await?;

        log::info!("✅ 재설정 코드 발송 완료 - email: {}", email);

        Ok(())
    }

    /// 코드 검증 후 비밀번호 재설정
    ///
    /// # 검증 순서
    ///
    /// 1. 이메일에 발급된 코드가 존재하는가
    /// 2. 코드가 만료되지 않았는가 (만료 시 즉시 삭제)
    /// 3. 제출된 코드가 저장된 코드와 일치하는가
    ///
    /// 모두 통과하면 새 비밀번호를 저장하고 코드를 소진합니다.
    /// 소진(삭제)이 실패하면 코드가 재사용될 수 있으므로 전체 요청을 실패로 보고합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 재설정 완료
    /// * `Err(AppError::ValidationError)` - 코드 없음/만료/불일치
    /// * `Err(AppError::NotFound)` - 사용자가 존재하지 않음
    /// * `Err(AppError::DatabaseError)` - 코드 소진 실패 (코드가 아직 유효할 수 있음)
    pub async fn reset_password(&self, email: &str, code: &str, new_password: &str) -> Result<(), AppError> {
        let stored = self.reset_code_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::ValidationError("유효한 재설정 코드가 없습니다".to_string()))?;

        // 만료된 코드는 즉시 삭제하고 거부
        if stored.is_expired() {
            let _ = self.reset_code_repo.delete_by_email(email).await;
            return Err(AppError::ValidationError("재설정 코드가 만료되었습니다".to_string()));
        }

        if stored.code != code {
            return Err(AppError::ValidationError("재설정 코드가 일치하지 않습니다".to_string()));
        }

        // 새 비밀번호 저장
        self.user_service.reset_password_by_email(email, new_password).await?;

        // 코드 소진 (일회용)
        Self::ensure_consumed(self.reset_code_repo.delete_by_email(email).await)?;

        log::info!("✅ 비밀번호 재설정 완료 - email: {}", email);

        Ok(())
    }

    /// 코드 소진 결과 처리
    ///
    /// 소진(삭제)이 저장소 오류로 실패했는데 성공을 돌려주면
    /// 같은 코드로 재설정이 반복될 수 있으므로 오류를 그대로 전파합니다.
    /// 경합으로 이미 사라진 코드(`Ok(false)`)는 소진된 것으로 간주합니다.
    fn ensure_consumed(delete_result: Result<bool, AppError>) -> Result<(), AppError> {
        delete_result.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumption_failure_fails_reset() {
        let result = PasswordResetService::ensure_consumed(
            Err(AppError::DatabaseError("delete failed".to_string())),
        );

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_consumption_success() {
        assert!(PasswordResetService::ensure_consumed(Ok(true)).is_ok());
        // 경합으로 이미 삭제된 코드도 소진 완료로 취급
        assert!(PasswordResetService::ensure_consumed(Ok(false)).is_ok());
    }
}
