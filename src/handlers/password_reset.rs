//! Password Reset HTTP Handlers
//!
//! 이메일 기반 비밀번호 재설정 흐름의 HTTP 엔드포인트를 처리합니다.
//! 두 엔드포인트 모두 인증 없이 접근 가능합니다 (비밀번호를 잊은 사용자가 대상).
//!
//! # Endpoints
//!
//! - **재설정 코드 발송**: 이메일로 6자리 코드 전송 (`POST /password-reset/send-code`)
//! - **비밀번호 재설정**: 코드 검증 후 새 비밀번호 적용 (`POST /password-reset/confirm`)
use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::dto::reset::{ResetMessageResponse, ResetPasswordRequest, SendResetCodeRequest},
    services::reset::PasswordResetService,
};

/// 재설정 코드 발송 핸들러
///
/// 등록된 이메일로 6자리 숫자 재설정 코드를 발송합니다.
/// 동일 이메일로 재요청하면 이전 코드는 폐기되고 새 코드만 유효합니다.
///
/// # Endpoint
/// `POST /password-reset/send-code`
#[post("/send-code")]
pub async fn send_reset_code(
    payload: web::Json<SendResetCodeRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let reset_service = PasswordResetService::instance();
    reset_service.send_reset_code(&payload.email).await?;

    Ok(HttpResponse::Ok().json(ResetMessageResponse::new(
        "비밀번호 재설정 코드가 이메일로 발송되었습니다",
    )))
}

/// 비밀번호 재설정 핸들러
///
/// 이메일로 받은 코드를 검증하고 새 비밀번호를 적용합니다.
/// 성공 시 코드는 즉시 소모되어 재사용할 수 없습니다.
///
/// # Endpoint
/// `POST /password-reset/confirm`
#[post("/confirm")]
pub async fn reset_password(
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let reset_service = PasswordResetService::instance();
    reset_service
        .reset_password(&payload.email, &payload.code, &payload.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(ResetMessageResponse::new(
        "비밀번호가 성공적으로 재설정되었습니다",
    )))
}
