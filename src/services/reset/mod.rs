//! 비밀번호 재설정 모듈
//!
//! [`PasswordResetService`](password_reset_service::PasswordResetService)를 통해
//! 이메일 코드 기반 재설정 흐름을 제공합니다.

pub mod password_reset_service;

pub use password_reset_service::PasswordResetService;
