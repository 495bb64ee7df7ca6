//! Reset Codes Entity Module
//!
//! 비밀번호 재설정 코드 엔티티를 정의합니다.
//! `password_reset_codes` 컬렉션과 매핑됩니다.

pub mod reset_code;

pub use reset_code::PasswordResetCode;
