//! 비밀번호 재설정 DTO 모듈
//!
//! 이메일 기반 재설정 코드 발송/확정 요청과 그 응답 형식을 정의합니다.

pub mod request;
pub mod response;

pub use request::{ResetPasswordRequest, SendResetCodeRequest};
pub use response::ResetMessageResponse;
