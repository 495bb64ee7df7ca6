//! 인증 도메인 모델
//!
//! 미들웨어가 검증한 토큰에서 추출한 사용자 정보와,
//! 라우트별 인증/권한 요구사항을 표현하는 타입들입니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
pub use authentication_request::{AuthMode, RequiredRole};
