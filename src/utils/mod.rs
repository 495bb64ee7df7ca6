//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 일회용 코드 생성과 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`random_code`] - 비밀번호 재설정용 숫자 코드 생성
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::random_code::generate_numeric_code;
//!
//! // 재설정 코드 생성
//! let code = generate_numeric_code();
//! ```

pub mod display_terminal;
pub mod random_code;
