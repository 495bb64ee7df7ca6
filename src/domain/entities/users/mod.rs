//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! ### User Entity
//! - **로컬 인증**: 이메일/패스워드 기반 인증
//! - **프로필 정보**: 이름, 전화번호, 주소
//! - **username은 항상 email과 동일하게 유지됩니다**
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     "Jane".to_string(),
//!     "Doe".to_string(),
//!     "jane@example.com".to_string(),
//!     "0123456789".to_string(),
//!     Some("12 Main St".to_string()),
//!     hashed_password,
//! );
//! ```

pub mod user;

pub use user::User;
