//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! Spring Framework의 User 관련 DTO와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 사용자 데이터 교환을 위한 계약을 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody CreateUserDto` | `CreateUserRequest` | 회원가입 요청 |
//! | `@ResponseBody UserDto` | `UserResponse` | 사용자 정보 응답 |
//! | `JwtAuthenticationToken` | `LoginResponse` | 인증 토큰 응답 |
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                       # 클라이언트 → 서버 요청 DTO
//! │   ├── create_user_request.rs     # 회원가입 요청
//! │   ├── update_user_request.rs     # 프로필 수정 요청
//! │   ├── change_password_request.rs # 비밀번호 변경 요청
//! │   └── login_request.rs           # 로그인 요청
//! └── response/                      # 서버 → 클라이언트 응답 DTO
//!     └── user_response.rs           # 사용자/가입/로그인 응답
//! ```

pub mod request;
pub mod response;
