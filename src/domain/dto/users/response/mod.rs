//! # 사용자 관련 응답 DTO 모듈
//!
//! 이 모듈은 사용자 도메인과 관련된 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@ResponseBody`와 유사한 역할을 하며, 비즈니스 로직 처리 결과를
//! 클라이언트에게 안전하고 일관된 형태로 전달하는 역할을 담당합니다.
//!
//! ## 설계 철학
//!
//! - **데이터 은닉**: 민감한 정보(비밀번호 해시 등)는 응답에서 제외
//! - **일관성**: 모든 응답이 동일한 구조와 네이밍 컨벤션 따름
//! - **확장성**: 새로운 필드 추가 시 하위 호환성 유지
//! - **타입 안전성**: 컴파일 타임에 응답 구조 검증
//!
//! ## 응답 DTO 계층 구조
//!
//! ### 기본 사용자 응답
//! - `UserResponse` - 표준 사용자 정보 응답
//! - 프로필 조회, 사용자 목록 등에서 사용
//!
//! ### 인증 관련 응답
//! - `LoginResponse` - JWT 토큰을 포함한 로그인 응답
//! - `CreateUserResponse` - 회원가입 완료 응답
//!
//! ## JSON 응답 예제
//!
//! ### 표준 사용자 응답
//! ```json
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "first_name": "Jane",
//!   "last_name": "Doe",
//!   "username": "jane@example.com",
//!   "email": "jane@example.com",
//!   "phone_number": "01012345678",
//!   "address": "Seoul",
//!   "is_active": true,
//!   "roles": ["user"],
//!   "created_at": "2024-06-01T10:00:00Z",
//!   "updated_at": "2024-06-07T12:00:00Z"
//! }
//! ```
//!
//! ### 로그인 응답
//! ```json
//! {
//!   "user": { /* UserResponse 객체 */ },
//!   "access_token": "eyJhbGciOiJIUzI1NiIs...",
//!   "token_type": "Bearer",
//!   "expires_in": 3600
//! }
//! ```
//!
//! ## 보안 고려사항
//!
//! - **비밀번호 제외**: 응답에 비밀번호 해시 포함하지 않음
//! - **토큰 보안**: JWT 토큰은 HTTPS를 통해서만 전송

pub mod user_response;

pub use user_response::{UserResponse, CreateUserResponse, UserListResponse, LoginResponse};
