//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//! | `ResponseEntity<T>` | `Result<T, AppError>` | 상태 코드와 함께 응답 |
//!
//! ## 설계 원칙
//!
//! - **API 계약 우선**: 클라이언트가 기대할 수 있는 명확한 데이터 구조
//! - **유효성 검증 내장**: validator crate를 통한 비즈니스 규칙 검증
//! - **도메인 분리**: 엔티티를 그대로 노출하지 않고 DTO로 변환
//!   (예: `UserResponse`는 `password_hash`를 절대 포함하지 않습니다)
//!
//! ## 모듈 구성
//!
//! ```text
//! dto/
//! ├── users/   ← 사용자 CRUD + 로그인 요청/응답
//! └── reset/   ← 비밀번호 재설정 흐름 요청/응답
//! ```

pub mod reset;
pub mod users;
