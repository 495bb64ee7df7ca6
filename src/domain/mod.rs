//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 로직과 도메인 규칙을 담당합니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 핵심 비즈니스 객체 (JPA Entity와 유사)
//! ├── DTOs      - 데이터 전송 객체 (Request/Response)
//! └── Models    - 인증 컨텍스트 및 토큰 클레임 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `SecurityContext` | `models::auth` | 인증된 사용자 정보 |
//! | `@Valid` | `validator` 크레이트 | 데이터 유효성 검사 |
//!
//! ## 모듈 구성
//!
//! - [`entities`]: MongoDB 컬렉션과 매핑되는 영속 객체 (`User`, `PasswordResetCode`)
//! - [`dto`]: HTTP API의 요청/응답 계약 (검증 규칙 포함)
//! - [`models`]: 영속되지 않는 값 객체 (`TokenClaims`, `AuthenticatedUser`)

pub mod dto;
pub mod entities;
pub mod models;
