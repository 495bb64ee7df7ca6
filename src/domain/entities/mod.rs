//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑되는
//! 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **직렬화/역직렬화**: BSON ↔ Rust 구조체 변환 지원
//!
//! ### MongoDB 통합
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **인덱스 설정**: Repository의 `ensure_indexes()`에서 생성
//!
//! ### 싱글톤 매크로 연동
//! 이 엔티티들은 프로젝트의 `#[repository]` 매크로와 함께 사용됩니다:
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! #[repository(collection = "users")]
//! struct UserRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! impl UserRepository {
//!     async fn find_by_email(&self, email: &str) -> Option<User> {
//!         self.collection::<User>()
//!             .find_one(doc! { "email": email })
//!             .await
//!             .ok()
//!             .flatten()
//!     }
//! }
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring JPA Entity | Rust Domain Entity |
//! |------------------|-------------------|
//! | `@Entity` | `#[derive(Serialize, Deserialize)]` |
//! | `@Id` | `#[serde(rename = "_id")]` |
//! | `@CreatedDate` | `created_at: DateTime` |
//! | Bean Validation | Rust 타입 시스템 + 커스텀 검증 |
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── users/         ← 사용자 엔티티 (users 컬렉션)
//! └── reset_codes/   ← 비밀번호 재설정 코드 엔티티 (password_reset_codes 컬렉션)
//! ```

pub mod reset_codes;
pub mod users;
