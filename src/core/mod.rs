//! # Core Framework Module
//!
//! 계정 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//! Spring Framework의 핵심 컨테이너 기능을 Rust 생태계에 맞게 구현하여,
//! 타입 안전성과 성능을 모두 만족하는 의존성 주입 시스템을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: Spring의 ApplicationContext + BeanFactory 역할
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//! - **의존성 해결**: Arc<T> 타입 기반 자동 의존성 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Component` | `#[service]` / `#[repository]` |
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Autowired` | `Arc<T>` 필드 자동 주입 |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//! | Bean 생명주기 | Singleton + Lazy 초기화 |
//!
//! ## 사용 패턴
//!
//! ### 기본 서비스 정의
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! // 리포지토리 정의
//! #[repository(collection = "users")]
//! struct UserRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! // 서비스 정의 (자동 의존성 주입)
//! #[service]
//! struct PasswordResetService {
//!     user_service: Arc<UserService>,   // 자동 주입
//!     mail_service: Arc<MailService>,   // 자동 주입
//! }
//!
//! // 사용
//! let reset_service = PasswordResetService::instance();
//! ```
//!
//! ### 애플리케이션 초기화
//!
//! ```rust,ignore
//! // 1. 인프라 컴포넌트 등록
//! let database = Database::connect("mongodb://localhost").await?;
//! let redis = RedisClient::connect("redis://localhost").await?;
//!
//! ServiceLocator::set(database);
//! ServiceLocator::set(redis);
//!
//! // 2. 모든 서비스/리포지토리 초기화
//! ServiceLocator::initialize_all().await?;
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for type: UserService
//! panic: Circular dependency detected: UserService is already being initialized
//! ```
//! **해결**: 서비스 계층 구조를 재설계하여 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Service not found: MailService. Make sure it's registered...
//! ```
//! **해결**: `#[service]` 매크로 적용 또는 `ServiceLocator::set()` 으로 수동 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
