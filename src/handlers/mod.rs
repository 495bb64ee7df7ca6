//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! ### Spring MVC Controller
//! ```java
//! @RestController
//! @RequestMapping("/api/v1/users")
//! public class UserController {
//!
//!     @Autowired
//!     private UserService userService;
//!
//!     @PostMapping
//!     public ResponseEntity<UserResponse> createUser(@RequestBody CreateUserRequest request) {
//!         UserResponse response = userService.createUser(request);
//!         return ResponseEntity.status(HttpStatus.CREATED).body(response);
//!     }
//! }
//! ```
//!
//! ### 이 모듈의 Rust 구현
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, post};
//! use crate::services::users::UserService;
//!
//! #[post("")]
//! pub async fn create_user(
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let service = UserService::instance(); // 싱글톤 패턴
//!     let response = service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 관리 엔드포인트
//!   - 사용자 생성 (`POST /users`)
//!   - 사용자 목록/조회 (`GET /users`, `GET /users/{id}`)
//!   - 사용자 수정 (`PUT /users/{id}`)
//!   - 비밀번호 변경 (`PUT /users/{id}/password`)
//!   - 사용자 삭제 (`DELETE /users/{id}`)
//!
//! - **`auth`**: 인증 관련 엔드포인트
//!   - 로그인 (`POST /auth/login`)
//!   - 토큰 검증 (`POST /auth/verify`)
//!   - 내 정보 조회 (`GET /auth/me`)
//!
//! - **`password_reset`**: 비밀번호 재설정 엔드포인트
//!   - 재설정 코드 발송 (`POST /password-reset/send-code`)
//!   - 비밀번호 재설정 (`POST /password-reset/confirm`)
//!
//! ## 공통 규칙
//!
//! - 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며
//!   에러는 `?` 연산자로 전파되어 일관된 JSON 에러 응답으로 변환됩니다.
//! - 요청 본문은 `validator` 크레이트로 검증하며 실패 시 400을 반환합니다.
//! - 보호된 엔드포인트는 라우팅 단계에서 인증 미들웨어로 감쌉니다.

pub mod users;
pub mod auth;
pub mod password_reset;
