//! 계정 서비스 백엔드
//!
//! Rust 기반의 사용자 계정 관리 서비스입니다.
//! JWT 토큰 기반 인증, 이메일 비밀번호 재설정 코드 발급,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 계정 등록, 프로필 수정, 계정 삭제, 비밀번호 변경
//! - **JWT 인증**: HMAC 서명 액세스 토큰 기반 상태 없는 인증
//! - **비밀번호 재설정**: 이메일로 발송되는 일회용 숫자 코드 흐름
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 사용자/재설정 코드 영구 저장
//! - **Redis**: 사용자 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service_backend::services::users::UserService;
//! use account_service_backend::services::auth::TokenService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserService::instance();
//! let token_service = TokenService::instance();
//!
//! // 사용자 생성 및 토큰 발급
//! let user = user_service.create_user(request).await?;
//! let token = token_service.generate_access_token(&user)?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
