//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 이메일/패스워드 로그인과 JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - **로그인**: 이메일/패스워드 방식 (`POST /auth/login`)
//! - **토큰 검증**: JWT 토큰 유효성 확인 (`POST /auth/verify`)
//! - **내 정보**: 토큰 소유자의 최신 정보 조회 (`GET /auth/me`)
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::dto::users::{
        request::LoginRequest,
        response::LoginResponse,
    },
    services::{auth::TokenService, users::user_service::UserService},
};

/// 로그인 핸들러
///
/// 이메일과 패스워드를 검증하고 JWT 액세스 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /auth/login`
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "user": { "id": "...", "email": "jane@example.com" },
///   "access_token": "eyJhbGciOiJIUzI1NiIs...",
///   "token_type": "Bearer",
///   "expires_in": 86400
/// }
/// ```
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();
    let token_service = TokenService::instance();

    // 사용자 인증
    let user = user_service
        .verify_password(&payload.email, &payload.password)
        .await?;

    log::info!("로그인 성공 - 사용자: {}", payload.email);

    // JWT 액세스 토큰 생성
    let access_token = token_service
        .generate_access_token(&user)
        .map_err(|e| {
            log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", payload.email, e);
            e
        })?;

    let expires_in = token_service.access_token_ttl_seconds();
    let response = LoginResponse::new(user, access_token, expires_in);

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 검증 엔드포인트
///
/// 클라이언트가 보유한 JWT 토큰의 유효성을 검증합니다.
///
/// # Endpoint
/// `POST /auth/verify`
#[post("/verify")]
pub async fn verify_token(
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();

    // Authorization 헤더에서 토큰 추출
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token)?;

    Ok(HttpResponse::Ok().json(json!({
        "valid": true,
        "user_id": claims.sub,
        "roles": claims.roles
    })))
}

/// 현재 인증된 사용자 정보 조회 엔드포인트
///
/// JWT 토큰을 검증하고 데이터베이스에서 최신 사용자 정보를 조회하여 반환합니다.
///
/// # Endpoint
/// `GET /auth/me`
#[get("/me")]
pub async fn get_current_user(
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();
    let user_service = UserService::instance();

    // Authorization 헤더에서 토큰 추출
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    // Bearer 토큰 추출
    let token = token_service.extract_bearer_token(auth_header)?;

    // 토큰 검증 및 사용자 ID 추출
    let user_id = token_service.extract_user_id(token)?;

    // 데이터베이스에서 최신 사용자 정보 조회
    let user = user_service
        .get_user_by_id(&user_id)
        .await
        .map_err(|_| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))?;

    Ok(HttpResponse::Ok().json(user))
}
