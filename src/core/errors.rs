//! # Application Error Handling System
//!
//! 계정 서비스 전역에서 사용하는 통합 에러 처리 모듈입니다.
//! Spring Framework의 `@ExceptionHandler` + Global Exception Handler 조합을
//! Rust의 타입 시스템으로 옮겨, 모든 계층이 하나의 `AppError`로 수렴하도록 합니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@ExceptionHandler` | `ResponseError::error_response()` |
//! | `ResponseEntity<ErrorResponse>` | `HttpResponse::build().json()` |
//! | `@ResponseStatus` | 자동 상태 코드 매핑 |
//! | Custom Exception | `AppError` 열거형 변형 |
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된/만료된 재설정 코드 |
//! | `NotFound` | 404 Not Found | 사용자 없음 |
//! | `ConflictError` | 409 Conflict | 이메일 중복 가입 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰/비밀번호 검증 실패 |
//! | `AuthorizationError` | 403 Forbidden | 역할 부족 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `ExternalServiceError` | 502 Bad Gateway | SMTP 발송 실패 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 계정 백엔드에서 발생할 수 있는 모든 에러를 포괄하는 열거형입니다.
/// `thiserror`로 `Error` trait을 자동 구현하고, `actix_web::ResponseError`
/// 구현을 통해 핸들러에서 `?`로 전파하면 적절한 HTTP 응답으로 변환됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // SMTP 발송 실패 변환
/// mailer.send(message).await
///     .map_err(|e| AppError::ExternalServiceError(
///         format!("Failed to send mail: {}", e)
///     ))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산(조회, 삽입, 인덱스 생성 등) 중 발생하는 오류입니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    ///
    /// Redis 서버 통신 오류나 직렬화 실패를 나타냅니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    ///
    /// 클라이언트 입력이 형식/비즈니스 규칙을 만족하지 않을 때 발생합니다.
    /// 잘못되었거나 만료된 비밀번호 재설정 코드도 여기에 해당합니다.
    /// 400 Bad Request로 응답됩니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// if code != stored.code {
    ///     return Err(AppError::ValidationError(
    ///         "Invalid password reset code".to_string()
    ///     ));
    /// }
    /// ```
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 요청한 사용자 등 리소스가 존재하지 않을 때 발생합니다.
    /// 404 Not Found로 응답됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 이미 등록된 이메일로 가입을 시도하는 등 유일성 제약을 위반할 때
    /// 발생합니다. 409 Conflict로 응답됩니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// if user_repo.find_by_email(&email).await?.is_some() {
    ///     return Err(AppError::ConflictError(
    ///         format!("User with email {} already exists", email)
    ///     ));
    /// }
    /// ```
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// 로그인 실패, 기존 비밀번호 불일치, JWT 서명/만료 오류 등
    /// 신원을 확인할 수 없을 때 발생합니다. 401 Unauthorized로 응답됩니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    ///
    /// 인증은 되었으나 요구 역할(예: ADMIN)을 만족하지 못할 때 발생합니다.
    /// 403 Forbidden으로 응답됩니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러
    ///
    /// SMTP 릴레이 등 외부 시스템 호출 실패 시 발생합니다.
    /// 502 Bad Gateway로 응답됩니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    ///
    /// 설정 누락, 의존성 주입 실패 등 예상하지 못한 오류입니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// 각 `AppError` 변형을 HTTP 상태 코드와 표준 JSON 응답으로 변환합니다.
    ///
    /// 응답 형식은 항상 동일합니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// async fn create_user(data: CreateUserRequest) -> AppResult<User> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let cached = redis_client.get::<String>("key").await
///     .context("Failed to get cached data")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Email already registered".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_external_service_error_response() {
        // SMTP 등 외부 시스템 실패는 내부 오류가 아닌 502로 구분
        let error = AppError::ExternalServiceError("SMTP relay unreachable".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
