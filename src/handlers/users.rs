//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업을 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users` | 사용자 목록 조회 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `PUT` | `/users/{id}` | 사용자 정보 수정 | 200 OK |
//! | `PUT` | `/users/{id}/password` | 비밀번호 변경 | 204 No Content |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |
//!
//! ## Spring Boot와의 비교
//!
//! ```java
//! @RestController
//! @RequestMapping("/api/v1/users")
//! public class UserController {
//!     @PostMapping
//!     public ResponseEntity<UserResponse> createUser(
//!         @Valid @RequestBody CreateUserRequest request
//!     ) {
//!         UserResponse response = userService.createUser(request);
//!         return ResponseEntity.status(HttpStatus.CREATED).body(response);
//!     }
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 비즈니스 로직 에러는 `AppError`를 통해 HTTP 상태 코드로 자동 매핑됩니다:
//!
//! ```json
//! { "error": "이미 사용 중인 이메일입니다" }
//! ```

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{
    ChangePasswordRequest, CreateUserRequest, UpdateUserRequest,
};
use crate::domain::dto::users::response::UserListResponse;
use crate::services::users::user_service::UserService;

/// 사용자 생성 핸들러
///
/// 새로운 사용자 계정을 생성합니다.
/// 이메일과 전화번호의 고유성을 검증하며, username은 email과 동일하게 저장됩니다.
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "first_name": "Jane",
///   "last_name": "Doe",
///   "email": "jane@example.com",
///   "phone_number": "0123456789",
///   "address": "12 Main St",
///   "password": "SecurePass123",
///   "password_confirm": "SecurePass123"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "user": {
///     "id": "507f1f77bcf86cd799439011",
///     "email": "jane@example.com",
///     "username": "jane@example.com",
///     "is_active": true,
///     "roles": ["user"]
///   },
///   "message": "사용자가 성공적으로 생성되었습니다"
/// }
/// ```
///
/// ## 실패 사례
///
/// - 중복 이메일/전화번호 (409 Conflict)
/// - 검증 실패: 이메일 형식, 전화번호 9-12자리 숫자, 비밀번호 강도 (400 Bad Request)
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"first_name":"Jane","last_name":"Doe","email":"jane@example.com","phone_number":"0123456789","password":"SecurePass123","password_confirm":"SecurePass123"}'
/// ```
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 목록 조회 핸들러
///
/// 전체 사용자를 최근 가입 순(`created_at` 내림차순)으로 반환합니다.
/// 응답에는 전체 건수(`count`)가 함께 포함됩니다.
///
/// # 엔드포인트
///
/// `GET /users`
#[get("")]
pub async fn list_users() -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let users = service.get_all_users().await?;

    Ok(HttpResponse::Ok().json(UserListResponse::new(users)))
}

/// 사용자 조회 핸들러
///
/// 지정된 ID의 사용자 정보를 조회합니다.
/// 공개 프로필 정보만 반환하며, 비밀번호 해시는 제외됩니다.
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// # 실패 사례
///
/// - 사용자 없음 (404 Not Found)
/// - 잘못된 ObjectId 형식 (400 Bad Request)
#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 정보 수정 핸들러
///
/// 이름, 이메일, 전화번호, 주소를 수정합니다.
/// 이메일을 변경하면 username도 함께 새 이메일로 갱신됩니다.
///
/// # 엔드포인트
///
/// `PUT /users/{user_id}`
///
/// # 실패 사례
///
/// - 사용자 없음 (404 Not Found)
/// - 다른 계정이 사용 중인 이메일/전화번호 (409 Conflict)
/// - 검증 실패 (400 Bad Request)
#[put("/{user_id}")]
pub async fn update_user(
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let user = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 비밀번호 변경 핸들러
///
/// 현재 비밀번호를 검증한 뒤 새 비밀번호로 교체합니다.
///
/// # 엔드포인트
///
/// `PUT /users/{user_id}/password`
///
/// # 실패 사례
///
/// - 현재 비밀번호 불일치 (401 Unauthorized)
/// - 새 비밀번호 강도 미달 (400 Bad Request)
/// - 사용자 없음 (404 Not Found)
#[put("/{user_id}/password")]
pub async fn change_password(
    user_id: web::Path<String>,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    service.change_password(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 삭제 핸들러
///
/// 지정된 ID의 사용자를 시스템에서 완전히 삭제합니다.
/// 물리적 삭제(Hard Delete)이며, 복구가 불가능합니다.
///
/// # 엔드포인트
///
/// `DELETE /users/{user_id}`
///
/// # 응답
///
/// ## 성공 (204 No Content)
///
/// # 실패 사례
///
/// - 사용자 없음 (404 Not Found)
///
/// # 사용 예제
///
/// ```bash
/// curl -X DELETE http://localhost:8080/api/v1/users/507f1f77bcf86cd799439011 \
///   -H "Authorization: Bearer {token}"
/// ```
#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
