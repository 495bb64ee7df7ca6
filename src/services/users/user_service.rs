//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! Spring Framework의 UserService와 UserDetailsService 패턴을 참고하여 설계되었으며,
//! 사용자 등록, 인증, 조회, 수정, 삭제 등의 핵심 기능을 제공합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   Registration  │  │  Authentication │  │   User Query    │  │
//! │  │ • Duplicate Chk │  │ • Password Ver  │  │ • By ID/Email   │  │
//! │  │ • Password Hash │  │ • Account State │  │ • Entity to DTO │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! │  ┌─────────────────┐  ┌─────────────────┐                       │
//! │  │ Profile Mgmt    │  │ Password Change │                       │
//! │  │ • Update Fields │  │ • Old Pw Verify │                       │
//! │  │ • Account Del   │  │ • Rehash + Save │                       │
//! │  └─────────────────┘  └─────────────────┘                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//!                          UserRepository
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 적응형 해시 함수로 무차별 대입 공격 방지
//! - **환경별 Cost**: 개발(4) vs 운영(12) 환경별 보안 강도
//! - **에러 메시지 통합**: 로그인 실패 시 이메일/비밀번호 중 무엇이 틀렸는지 노출하지 않음
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시 제외

use std::sync::Arc;
use bcrypt::hash;
use mongodb::bson::doc;
use singleton_macro::service;
use crate::{
    domain::{
        entities::users::user::User,
        dto::users::{
            request::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest},
            response::{CreateUserResponse, UserResponse},
        },
    },
    repositories::users::user_repo::UserRepository,
    core::errors::AppError,
};
use crate::config::PasswordConfig;

/// 사용자 관리 비즈니스 로직 서비스
///
/// Spring Framework의 `@Service` UserService와 유사한 역할을 수행합니다.
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며 UserRepository가 자동 주입됩니다.
///
/// ## 에러 처리 전략
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다:
///
/// - **ValidationError**: 입력값 검증 실패
/// - **ConflictError**: 이메일/전화번호 중복
/// - **AuthenticationError**: 비밀번호 검증 실패
/// - **NotFound**: 사용자 존재하지 않음
/// - **InternalError**: 해싱 실패 등 시스템 레벨 오류
#[service(name = "user")]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **비밀번호 해싱**: 환경별 cost로 bcrypt 해싱
    /// 2. **엔티티 생성**: `User::new()` (username은 email과 동일하게 설정됨)
    /// 3. **영구 저장**: Repository에서 이메일/전화번호 중복 확인 후 저장
    /// 4. **응답 생성**: 민감 정보를 제거한 DTO 응답 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(CreateUserResponse)` - 생성된 사용자 정보와 성공 메시지
    /// * `Err(AppError::ConflictError)` - 이메일 또는 전화번호 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, AppError> {
        let start_time = std::time::Instant::now();

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        // 비밀번호 해싱
        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        let hash_duration = hash_start.elapsed();

        log::info!("Password hashing took: {:?}", hash_duration);

        // 사용자 엔티티 생성 (username = email)
        let user = User::new(
            request.first_name,
            request.last_name,
            request.email,
            request.phone_number,
            request.address,
            password_hash,
        );

        // 저장
        let created_user = self.user_repo.create(user).await?;

        let total_duration = start_time.elapsed();
        log::info!("Total user creation took: {:?}", total_duration);

        Ok(CreateUserResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// ID로 사용자 조회
    ///
    /// Repository 레이어의 Redis 캐싱을 활용합니다 (TTL 10분).
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 사용자 정보 DTO (민감 정보 제외)
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 이메일 주소로 사용자 조회
    pub async fn get_user_by_email(&self, email: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 전체 사용자 목록 조회 (최근 가입 순)
    pub async fn get_all_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 사용자 프로필 수정
    ///
    /// 이름, 이메일, 전화번호, 주소를 갱신합니다.
    /// 이메일이 변경되면 username도 함께 새 이메일로 갱신됩니다.
    ///
    /// # 비즈니스 규칙
    ///
    /// - **이메일 변경**: 다른 계정이 사용 중인 이메일로 변경 불가
    /// - **전화번호 변경**: 다른 계정이 사용 중인 전화번호로 변경 불가
    /// - **username 동기화**: username은 항상 email을 따라갑니다
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 수정된 사용자 정보
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::ConflictError)` - 이메일/전화번호 중복
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> Result<UserResponse, AppError> {
        let existing = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let email_changed = existing.email != request.email;

        // 변경된 이메일/전화번호의 중복 확인 (본인 제외)
        if email_changed {
            if self.user_repo.find_by_email(&request.email).await?.is_some() {
                return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
            }
        }

        if existing.phone_number != request.phone_number {
            if self.user_repo.find_by_phone_number(&request.phone_number).await?.is_some() {
                return Err(AppError::ConflictError("이미 사용 중인 전화번호입니다".to_string()));
            }
        }

        let update_doc = doc! {
            "first_name": &request.first_name,
            "last_name": &request.last_name,
            "email": &request.email,
            // username은 email과 동일하게 유지
            "username": &request.email,
            "phone_number": &request.phone_number,
            "address": request.address.as_deref(),
            "updated_at": mongodb::bson::DateTime::now(),
        };

        let updated = self.user_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        // 기존 이메일 키로 캐시된 항목 제거
        if email_changed {
            let _ = self.user_repo.invalidate_email_cache(&existing.email).await;
        }

        Ok(UserResponse::from(updated))
    }

    /// 비밀번호 변경
    ///
    /// 현재 비밀번호를 검증한 뒤 새 비밀번호로 교체합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 변경 성공
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::AuthenticationError)` - 현재 비밀번호 불일치
    pub async fn change_password(&self, id: &str, request: ChangePasswordRequest) -> Result<(), AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        // 현재 비밀번호 검증
        let is_valid = bcrypt::verify(&request.old_password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            return Err(AppError::AuthenticationError("현재 비밀번호가 일치하지 않습니다".to_string()));
        }

        let password_hash = hash(&request.new_password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        self.user_repo.update_password(id, &password_hash).await?;

        log::info!("✅ 비밀번호 변경 완료 - user_id: {}", id);

        Ok(())
    }

    /// 비밀번호 재설정 (이메일 기반, 현재 비밀번호 검증 없음)
    ///
    /// 재설정 코드 검증이 끝난 뒤 PasswordResetService에서 호출됩니다.
    pub async fn reset_password_by_email(&self, email: &str, new_password: &str) -> Result<(), AppError> {
        let user = self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let user_id = user.id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let password_hash = hash(new_password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        self.user_repo.update_password(&user_id, &password_hash).await?;

        Ok(())
    }

    /// 사용자 계정 삭제
    ///
    /// 물리적 삭제입니다. 되돌릴 수 없습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 삭제 성공
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 로그인 비밀번호 검증
    ///
    /// 이메일과 비밀번호로 사용자를 인증합니다.
    /// Spring Security의 `authenticate()`와 유사하며, 성공 시 사용자 엔티티를 반환합니다.
    ///
    /// # 보안 특징
    ///
    /// ## 에러 메시지 통합
    ///
    /// 보안을 위해 구체적인 실패 원인을 노출하지 않습니다:
    /// - 존재하지 않는 이메일 → "잘못된 이메일 또는 비밀번호입니다"
    /// - 틀린 비밀번호 → "잘못된 이메일 또는 비밀번호입니다"
    ///
    /// ## 타이밍 공격 방지
    ///
    /// bcrypt의 특성상 검증 시간이 일정하여 타이밍 공격을 방지합니다.
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<User, AppError> {
        let start_time = std::time::Instant::now();

        let user = self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        let verify_duration = verify_start.elapsed();

        log::debug!("Password verification took: {:?}", verify_duration);

        if !is_valid {
            return Err(AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()));
        }

        if !user.is_active {
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }

        let total_duration = start_time.elapsed();
        log::debug!("Total password verification took: {:?}", total_duration);

        Ok(user)
    }
}
