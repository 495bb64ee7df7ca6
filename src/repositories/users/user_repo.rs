//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **데이터 무결성**: 유니크 제약 조건 및 인덱스 관리

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
};
use singleton_macro::repository;

/// 캐시 항목 TTL (10분)
const USER_CACHE_TTL_SECS: usize = 600;

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산을 담당하며, MongoDB 컬렉션과
/// Redis 캐시를 통합하여 최적화된 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**:
///   - 개별 사용자: `user:{user_id}`
///   - 이메일 조회: `user:email:{email}`
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), username(unique), phone_number(unique), created_at(desc)
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다:
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류
/// - **ConflictError**: 이메일/전화번호 중복 등 유니크 제약 위반
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 이메일 주소로 사용자 조회
    ///
    /// 캐시 우선 조회를 통해 성능을 최적화합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:email:{email}`
    /// - **TTL**: 600초 (10분)
    /// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        // 캐시에서 먼저 확인
        let cache_key = format!("user:email:{}", email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 에서 조회
        let user = self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분)
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, USER_CACHE_TTL_SECS)
                .await;
        }

        Ok(user)
    }

    /// 사용자명으로 사용자 조회
    ///
    /// 사용자명은 항상 이메일을 따라가지만 별도의 유니크 인덱스를 가지므로
    /// 가입 시 중복 확인용으로 직접 조회합니다. 캐싱하지 않습니다.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전화번호로 사용자 조회
    ///
    /// 전화번호는 시스템 전체에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    /// 가입/수정 시 중복 확인 용도로 사용되며 캐싱하지 않습니다.
    pub async fn find_by_phone_number(&self, phone_number: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "phone_number": phone_number })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// 가장 빈번한 조회 패턴이므로 적극적인 캐싱을 적용합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let user = self.collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, USER_CACHE_TTL_SECS)
                .await;
        }

        Ok(user)
    }

    /// 전체 사용자 목록 조회 (최근 가입 순)
    ///
    /// `created_at` 내림차순 인덱스를 활용합니다.
    /// 목록은 변동이 잦아 캐싱하지 않습니다.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection::<User>()
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 이메일, 사용자명, 전화번호의 중복 여부를 사전에 검증합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 또는 전화번호 중복
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        // 중복 확인
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        // 사용자명은 이메일을 따라가지만 인덱스가 별개이므로 함께 확인
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        if self.find_by_phone_number(&user.phone_number).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 전화번호입니다".to_string()));
        }

        // DB에 저장
        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 사용자 정보 업데이트
    ///
    /// MongoDB `$set` 연산자로 지정된 필드만 변경하며,
    /// `find_one_and_update`로 조회와 업데이트를 원자적으로 수행합니다.
    /// 최신 데이터를 반환하도록 `ReturnDocument::After` 옵션을 사용합니다.
    ///
    /// 이메일이 변경되는 경우 기존 이메일의 캐시 키는 호출자가
    /// [`invalidate_email_cache`](Self::invalidate_email_cache)로 무효화해야 합니다.
    pub async fn update(&self, id: &str, update_doc: mongodb::bson::Document) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self.collection::<User>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        if let Some(ref user) = updated_user {
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_email_cache(&user.email).await;
        }

        Ok(updated_user)
    }

    /// 비밀번호 해시 업데이트
    ///
    /// 비밀번호 변경/재설정 흐름에서 사용합니다. `updated_at`도 함께 갱신합니다.
    pub async fn update_password(&self, id: &str, password_hash: &str) -> Result<Option<User>, AppError> {
        self.update(id, doc! {
            "password_hash": password_hash,
            "updated_at": mongodb::bson::DateTime::now(),
        }).await
    }

    /// 사용자 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 사용자가 성공적으로 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 존재하지 않음
    ///
    /// 물리적 삭제입니다. 삭제된 데이터는 복구할 수 없습니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        // 이메일 캐시 키 무효화를 위해 먼저 조회
        let existing = self.find_by_id(id).await?;

        let result = self.collection::<User>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            // 캐시 무효화
            let _ = self.invalidate_cache(id).await;
            if let Some(user) = existing {
                let _ = self.invalidate_email_cache(&user.email).await;
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 이메일 기반 캐시 키 무효화
    ///
    /// 이메일 변경/삭제 시 기존 `user:email:{email}` 항목을 제거합니다.
    pub async fn invalidate_email_cache(&self, email: &str) -> Result<(), AppError> {
        let cache_key = format!("user:email:{}", email);
        self.redis.del(&cache_key).await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행하여 쿼리 성능을 최적화합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스** (`email` 오름차순, UNIQUE)
    /// 2. **사용자명 유니크 인덱스** (`username` 오름차순, UNIQUE)
    /// 3. **전화번호 유니크 인덱스** (`phone_number` 오름차순, UNIQUE)
    /// 4. **생성일 인덱스** (`created_at` 내림차순, 목록 정렬용)
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복 데이터가 있는 경우 유니크 인덱스 생성 실패
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 사용자명 유니크 인덱스
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        // 전화번호 유니크 인덱스
        let phone_index = IndexModel::builder()
            .keys(doc! { "phone_number": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("phone_number_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, username_index, phone_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
