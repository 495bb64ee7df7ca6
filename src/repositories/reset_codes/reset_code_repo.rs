//! # 비밀번호 재설정 코드 리포지토리
//!
//! `password_reset_codes` 컬렉션의 데이터 액세스 계층입니다.
//! 이메일당 하나의 유효한 코드만 유지하며, TTL 인덱스로
//! 만료된 문서를 MongoDB가 자동으로 정리하도록 합니다.

use std::sync::Arc;
use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::reset_codes::reset_code::PasswordResetCode,
};
use singleton_macro::repository;

/// 재설정 코드 데이터 액세스 리포지토리
///
/// 코드는 일회용 단명 데이터라 Redis 캐싱을 적용하지 않습니다.
/// 모든 조회/변경은 MongoDB로 직행합니다.
#[repository(name = "resetcode", collection = "password_reset_codes")]
pub struct ResetCodeRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 클라이언트 (자동 주입, 현재 미사용)
    redis: Arc<RedisClient>,
}

impl ResetCodeRepository {
    /// 이메일로 유효한 재설정 코드 조회
    ///
    /// TTL 인덱스 정리는 백그라운드에서 주기적으로만 실행되므로,
    /// 반환된 코드의 만료 여부는 호출자가 `is_expired()`로 재확인해야 합니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<PasswordResetCode>, AppError> {
        self.collection::<PasswordResetCode>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 재설정 코드 저장 (이메일당 1개 유지)
    ///
    /// 동일 이메일의 기존 코드를 제거한 뒤 새 코드를 삽입합니다.
    /// 코드를 재요청하면 이전 코드는 즉시 무효화됩니다.
    pub async fn save(&self, code: PasswordResetCode) -> Result<PasswordResetCode, AppError> {
        self.delete_by_email(&code.email).await?;

        let mut code = code;
        let result = self.collection::<PasswordResetCode>()
            .insert_one(&code)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        code.id = result.inserted_id.as_object_id();

        Ok(code)
    }

    /// 이메일의 재설정 코드 삭제
    ///
    /// 코드 소진(사용 완료) 또는 만료 발견 시 호출됩니다.
    pub async fn delete_by_email(&self, email: &str) -> Result<bool, AppError> {
        let result = self.collection::<PasswordResetCode>()
            .delete_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스** (`email` 오름차순, UNIQUE)
    /// 2. **TTL 인덱스** (`expires_at`, expireAfterSeconds=0)
    ///    - 만료 시각이 지난 문서를 MongoDB가 백그라운드에서 삭제
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<PasswordResetCode>();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // expires_at 기준 TTL 인덱스
        let ttl_index = IndexModel::builder()
            .keys(doc! { "expires_at": 1 })
            .options(IndexOptions::builder()
                .expire_after(std::time::Duration::from_secs(0))
                .name("expires_at_ttl".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, ttl_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
