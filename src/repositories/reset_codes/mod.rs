//! 비밀번호 재설정 코드 데이터 액세스 모듈
//!
//! [`ResetCodeRepository`](reset_code_repo::ResetCodeRepository)를 통해
//! `password_reset_codes` 컬렉션을 관리합니다. 이메일당 하나의 코드만 유지하며
//! TTL 인덱스로 만료 문서를 자동 정리합니다.

pub mod reset_code_repo;

pub use reset_code_repo::ResetCodeRepository;
