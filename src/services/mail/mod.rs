//! 메일 발송 모듈
//!
//! [`MailService`](mail_service::MailService)를 통해 SMTP 메일 발송을 제공합니다.
//! `#[service]` 매크로로 싱글톤 관리됩니다.

pub mod mail_service;

pub use mail_service::MailService;
