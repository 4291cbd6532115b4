//! 메일 발송 모듈
//!
//! - [`mailer`] - `Mailer` 트레이트와 lettre 기반 `SmtpMailer`
//! - [`templates`] - askama HTML 템플릿 (활성화 코드, 질문 답변 알림)
//! - [`mail_service`] - 템플릿 렌더링 후 발송

pub mod mailer;
pub mod templates;
pub mod mail_service;

pub use mailer::{MailError, MailOptions, Mailer, SmtpMailer};
pub use mail_service::MailService;
