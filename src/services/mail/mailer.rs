//! 메일 전송 계층
//!
//! [`Mailer`] 트레이트 뒤에 실제 전송 수단을 숨깁니다. 운영에서는 [`SmtpMailer`]가
//! `ServiceLocator`에 등록되고, 테스트는 보낸 메일을 기록하는 구현으로 대체합니다.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use crate::config::SmtpConfig;
use crate::core::errors::AppError;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Email transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Email address error: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Email message error: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl From<MailError> for AppError {
    fn from(e: MailError) -> Self {
        AppError::ExternalServiceError(e.to_string())
    }
}

/// 보낼 메일 한 통
#[derive(Debug, Clone, PartialEq)]
pub struct MailOptions {
    pub email: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_mail(&self, options: MailOptions) -> Result<(), MailError>;
}

/// lettre 기반 SMTP 전송기
///
/// 465 포트는 암시적 TLS(`relay`), 그 외 포트는 STARTTLS(`starttls_relay`)로 연결합니다.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(host: &str, port: u16, user: &str, password: &str) -> Result<Self, MailError> {
        let builder = if port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
        };

        let transport = builder
            .port(port)
            .credentials(Credentials::new(user.to_string(), password.to_string()))
            .build();

        Ok(Self {
            transport,
            from: user.parse()?,
        })
    }

    pub fn from_config() -> Result<Self, MailError> {
        let mailer = Self::new(
            &SmtpConfig::host(),
            SmtpConfig::port(),
            &SmtpConfig::user(),
            &SmtpConfig::password(),
        )?;

        log::info!("✅ SMTP 전송기 준비: {}:{}", SmtpConfig::host(), SmtpConfig::port());
        Ok(mailer)
    }

    fn build_message(&self, options: MailOptions) -> Result<Message, MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(options.email.parse()?)
            .subject(options.subject)
            .header(ContentType::TEXT_HTML)
            .body(options.html)?;

        Ok(message)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_mail(&self, options: MailOptions) -> Result<(), MailError> {
        let recipient = options.email.clone();
        let message = self.build_message(options)?;

        self.transport.send(message).await?;

        log::info!("📧 메일 발송: {}", recipient);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailer() -> SmtpMailer {
        SmtpMailer::new("smtp.example.com", 587, "no-reply@example.com", "secret").unwrap()
    }

    #[test]
    fn test_smtp_mailer_builds_for_both_tls_modes() {
        assert!(SmtpMailer::new("smtp.example.com", 465, "no-reply@example.com", "secret").is_ok());
        assert!(SmtpMailer::new("smtp.example.com", 587, "no-reply@example.com", "secret").is_ok());
    }

    #[test]
    fn test_invalid_sender_address() {
        let result = SmtpMailer::new("smtp.example.com", 587, "not an address", "secret");
        assert!(matches!(result, Err(MailError::Address(_))));
    }

    #[test]
    fn test_build_html_message() {
        let message = mailer()
            .build_message(MailOptions {
                email: "jane@example.com".to_string(),
                subject: "Activate your account".to_string(),
                html: "<p>1234</p>".to_string(),
            })
            .unwrap();

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: jane@example.com"));
        assert!(raw.contains("Subject: Activate your account"));
        assert!(raw.contains("Content-Type: text/html"));
    }

    #[test]
    fn test_bad_recipient_is_address_error() {
        let result = mailer().build_message(MailOptions {
            email: "nope".to_string(),
            subject: "x".to_string(),
            html: String::new(),
        });

        assert!(matches!(result, Err(MailError::Address(_))));
    }

    #[test]
    fn test_mail_error_maps_to_external_service_error() {
        let error = AppError::from(MailError::Address("x".parse::<Mailbox>().unwrap_err()));
        assert!(matches!(error, AppError::ExternalServiceError(_)));
    }
}
