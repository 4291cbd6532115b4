//! 메일 발송 서비스
//!
//! 템플릿을 렌더링하고 [`Mailer`]로 보냅니다.

use std::sync::Arc;
use askama::Template;
use once_cell::sync::OnceCell;
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::services::mail::mailer::{MailError, MailOptions, Mailer, SmtpMailer};
use crate::services::mail::templates::{ActivationMail, QuestionReplyMail};

const APP_NAME: &str = "Learning Platform";

pub struct MailService {
    mailer: Arc<dyn Mailer>,
}

static MAIL_SERVICE_INSTANCE: OnceCell<Arc<MailService>> = OnceCell::new();

impl MailService {
    /// # Panics
    ///
    /// `SmtpMailer`가 `ServiceLocator`에 등록되기 전에 호출하면 패닉이 발생합니다.
    pub fn instance() -> Arc<Self> {
        MAIL_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<SmtpMailer>())))
            .clone()
    }

    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    pub async fn send_activation(&self, email: &str, name: &str, activation_code: &str) -> Result<(), AppError> {
        let html = ActivationMail {
            app_name: APP_NAME,
            name,
            activation_code,
            expire_minutes: JwtConfig::activation_expire_minutes(),
        }
        .render()
        .map_err(MailError::from)?;

        self.send(email, "Activate your account", html).await
    }

    pub async fn send_question_reply(&self, email: &str, name: &str, lesson_title: &str) -> Result<(), AppError> {
        let html = QuestionReplyMail {
            app_name: APP_NAME,
            name,
            title: lesson_title,
        }
        .render()
        .map_err(MailError::from)?;

        self.send(email, "Question Reply", html).await
    }

    async fn send(&self, email: &str, subject: &str, html: String) -> Result<(), AppError> {
        self.mailer
            .send_mail(MailOptions {
                email: email.to_string(),
                subject: subject.to_string(),
                html,
            })
            .await
            .map_err(|e| {
                log::error!("메일 발송 실패 ({}): {}", email, e);
                AppError::from(e)
            })
    }
}

fn mail_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(MailService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "mail_service",
        constructor: mail_service_constructor,
    }
}
