//! src/email/smtp.rs
use crate::configuration::MailSettings;
use crate::email::MailTransport;
use anyhow::Context;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

/// Delivers mail through an authenticated TLS relay. The account username
/// doubles as the From address.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn from_settings(settings: &MailSettings) -> Result<Self, anyhow::Error> {
        let credentials = Credentials::new(
            settings.username.clone(),
            settings.app_password.expose_secret().to_owned(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_host)
            .with_context(|| format!("Failed to configure the SMTP relay {}", settings.smtp_host))?
            .credentials(credentials)
            .build();

        let sender = settings
            .username
            .parse()
            .with_context(|| format!("{} is not a valid sender mailbox", settings.username))?;

        Ok(Self { transport, sender })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), anyhow::Error> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(to.parse()
                .with_context(|| format!("{} is not a valid recipient mailbox", to))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_owned())
            .context("Failed to assemble the email")?;

        self.transport
            .send(message)
            .await
            .context("SMTP delivery failed")?;

        Ok(())
    }
}
