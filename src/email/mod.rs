//! src/email/mod.rs
use async_trait::async_trait;

mod smtp;
pub use smtp::SmtpMailer;

/// The one capability the submission endpoint needs from a mail provider.
/// Tests substitute an in-memory implementation; production wires in
/// [`SmtpMailer`].
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), anyhow::Error>;
}
