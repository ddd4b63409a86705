//! src/routes/apply.rs
use crate::domain::{Application, FieldErrors};
use crate::email::MailTransport;
use crate::routes::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use htmlescape::{encode_attribute, encode_minimal};
use uuid::Uuid;

/// Applications always land in the studio inbox. Changing it is a code
/// change, not configuration.
pub const APPLICATION_INBOX: &str = "programmerdatch@gmail.com";

#[derive(serde::Deserialize)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub skills: String,
    pub message: String,
}

#[derive(thiserror::Error)]
pub enum ApplyError {
    #[error("Invalid application: {0}")]
    Validation(#[source] FieldErrors),
    #[error("Failed to submit application")]
    Delivery(#[from] anyhow::Error),
}

impl std::fmt::Debug for ApplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ApplyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApplyError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplyError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApplyError::Validation(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": self.to_string(),
            })),
            // Delivery problems are collapsed to one opaque message: the
            // applicant cannot tell bad credentials from an SMTP rejection.
            ApplyError::Delivery(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Failed to submit application",
                }))
            }
        }
    }
}

#[tracing::instrument(
    name = "Receiving an internship application",
    skip(payload, mailer),
    fields(
        request_id = %Uuid::new_v4(),
        applicant_email = %payload.email,
        applicant_name = %payload.name
    )
)]
pub async fn apply(
    payload: web::Json<ApplicationForm>,
    mailer: web::Data<dyn MailTransport>,
) -> Result<HttpResponse, ApplyError> {
    // The browser runs the same checks, but the endpoint is reachable
    // without it.
    let application = Application::try_from(payload.into_inner()).map_err(ApplyError::Validation)?;

    send_application_email(mailer.get_ref(), &application)
        .await
        .context("Failed to deliver the application email")?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Application submitted successfully",
    })))
}

#[tracing::instrument(name = "Sending the application email", skip(mailer, application))]
async fn send_application_email(
    mailer: &dyn MailTransport,
    application: &Application,
) -> Result<(), anyhow::Error> {
    let subject = format!(
        "New Internship Application from {}",
        application.name.as_ref()
    );
    let html_body = application_email_html(application);

    mailer.send(APPLICATION_INBOX, &subject, &html_body).await
}

/// The notification template. All fields are user input and get escaped
/// before interpolation; the GitHub URL additionally lands inside an
/// attribute.
fn application_email_html(application: &Application) -> String {
    let name = encode_minimal(application.name.as_ref());
    let email = encode_minimal(application.email.as_ref());
    let phone = encode_minimal(application.phone.as_ref());
    let github = encode_minimal(application.github.as_ref());
    let github_href = encode_attribute(application.github.as_ref());
    let skills = encode_minimal(application.skills.as_ref());
    let message = encode_minimal(application.message.as_ref());

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2563eb;">New Internship Application</h2>
  <div style="background-color: #f8fafc; padding: 20px; border-radius: 8px;">
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>GitHub Profile:</strong> <a href="{github_href}" target="_blank">{github}</a></p>
    <p><strong>Skills:</strong> {skills}</p>
    <p><strong>Message:</strong></p>
    <p style="background-color: white; padding: 10px; border-radius: 4px;">{message}</p>
  </div>
</div>"#
    )
}
