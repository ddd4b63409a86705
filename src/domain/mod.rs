//! src/domain/mod.rs
mod name;
pub use name::ApplicantName;

mod email;
pub use email::ApplicantEmail;

mod phone;
pub use phone::PhoneNumber;

mod github;
pub use github::GithubProfile;

mod skills;
pub use skills::Skills;

mod message;
pub use message::Motivation;

use crate::routes::ApplicationForm;

/// A fully validated internship application. A value of this type exists
/// only if all six fields satisfied their predicate; it is built from one
/// request body, consumed by one email composition, then dropped.
#[derive(Debug)]
pub struct Application {
    pub name: ApplicantName,
    pub email: ApplicantEmail,
    pub phone: PhoneNumber,
    pub github: GithubProfile,
    pub skills: Skills,
    pub message: Motivation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field that failed its predicate, in form order.
#[derive(Debug)]
pub struct FieldErrors(pub Vec<FieldError>);

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl TryFrom<ApplicationForm> for Application {
    type Error = FieldErrors;

    fn try_from(form: ApplicationForm) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let name = field(&mut errors, "name", ApplicantName::parse(form.name));
        let email = field(&mut errors, "email", ApplicantEmail::parse(form.email));
        let phone = field(&mut errors, "phone", PhoneNumber::parse(form.phone));
        let github = field(&mut errors, "github", GithubProfile::parse(form.github));
        let skills = field(&mut errors, "skills", Skills::parse(form.skills));
        let message = field(&mut errors, "message", Motivation::parse(form.message));

        match (name, email, phone, github, skills, message) {
            (Some(name), Some(email), Some(phone), Some(github), Some(skills), Some(message)) => {
                Ok(Self {
                    name,
                    email,
                    phone,
                    github,
                    skills,
                    message,
                })
            }
            _ => Err(FieldErrors(errors)),
        }
    }
}

fn field<T, E: std::fmt::Display>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    parsed: Result<T, E>,
) -> Option<T> {
    match parsed {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(FieldError {
                field,
                message: error.to_string(),
            });
            None
        }
    }
}
