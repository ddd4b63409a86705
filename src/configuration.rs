//! src/configuration.rs
use config::{Config, File};
use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub mail: Option<MailSettings>,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
}

/// The two secrets the mail transport needs: the sender account (also the
/// SMTP login and the From address) and its application-specific password.
#[derive(Deserialize, Clone)]
pub struct MailSettings {
    pub username: String,
    pub app_password: Secret<String>,
    pub smtp_host: String,
}

#[derive(PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;

    if environment == Environment::Local {
        let mail_file_path = configuration_directory.join("mail");
        dotenvy::from_filename(mail_file_path).expect("Failed to read the mail settings file");
    }

    // Deployments export MAIL_USERNAME, MAIL_APP_PASSWORD and MAIL_SMTP_HOST
    // directly. A missing or incomplete set is reported when the server is
    // built, not here.
    settings.mail = envy::prefixed("MAIL_").from_env::<MailSettings>().ok();

    Ok(settings)
}
