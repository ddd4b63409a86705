//! src/startup.rs
use crate::configuration::Settings;
use crate::email::{MailTransport, SmtpMailer};
use crate::routes::{apply, health_check, home};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, anyhow::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener = TcpListener::bind(&address)
        .with_context(|| format!("Failed to bind {}", address))?;
    let port = tcp_listener.local_addr().context("Failed to read the bound address")?.port();

    let mail = config
        .mail
        .context("Missing mail settings: set MAIL_USERNAME, MAIL_APP_PASSWORD and MAIL_SMTP_HOST")?;
    let mailer = SmtpMailer::from_settings(&mail).context("Failed to build the SMTP mailer")?;

    let server = run(tcp_listener, Arc::new(mailer))?;

    Ok(Application { port, server })
}

pub fn run(
    listener: TcpListener,
    mailer: Arc<dyn MailTransport>,
) -> Result<Server, std::io::Error> {
    let mailer = web::Data::from(mailer);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/api/apply", web::post().to(apply))

            // serving HTML files
            .route("/", web::get().to(home))

            .app_data(mailer.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
