use nailtech::configuration::get_configuration;
use nailtech::startup::build;
use nailtech::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("nailtech".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().expect("Failed to read configuration.");
    let app = build(config)?;
    app.run().await?;

    Ok(())
}
