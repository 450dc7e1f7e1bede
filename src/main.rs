use anyhow::Context;
use clap::Parser;
use config::Config;
use sungrow_rs::api::{self, Session};
use sungrow_rs::model;

mod table;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SungrowConfig {
    port: u16,
    locale: String,
}

#[derive(Parser)]
#[command(
    version,
    about = "Retrieve data from Sungrow inverter using websocket",
    long_about = None
)]
struct Cli {
    /// Host (IP or address) of the inverter
    host: String,

    /// Show more details
    #[arg(long)]
    details: bool,

    /// Websocket port, overrides SUNGROW_PORT
    #[arg(long)]
    port: Option<u16>,

    /// Locale of the labels, overrides SUNGROW_LOCALE
    #[arg(long)]
    locale: Option<String>,
}

/// Defaults, overridden by `SUNGROW_*` environment variables.
pub fn read_settings() -> Result<SungrowConfig, api::Error> {
    let mut settings = Config::default();
    settings
        .set_default("port", i64::from(model::DEFAULT_PORT))
        .and_then(|s| s.set_default("locale", model::DEFAULT_LOCALE))
        .and_then(|s| s.merge(config::Environment::with_prefix("SUNGROW")))
        .map_err(|e| api::Error::ConfigError(e.to_string()))?;

    settings
        .try_into()
        .map_err(|e| api::Error::ConfigError(e.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let settings = read_settings()?;

    let mut session = Session::new(args.host)
        .port(args.port.unwrap_or(settings.port))
        .locale(args.locale.unwrap_or(settings.locale));

    let readings = session
        .fetch()
        .await
        .with_context(|| format!("Unable to read data from {}", session.api().host))?;

    if readings.is_empty() {
        log::warn!("no data received from {}", session.api().host);
    }

    println!("{}", table::render(&readings, args.details));
    Ok(())
}
