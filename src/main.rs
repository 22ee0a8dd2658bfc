use crate::app_config::AppConfig;
use clap::Parser;
use phonenumber::country;
use tracing::{info, warn};

mod app_config;
mod domain;
mod geo;
mod locate;
mod observer_location_deserializer;
mod phone;
mod report;

#[derive(Parser, Debug)]
#[command(name = "dialscope")]
#[command(about = "Analyze a phone number and place it on the world map.", long_about = None)]
struct Cli {
    /// Phone number to analyze, e.g. "+57 300 1234567"
    number: String,

    /// Region hint (ISO 3166-1 alpha-2) for numbers without an international prefix
    #[arg(short, long)]
    region: Option<String>,

    /// Emit the placement payload as JSON instead of report lines
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let client = locate::new_client(&config)?;
    let observer = locate::observe(&client, &config).await;

    let report = phone::analyze(&cli.number, region_hint(&cli, &config))?;
    info!("✅  Analyzed number");

    if cli.json {
        println!("{}", report::to_json(&report, &observer)?);
    } else {
        for line in report::render(&report, &observer) {
            println!("{line}");
        }
    }

    Ok(())
}

fn region_hint(cli: &Cli, config: &AppConfig) -> Option<country::Id> {
    let code = cli.region.as_deref().or_else(|| config.phone().default_region())?;
    match code.parse::<country::Id>() {
        Ok(id) => Some(id),
        Err(_) => {
            warn!("⚠️ Ignoring unknown region hint '{}'", code);
            None
        }
    }
}
