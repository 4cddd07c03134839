use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use inquire::Text;
use log::debug;
use windview_core::{
    Config, DEFAULT_SOURCE_URL, DisplayProjection, DisplaySink, HttpFetcher, Labels,
    WeatherController, WeatherRecord,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "windview", version, about = "Show wind and location for a weather document")]
pub struct Cli {
    /// Increase log output (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the weather document once and print its labels.
    Show {
        /// Source URL; overrides the configured one.
        #[arg(long)]
        url: Option<String>,

        /// Also print conditions, temperatures and station times.
        #[arg(long)]
        details: bool,
    },

    /// Set the source URL stored in the config file.
    Configure {
        /// New source URL. Prompted for when omitted.
        url: Option<String>,

        /// Forget the stored URL and fall back to the built-in one.
        #[arg(long, conflicts_with = "url")]
        reset: bool,
    },
}

/// Prints every published set of labels to stdout.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl DisplaySink for TerminalSink {
    fn publish(&mut self, projection: &DisplayProjection) {
        let labels = Labels::from_projection(projection);
        for line in labels.lines() {
            println!("{line}");
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { url, details } => {
                let config = Config::load()?;
                let source_url = url.unwrap_or_else(|| config.source_url().to_string());

                let mut controller =
                    WeatherController::new(HttpFetcher::new(), source_url, TerminalSink);
                debug!("Using source URL {}", controller.source_url());

                let refreshed = controller.refresh().await;
                if let Err(err) = refreshed {
                    let url = controller.source_url();
                    return Err(err).with_context(|| format!("Get weather from {url} failed"));
                }

                if let Some(record) = controller.record().filter(|_| details) {
                    print_details(record);
                }
            }
            Command::Configure { url, reset } => {
                let mut config = Config::load()?;

                if reset {
                    config.reset_source_url();
                } else {
                    let url = match url {
                        Some(url) => url,
                        None => Text::new("Source URL:")
                            .with_default(config.source_url())
                            .with_help_message(&format!("Built-in default: {DEFAULT_SOURCE_URL}"))
                            .prompt()
                            .context("Failed to read source URL")?,
                    };
                    config.set_source_url(&url)?;
                }

                let path = config.save()?;
                println!("Source URL: {}", config.source_url());
                println!("Saved to {}", path.display());
            }
        }

        Ok(())
    }
}

fn print_details(record: &WeatherRecord) {
    println!();
    if let Some(condition) = record.primary_condition() {
        println!("Conditions: {} ({})", condition.category, condition.description);
    }

    let m = &record.measurements;
    println!(
        "Temperature: {} (min {}, max {})",
        kelvin(m.temperature),
        kelvin(m.temp_min),
        kelvin(m.temp_max)
    );
    println!("Pressure: {} hPa, Humidity: {}%", m.pressure, m.humidity);
    println!("Clouds: {}%, Visibility: {} m", record.cloud_cover.percentage, record.visibility);
    println!("Observed: {}", format_time(record.observed_at()));
    println!(
        "Sunrise: {}, Sunset: {} ({})",
        format_time(record.station_meta.sunrise_at()),
        format_time(record.station_meta.sunset_at()),
        record.station_meta.country_code
    );
}

/// The document reports temperatures in Kelvin; shown with the Celsius value.
fn kelvin(value: f64) -> String {
    format!("{value} K / {:.1} °C", value - 273.15)
}

fn format_time(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
