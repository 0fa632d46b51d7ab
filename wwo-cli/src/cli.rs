use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Password, Select, Text};
use serde::Serialize;
use wwo_core::{
    Config, Frequency, Report, SearchRequest, decode_search, decode_weather, provider_from_config,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wwo", version, about = "World Weather Online CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and request defaults.
    Configure,

    /// Show current conditions and forecast for a location.
    Show {
        /// Place name, postcode, "lat,long" or IP address.
        location: String,

        /// Number of forecast days.
        #[arg(long)]
        days: Option<u8>,

        /// Hours between forecast samples: 3, 6, 12 or 24.
        #[arg(long)]
        frequency: Option<u8>,

        /// First forecast day (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Language code for weather descriptions, e.g. "fr".
        #[arg(long)]
        lang: Option<String>,

        /// Leave out current conditions.
        #[arg(long)]
        no_current: bool,

        /// Leave out the forecast.
        #[arg(long)]
        no_forecast: bool,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Look up locations matching a query.
    Search {
        query: String,

        /// Maximum number of results.
        #[arg(long)]
        results: Option<u8>,

        /// Print the results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Decode a saved XML payload without going to the network.
    Decode {
        file: PathBuf,

        /// The payload came from the search endpoint.
        #[arg(long)]
        search: bool,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show {
                location,
                days,
                frequency,
                date,
                lang,
                no_current,
                no_forecast,
                json,
            } => {
                let config = Config::load()?;
                let mut request = config.weather_request(location)?;
                if let Some(days) = days {
                    request = request.with_num_of_days(days);
                }
                if let Some(hours) = frequency {
                    request = request.with_frequency(Frequency::try_from(hours)?);
                }
                if let Some(date) = date {
                    request = request.with_date(date);
                }
                if let Some(lang) = lang {
                    request = request.with_language(lang);
                }
                request = request
                    .with_current(!no_current)
                    .with_forecast(!no_forecast);
                tracing::debug!(?request, "resolved weather request");

                let provider = provider_from_config(&config)?;
                let result = provider.weather(&request).await?;

                if json {
                    print_json(&result)?;
                } else if let Report::Success(data) = &result.report {
                    output::print_weather(data);
                    output::print_rate_limit(&result.rate_limit);
                }
                finish(result.report)
            }
            Command::Search {
                query,
                results,
                json,
            } => {
                let config = Config::load()?;
                let mut request = SearchRequest::new(query)?;
                if let Some(results) = results {
                    request = request.with_num_of_results(results);
                }
                tracing::debug!(?request, "resolved search request");

                let provider = provider_from_config(&config)?;
                let result = provider.search(&request).await?;

                if json {
                    print_json(&result)?;
                } else if let Report::Success(found) = &result.report {
                    output::print_search(found);
                    output::print_rate_limit(&result.rate_limit);
                }
                finish(result.report)
            }
            Command::Decode { file, search, json } => {
                tracing::debug!(file = %file.display(), search, "decoding saved payload");
                let reader = BufReader::new(
                    File::open(&file)
                        .with_context(|| format!("Failed to open {}", file.display()))?,
                );

                if search {
                    let decoded = decode_search(reader)
                        .with_context(|| format!("Failed to decode {}", file.display()))?;
                    if json {
                        print_json(&decoded)?;
                    } else if let Report::Success(found) = &decoded.report {
                        output::print_search(found);
                        output::print_skipped(&decoded.skipped);
                    }
                    finish(decoded.report)
                } else {
                    let decoded = decode_weather(reader)
                        .with_context(|| format!("Failed to decode {}", file.display()))?;
                    if json {
                        print_json(&decoded)?;
                    } else if let Report::Success(data) = &decoded.report {
                        output::print_weather(data);
                        output::print_skipped(&decoded.skipped);
                    }
                    finish(decoded.report)
                }
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("World Weather Online API key:")
        .without_confirmation()
        .with_help_message("Leave empty to keep the current key")
        .prompt()?;
    if !api_key.trim().is_empty() {
        config.set_api_key(api_key.trim().to_string());
    } else if config.api_key().is_err() {
        bail!("An API key is required.");
    }

    config.defaults.num_of_days = CustomType::<u8>::new("Forecast days:")
        .with_default(config.defaults.num_of_days)
        .with_error_message("Please enter a whole number of days")
        .prompt()?;

    let frequencies = Frequency::all().to_vec();
    let current = frequencies
        .iter()
        .position(|f| *f == config.defaults.frequency)
        .unwrap_or(0);
    config.defaults.frequency = Select::new("Time between forecast samples:", frequencies)
        .with_starting_cursor(current)
        .prompt()?;

    let language = Text::new("Language code (empty for English):")
        .with_default(config.defaults.language.as_deref().unwrap_or(""))
        .prompt()?;
    config.defaults.language = Some(language.trim().to_string()).filter(|l| !l.is_empty());

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report to JSON")?;
    println!("{json}");
    Ok(())
}

/// Exit with an error if the provider reported one.
fn finish<T>(report: Report<T>) -> anyhow::Result<()> {
    report
        .into_result()
        .context("World Weather Online returned an error")?;
    Ok(())
}
