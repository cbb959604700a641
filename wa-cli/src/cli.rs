use anyhow::Context;
use chrono::Local;
use clap::Parser;
use std::{io, process::ExitCode};
use tracing::{debug, info, warn};
use wa_core::{FetchError, KeyStore, WeatherSource};

use crate::table::current_weather_table;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wa", version, about = "Current weather from OpenWeatherMap")]
pub struct Cli {
    /// Weather for the city
    pub city: Option<String>,

    /// The apikey for OpenWeatherMap
    #[arg(long)]
    pub api_key: Option<String>,

    /// Shows the current weather
    #[arg(short, long)]
    pub current: bool,

    /// Saves the api key
    #[arg(long)]
    pub save: bool,
}

/// How a run ended, short of an unrecoverable error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

impl Cli {
    fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Execute the invocation.
    ///
    /// `store` is `None` when the home directory could not be resolved.
    /// User-facing messages go to `out`; transport failures are returned as errors.
    pub async fn run(
        &self,
        store: Option<&KeyStore>,
        source: &dyn WeatherSource,
        out: &mut impl io::Write,
    ) -> anyhow::Result<Outcome> {
        // --save without a key falls through to the query path
        if let (true, Some(key)) = (self.save, self.api_key()) {
            let saved = match store {
                Some(store) => store.save(key),
                None => Err(wa_core::StoreError::NoHomeDir),
            };
            return match saved {
                Ok(()) => Ok(Outcome::Success),
                Err(err) => {
                    warn!(error = %err, "saving api key failed");
                    say(out, "Couldn't save api-key")
                }
            };
        }

        let Some(city) = self.city() else {
            return say(out, "Please enter a City");
        };

        let api_key = match self.api_key() {
            Some(key) => key.to_owned(),
            None => match store.map(KeyStore::load) {
                Some(Ok(key)) => key,
                Some(Err(err)) => {
                    debug!(error = %err, "no stored api key");
                    return say(out, "Use an api-key!");
                }
                None => return say(out, "Use an api-key!"),
            },
        };

        if !self.current {
            debug!("--current not given, nothing to show");
            return Ok(Outcome::Success);
        }

        let weather = match source.fetch_current(city, &api_key).await {
            Ok(weather) => weather,
            Err(FetchError::CityNotFound) => {
                info!(city, "city not found");
                return say(out, "City not found");
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to fetch current weather for {city}"));
            }
        };

        let table = current_weather_table(&Local::now(), &weather);
        writeln!(out, "{table}").context("Failed to write weather table")?;

        Ok(Outcome::Success)
    }
}

fn say(out: &mut impl io::Write, message: &str) -> anyhow::Result<Outcome> {
    writeln!(out, "{message}").context("Failed to write to stdout")?;
    Ok(Outcome::Failure)
}
