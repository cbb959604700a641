//! Terminal table output.

use chrono::{DateTime, TimeZone};
use comfy_table::{Cell, CellAlignment, Table, presets::ASCII_FULL};
use std::fmt::Display;
use wa_core::{CurrentWeather, glyph};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Build the one-row current weather table.
///
/// Header cells are centered and temperatures right-aligned.
pub fn current_weather_table<Tz>(now: &DateTime<Tz>, weather: &CurrentWeather) -> Table
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let summary = match weather.primary_condition() {
        Some(cond) => format!("{} - {}", glyph(&cond.icon), cond.description),
        None => " - ".to_string(),
    };

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(
            [
                weather.name.as_str(),
                "Current Temp",
                "Max Temp",
                "Min Temp",
                "Weather",
            ]
            .map(|title| Cell::new(title).set_alignment(CellAlignment::Center)),
        )
        .add_row(vec![
            Cell::new(now.format(TIMESTAMP_FORMAT)),
            temperature(weather.main.temp),
            temperature(weather.main.temp_max),
            temperature(weather.main.temp_min),
            Cell::new(summary),
        ]);

    table
}

fn temperature(celsius: f64) -> Cell {
    Cell::new(celsius).set_alignment(CellAlignment::Right)
}
