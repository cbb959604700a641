//! Core library for the `wa` weather CLI.
//!
//! This crate defines:
//! - API key persistence
//! - The OpenWeather current-weather client and its response model
//! - Icon code to glyph mapping
//!
//! It is used by `wa-cli`, but can also be reused by other binaries.

pub mod client;
pub mod error;
pub mod icon;
pub mod model;
pub mod store;

pub use client::{OpenWeatherClient, WeatherSource, decode_current};
pub use error::{FetchError, StoreError};
pub use icon::glyph;
pub use model::{Condition, CurrentWeather};
pub use store::KeyStore;
