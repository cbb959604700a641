use std::{io, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

/// Failures of the on-disk API key store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not determine the home directory")]
    NoHomeDir,

    /// No key file, or the file exists but holds nothing.
    #[error("No API key stored at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Key file {} is not valid UTF-8", path.display())]
    InvalidKey {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Failed to access key file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures of a current-weather lookup.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered 404 for the requested city.
    #[error("City not found")]
    CityNotFound,

    #[error("Failed to send request to OpenWeather: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read OpenWeather response body: {0}")]
    Body(#[source] reqwest::Error),
}
