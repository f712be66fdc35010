//! Error types for BookTrack GUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// The books endpoint answered with a non-success status.
    ///
    /// The status is kept for logs only; the displayed text is fixed.
    #[snafu(display("Failed to fetch books"))]
    HttpStatus { status: u16 },

    /// The request never completed (DNS, connect, TLS, reset, ...)
    #[snafu(display("{source}"))]
    Transport { source: reqwest::Error },

    /// Response body was not a JSON array of books
    #[snafu(display("{source}"))]
    Decode { source: serde_json::Error },

    /// IO error (config file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
