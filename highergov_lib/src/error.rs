//! Error types for the library layer.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors produced by the library layer.
///
/// A missing required filter is not an error: operations report it inside
/// the returned envelope. Only configuration problems and upstream failures
/// end up here.
#[derive(Error, Debug)]
pub enum HigherGovError {
    /// An error from the underlying API client (HTTP status, network, timeout, parse).
    #[error("API error: {0}")]
    Api(#[from] highergov_api::Error),
    /// The process configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
