//! Error types for the webpage-to-deck pipeline.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a pipeline run.
///
/// Each variant identifies the stage that failed; every failure is fatal to
/// the run. A `Slide` failure after some slides were already appended leaves
/// a partially populated presentation behind in the external service.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The scraping service request failed or returned an unusable result.
    #[error("Scrape failed: {0}")]
    Scrape(String),

    /// Authentication against the presentation service failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Creating the presentation resource failed.
    #[error("Failed to create presentation: {0}")]
    Create(String),

    /// Appending a slide failed. `order` is the 1-based slide position.
    #[error("Failed to add slide {order}: {message}")]
    Slide { order: usize, message: String },

    /// Generating the shareable link failed.
    #[error("Failed to share presentation: {0}")]
    Share(String),

    /// Local file I/O failed (debug sink).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
