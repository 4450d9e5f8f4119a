//! Error types for the core crate.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures the core can report.
///
/// Content reads and UI toggles cannot fail; only configuration parsing
/// and form submission have an error path.
#[derive(Debug, Error)]
pub enum Error {
    /// The site configuration TOML could not be parsed.
    #[error("invalid site configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration value parsed but is outside its allowed range.
    #[error("invalid value for `{key}`: {reason}")]
    ConfigValue {
        /// Dotted key of the offending setting.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A form payload was handed to a submitter and it failed.
    #[error(transparent)]
    Submit(#[from] crate::forms::SubmitError),
}
