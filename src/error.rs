//! Crate-wide error type.

use thiserror::Error;

/// Everything that can go wrong between the parameter form and the exported file.
#[derive(Debug, Error)]
pub enum SimError {
    /// A text field could not be converted to a real number.
    #[error("could not read {field} from {input:?}: expected a real number")]
    Parse { field: &'static str, input: String },

    /// Parsed values violate the time-axis or circuit constraints.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The destination file could not be written.
    #[error("export failed: {0}")]
    Export(#[from] std::io::Error),

    /// Export was requested before any simulation succeeded.
    #[error("no results to export yet, generate the plot first")]
    NoResults,

    /// A configuration or state file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
