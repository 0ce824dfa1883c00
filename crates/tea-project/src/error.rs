//! Error types for payload loading and normalization

use crate::ids::{BlockId, DriverId, PriorId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while normalizing a raw payload into a [`crate::Project`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Two records claimed the same key while duplicate rejection was on
    #[error("duplicate {container} key {key}")]
    DuplicateKey {
        /// Which keyed collection the clash happened in
        container: &'static str,
        /// The contested key
        key: String,
    },

    /// A prior referenced a driver id that the payload does not define
    #[error("prior {prior} on block {block} references unknown driver {driver}")]
    UnknownDriver {
        /// The prior holding the dangling reference
        prior: PriorId,
        /// The block the prior is attached to
        block: BlockId,
        /// The driver id that could not be resolved
        driver: DriverId,
    },

    /// The mandatory currency parameter was absent
    #[error("currency parameter missing at {path}")]
    MissingCurrency {
        /// Path the parameter was expected at
        path: String,
    },

    /// The currency parameter carried a non-string value
    #[error("currency parameter at {path} must be a string, found {found}")]
    InvalidCurrency {
        /// Path the parameter was found at
        path: String,
        /// JSON type of the offending value
        found: &'static str,
    },
}

/// Errors produced while reading and parsing a job file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read job file {path}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid job payload
    #[error("invalid job payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload parsed but could not be normalized
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
