//! Job file loading

use crate::error::LoadError;
use crate::model::Project;
use crate::normalize::Normalizer;
use crate::raw::JobPayload;
use std::fs;
use std::path::Path;

/// Parse a job payload from a JSON string
///
/// # Errors
/// Returns [`LoadError::Parse`] when the string is not a valid payload,
/// including when a required field is absent.
pub fn parse_job(json: &str) -> Result<JobPayload, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Read, parse and normalize a job file with default options
///
/// # Errors
/// Returns [`LoadError::Io`] when the file cannot be read,
/// [`LoadError::Parse`] when its content is not a valid payload and
/// [`LoadError::Normalize`] when the payload fails normalization.
pub fn load_job_file(path: impl AsRef<Path>) -> Result<Project, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let payload = parse_job(&content)?;
    tracing::debug!(path = %path.display(), "loaded job payload");
    Ok(Normalizer::new().normalize(payload)?)
}
