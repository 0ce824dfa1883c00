//! TEA Project Model
//!
//! Normalization of raw techno-economic job payloads into a strongly-typed,
//! keyed project graph, plus schema introspection over the normalized model.
//!
//! # Core Concepts
//!
//! - [`JobPayload`]: the raw submission, flat record lists with foreign keys
//! - [`Normalizer`]: the pipeline turning a payload into a [`Project`]
//! - [`Project`]: the normalized graph, every collection keyed and ordered
//! - [`DuplicateKeyPolicy`]: what happens when two records claim one key
//! - [`Project::schema_template`]: compact human-readable model skeleton
//!
//! # Example
//!
//! ```rust,ignore
//! use tea_project::{load_job_file, Project};
//!
//! // Load, parse and normalize in one step
//! let project = load_job_file("job.json")?;
//!
//! // Address anything by key
//! let block = project.block(&block_id).unwrap();
//! let prior = &block.priors["LCOE"];
//!
//! // Or print the model shape
//! println!("{}", serde_json::to_string_pretty(&Project::schema_template()?)?);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod group;
pub mod ids;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod raw;

// Re-exports
pub use error::{LoadError, NormalizeError};
pub use group::{group_by, DuplicateKeyPolicy};
pub use ids::{BlockId, ChoiceId, DriverId, OptionId, PriorId};
pub use loader::{load_job_file, parse_job};
pub use model::{
    Archetype, Block, Choice, ChoiceOption, Connection, ConversionCategory, ConversionRule,
    Driver, OptionConstraint, ParameterArchetype, ParameterCategory, Prior, PriorProperty,
    Project, Property, DEFAULT_ARCHETYPE,
};
pub use normalize::{NormalizeOptions, Normalizer};
pub use raw::JobPayload;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
