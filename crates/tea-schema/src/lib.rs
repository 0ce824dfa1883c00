//! TEA Schema Templates
//!
//! Renders the JSON schema of a model as a compact, human-readable
//! skeleton. Model crates derive `schemars::JsonSchema`, this crate
//! collapses the resulting schema into the shape users actually read:
//! `[type]` leaves, `<key>` placeholders for dynamic maps and
//! `(comment)` annotations on field names.
//!
//! # Example
//!
//! ```rust,ignore
//! use schemars::schema_for;
//! use tea_schema::schema_template;
//!
//! let template = schema_template(&schema_for!(MyModel))?;
//! println!("{}", serde_json::to_string_pretty(&template)?);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod template;

// Re-exports
pub use error::TemplateError;
pub use template::schema_template;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
