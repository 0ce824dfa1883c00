//! TEA Evaluation Engine
//!
//! Turns a normalized [`Project`] and a set of selected options into a
//! techno-economic metrics report.
//!
//! # Core Concepts
//!
//! - **Selection**: a user's pick of one option within a choice
//! - **SelectedChoices**: selections resolved per block, properties flattened
//! - **Engineering**: per-archetype sizing of the selected design
//! - **Economics**: discounting and aggregation into a [`MetricsReport`]
//!
//! # Example
//!
//! ```rust,ignore
//! use tea_engine::{evaluate, EngineeringContext, GeneralInputs, Selection};
//! use tea_project::load_job_file;
//!
//! let project = load_job_file("job.json")?;
//! let selections: Vec<Selection> = serde_json::from_str(&selections_json)?;
//! let context: EngineeringContext = serde_json::from_str(&context_json)?;
//!
//! let report = evaluate(&project, &selections, &GeneralInputs::default(), &context)?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod choices;
pub mod economics;
pub mod engineering;
pub mod error;
pub mod inputs;

pub use choices::{SelectedChoices, SelectedOption, Selection};
pub use economics::MetricsReport;
pub use engineering::offshore_wind::{
    OffshoreWindBlocks, OffshoreWindContext, SiteConditions, WindData, WindProfile,
};
pub use engineering::{EngineeringContext, EngineeringOutput};
pub use error::EngineError;
pub use inputs::{GeneralInputs, InPhasing};

use tea_project::Project;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Evaluates a project design end to end.
///
/// Resolves the selections, runs every archetype engineering model the
/// context covers, and aggregates the outputs into a metrics report.
///
/// # Errors
///
/// Fails when a selection does not resolve, an engineering model cannot
/// size the design, or no project archetype has an engineering model.
pub fn evaluate(
    project: &Project,
    selections: &[Selection],
    inputs: &GeneralInputs,
    context: &EngineeringContext,
) -> Result<MetricsReport, EngineError> {
    let selected = SelectedChoices::resolve(project, selections)?;
    let outputs = engineering::run(project, &selected, context)?;
    if outputs.is_empty() {
        return Err(EngineError::unsupported(&project.archetypes));
    }

    let report = economics::calculate(&outputs, inputs);
    tracing::debug!(
        archetypes = outputs.len(),
        lcox = report.lcox,
        trl = report.trl,
        "evaluated project"
    );
    Ok(report)
}
