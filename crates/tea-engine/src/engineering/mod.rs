//! Per-archetype engineering dispatch
//!
//! Each archetype with an engineering model turns the selected options and
//! its context into one [`EngineeringOutput`]. Archetypes without a model
//! are skipped; whether that leaves anything to evaluate is decided by the
//! caller.

use indexmap::IndexMap;
use serde::Deserialize;
use tea_project::{Archetype, Project};

use crate::choices::SelectedChoices;
use crate::error::EngineError;

pub mod offshore_wind;

use offshore_wind::OffshoreWindContext;

/// Design outputs of one archetype, consumed by the economics calculator
#[derive(Debug, Clone, PartialEq)]
pub struct EngineeringOutput {
    /// Total system footprint
    pub layout: f64,
    /// Capital expenditure before discounting
    pub capex: f64,
    /// Yearly operational expenditure before discounting
    pub opex: f64,
    /// Technology readiness level of the selected design
    pub trl: f64,
    /// Stack replacement cost, zero for archetypes without stacks
    pub stack_replacement_cost: f64,
    /// Stack replacement interval, zero for archetypes without stacks
    pub stack_replacement_time: f64,
    /// Yearly energy production
    pub production: f64,
}

/// Caller-supplied context for every archetype that needs one
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EngineeringContext {
    /// Offshore wind block roles, site conditions and wind data
    pub offshore_wind: Option<OffshoreWindContext>,
}

/// Runs the engineering model of every project archetype that has one.
///
/// # Errors
///
/// Returns [`EngineError::MissingContext`] when a modeled archetype is
/// listed without its context, or any error its model raises.
pub fn run(
    project: &Project,
    selected: &SelectedChoices,
    context: &EngineeringContext,
) -> Result<IndexMap<Archetype, EngineeringOutput>, EngineError> {
    let mut outputs = IndexMap::new();

    for archetype in &project.archetypes {
        match archetype {
            Archetype::OffshoreWind => {
                let context =
                    context
                        .offshore_wind
                        .as_ref()
                        .ok_or(EngineError::MissingContext {
                            archetype: Archetype::OffshoreWind,
                        })?;
                let output = offshore_wind::evaluate(project, selected, context)?;
                outputs.insert(Archetype::OffshoreWind, output);
            }
            other => {
                tracing::debug!(archetype = %other, "no engineering model, skipping");
            }
        }
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tea_test_utils::wind_project;

    #[test]
    fn modeled_archetype_without_context_is_fatal() {
        let project = wind_project();
        let selected = SelectedChoices::default();

        let err = run(&project, &selected, &EngineeringContext::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingContext {
                archetype: Archetype::OffshoreWind
            }
        );
    }

    #[test]
    fn unmodeled_archetypes_produce_no_output() {
        let mut project = wind_project();
        project.archetypes = vec![Archetype::Solar, Archetype::Ammonia];

        let outputs = run(&project, &SelectedChoices::default(), &EngineeringContext::default())
            .unwrap();
        assert!(outputs.is_empty());
    }

    #[test]
    fn context_deserializes_without_any_archetype() {
        let context: EngineeringContext = serde_json::from_str("{}").unwrap();

        assert!(context.offshore_wind.is_none());
    }
}
