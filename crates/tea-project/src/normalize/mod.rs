//! Payload normalization pipeline
//!
//! Turns a [`JobPayload`] into a [`Project`] in five stages:
//!
//! 1. Conversions: grouped by category, categories sorted
//! 2. Parameters: grouped by archetype and category, currency extracted
//! 3. Blocks: graph assembly with connection endpoints and priors
//! 4. Drivers: indexed by name with nested property maps
//! 5. Option constraints: flattened to bare id lists
//!
//! Each stage preserves record order inside groups; only group keys are
//! ever sorted. The pipeline is pure: one payload in, one project out,
//! no partial results on error.

mod blocks;
mod constraints;
mod conversions;
mod drivers;
mod parameters;

use crate::error::NormalizeError;
use crate::group::DuplicateKeyPolicy;
use crate::model::{Project, Property};
use crate::raw::{JobPayload, ProjectPayload, RawParameter, RawProperty};

/// Knobs for the normalization pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Treatment of records that claim an already-used key
    pub duplicate_keys: DuplicateKeyPolicy,
}

/// Transforms raw payloads into normalized projects
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a normalizer with default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer with explicit options
    #[inline]
    #[must_use]
    pub fn with_options(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Normalize a raw payload into a project
    ///
    /// # Errors
    /// Returns an error when a prior references an undefined driver, when
    /// the mandatory currency parameter is missing or not a string, or
    /// when a key collides while [`DuplicateKeyPolicy::Reject`] is set.
    pub fn normalize(&self, payload: JobPayload) -> Result<Project, NormalizeError> {
        let JobPayload {
            engine_job_id,
            engine_type,
            algorithm,
            project,
        } = payload;
        let ProjectPayload {
            country,
            region,
            pk,
            name,
            archetypes,
            conversions,
            drivers,
            parameters,
            blocks,
            connections,
            option_constraints,
        } = project;
        let policy = self.options.duplicate_keys;

        let conversions = conversions::index(conversions);
        let parameters = parameters::build(parameters, policy)?;
        let (currency, parameters) = parameters::extract_currency(parameters)?;
        let blocks = blocks::build(blocks, &connections, &drivers, policy)?;
        let drivers = drivers::index(drivers, policy)?;
        let option_constraints = constraints::flatten(option_constraints);

        tracing::debug!(
            job = engine_job_id,
            blocks = blocks.len(),
            drivers = drivers.len(),
            "normalized project graph"
        );

        Ok(Project {
            engine_job_id,
            engine_type,
            algorithm,
            currency,
            country,
            region,
            project_id: pk,
            project_name: name,
            archetypes,
            conversions,
            drivers,
            parameters,
            blocks,
            option_constraints,
        })
    }
}

impl Project {
    /// Normalize a payload with default options
    ///
    /// # Errors
    /// Same failure modes as [`Normalizer::normalize`].
    pub fn from_payload(payload: JobPayload) -> Result<Self, NormalizeError> {
        Normalizer::new().normalize(payload)
    }
}

impl From<RawProperty> for Property {
    fn from(raw: RawProperty) -> Self {
        Self {
            name: raw.name,
            value: raw.value,
            si_unit: raw.si_unit,
        }
    }
}

// Archetype and category tags are consumed by tree placement.
impl From<RawParameter> for Property {
    fn from(raw: RawParameter) -> Self {
        Self {
            name: raw.name,
            value: raw.value,
            si_unit: raw.si_unit,
        }
    }
}
