//! Normalized project model
//!
//! The shapes produced by [`crate::Normalizer`]: a fully indexed project
//! graph where every collection that downstream evaluators address by key
//! is an ordered map rather than a flat record list. Map entries carry
//! `key=` descriptions so the schema template can label dynamic keys, and
//! list-of-ids fields carry `comment=` descriptions that surface as
//! annotations next to the field name.
//!
//! Everything here serializes but deliberately does not deserialize; the
//! only way to obtain a [`Project`] is through normalization of a raw
//! payload.

use crate::ids::{BlockId, ChoiceId, DriverId, OptionId, PriorId};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Archetype bucket for parameters that apply to every archetype
pub const DEFAULT_ARCHETYPE: &str = "default";

/// Technology archetypes known to the evaluation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Archetype {
    /// Offshore wind farm
    #[serde(rename = "OWF")]
    OffshoreWind,
    /// Solar photovoltaic plant
    #[serde(rename = "solar")]
    Solar,
    /// Green hydrogen production
    #[serde(rename = "green_hydrogen")]
    GreenHydrogen,
    /// Ammonia synthesis
    #[serde(rename = "ammonia")]
    Ammonia,
    /// Carbon capture facility
    #[serde(rename = "carbon_capture")]
    CarbonCapture,
    /// Transport pipelines
    #[serde(rename = "pipelines")]
    Pipelines,
    /// Blue hydrogen production
    #[serde(rename = "blue_hydrogen")]
    BlueHydrogen,
    /// Carbon liquefaction facility
    #[serde(rename = "carbon_liquefaction")]
    CarbonLiquefaction,
}

impl Archetype {
    /// Wire name as it appears in payloads
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OffshoreWind => "OWF",
            Self::Solar => "solar",
            Self::GreenHydrogen => "green_hydrogen",
            Self::Ammonia => "ammonia",
            Self::CarbonCapture => "carbon_capture",
            Self::Pipelines => "pipelines",
            Self::BlueHydrogen => "blue_hydrogen",
            Self::CarbonLiquefaction => "carbon_liquefaction",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named value with an optional SI unit
///
/// The name is kept inside the record even where the record also sits
/// under a name key, so property values stay self-describing when they
/// are handed to calculators individually.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Property value, untyped at this layer
    pub value: serde_json::Value,
    /// SI unit label, if the property carries one
    pub si_unit: Option<String>,
}

/// Single unit conversion rule
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ConversionRule {
    /// Source magnitude
    pub from_value: f64,
    /// Source unit label
    pub from_unit: String,
    /// Target magnitude
    pub to_value: f64,
    /// Target unit label
    pub to_unit: String,
}

/// Conversion rules sharing one category
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ConversionCategory {
    /// Rules in payload order
    pub conversions: Vec<ConversionRule>,
}

/// Optimization driver with its properties indexed by name
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Driver {
    /// Whether the driver acts as an objective
    pub objective: bool,
    /// Whether the driver acts as a reported metric
    pub metric: bool,
    /// Driver properties
    #[schemars(description = "key=property name")]
    pub properties: IndexMap<String, Property>,
}

/// Parameters grouped under one category
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ParameterCategory {
    /// Parameters of the category
    #[schemars(description = "key=parameter name")]
    pub parameters: IndexMap<String, Property>,
}

/// Parameter categories for one archetype
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ParameterArchetype {
    /// Categories of the archetype
    #[schemars(description = "key=category name")]
    pub categories: IndexMap<String, ParameterCategory>,
}

/// Selectable option within a choice
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ChoiceOption {
    /// Option identifier
    pub id: OptionId,
    /// Option display name
    pub name: String,
    /// Owning choice, stamped during normalization
    pub choice_id: ChoiceId,
    /// Owning block, stamped during normalization
    pub block_uuid: BlockId,
    /// Option properties
    #[schemars(description = "key=property name")]
    pub properties: IndexMap<String, Property>,
    /// Tag names grouped by tag category
    #[schemars(description = "key=tag category")]
    pub tags: IndexMap<String, Vec<String>>,
}

/// Decision point on a block
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Choice {
    /// Choice identifier
    pub id: ChoiceId,
    /// Choice display name
    pub name: String,
    /// Owning block, stamped during normalization
    pub block_uuid: BlockId,
    /// Options of this choice
    #[schemars(description = "key=option id")]
    pub options: IndexMap<OptionId, ChoiceOption>,
}

/// One endpoint of a connection as seen from a block
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Connection {
    /// Kind of flow carried by the edge
    pub connection_type: String,
    /// The block on the other end of the edge
    pub block_uuid: BlockId,
}

/// Prior property with backreferences to its prior and block
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct PriorProperty {
    /// Owning block, stamped during normalization
    pub block_uuid: BlockId,
    /// Owning prior, stamped during normalization
    pub prior_id: PriorId,
    /// Position in the prior's ordering
    pub sequence: i64,
    /// Referenced property name
    pub property: String,
    /// Relative weight of the property
    pub weight: f64,
}

/// Prior belief attached to a block, resolved against its driver
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Prior {
    /// Prior identifier
    pub id: PriorId,
    /// Owning block, stamped during normalization
    pub block_uuid: BlockId,
    /// Aggregation mode
    pub aggregation: String,
    /// Referenced driver id
    pub driver_id: DriverId,
    /// Referenced driver name, resolved during normalization
    pub driver_name: String,
    /// Prior properties ordered by sequence
    pub properties: Vec<PriorProperty>,
}

/// Processing block of the project graph
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Block {
    /// Block identifier
    pub uuid: BlockId,
    /// Block display name
    pub name: String,
    /// Decision points of the block
    #[schemars(description = "key=choice id")]
    pub choices: IndexMap<ChoiceId, Choice>,
    /// Block-level parameters
    #[schemars(description = "key=parameter name")]
    pub parameters: IndexMap<String, Property>,
    /// Edges this block authors, each naming the receiving block
    pub input_connections: Vec<Connection>,
    /// Edges addressed to this block, each naming the sending block
    pub output_connections: Vec<Connection>,
    /// Priors keyed by resolved driver name
    #[schemars(description = "key=driver name")]
    pub priors: IndexMap<String, Prior>,
}

/// Exclusion constraint over a set of options
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct OptionConstraint {
    /// Constraint kind
    #[serde(rename = "type")]
    pub kind: String,
    /// Identifiers of the constrained options
    #[schemars(description = "comment=list of option ids")]
    pub options: Vec<OptionId>,
}

/// Fully normalized project configuration
///
/// Produced by [`crate::Normalizer::normalize`]; field order here is the
/// serialization order of evaluation reports and fixtures downstream.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Project {
    /// Upstream job identifier
    pub engine_job_id: i64,
    /// Engine mode requested by the caller
    pub engine_type: String,
    /// Algorithm requested by the caller
    pub algorithm: String,
    /// Project currency, extracted from the default financial parameters
    pub currency: String,
    /// Country the project is sited in
    pub country: String,
    /// Region within the country
    pub region: String,
    /// Upstream project identifier
    pub project_id: i64,
    /// Project display name
    pub project_name: String,
    /// Archetypes the project is evaluated against
    pub archetypes: Vec<Archetype>,
    /// Unit conversion rules grouped by category
    #[schemars(description = "key=conversion category")]
    pub conversions: IndexMap<String, ConversionCategory>,
    /// Optimization drivers indexed by name
    #[schemars(description = "key=driver name")]
    pub drivers: IndexMap<String, Driver>,
    /// Parameter tree indexed by archetype, then category, then name
    #[schemars(description = "key=archetype name")]
    pub parameters: IndexMap<String, ParameterArchetype>,
    /// Project graph blocks indexed by UUID
    #[schemars(description = "key=block uuid")]
    pub blocks: IndexMap<BlockId, Block>,
    /// Constraints over option combinations, in payload order
    pub option_constraints: Vec<OptionConstraint>,
}

impl Project {
    /// Look up a block by id
    #[inline]
    #[must_use]
    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Find a choice anywhere in the graph by its id
    #[must_use]
    pub fn find_choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.blocks.values().find_map(|block| block.choices.get(&id))
    }

    /// JSON schema of the normalized model
    #[must_use]
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Project)
    }

    /// Human-readable template of the normalized model
    ///
    /// Collapses the JSON schema into a compact skeleton where leaves
    /// become `[type]` markers and dynamic maps become `<key>` entries.
    ///
    /// # Errors
    /// Returns an error if the schema contains an unresolved or cyclic
    /// reference, which would indicate a broken model definition.
    pub fn schema_template() -> Result<serde_json::Value, tea_schema::TemplateError> {
        tea_schema::schema_template(&Self::schema())
    }
}
