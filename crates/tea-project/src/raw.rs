//! Raw job payload as submitted by the orchestration layer
//!
//! These types mirror the wire format: flat record lists with explicit
//! foreign keys, exactly as the upstream service exports them. Unknown
//! fields are ignored during deserialization; absent fields are an
//! error, including fields that are nullable but must be present.
//!
//! Nothing here is part of the public output surface. The payload exists
//! to be consumed by [`crate::Normalizer`].

use crate::ids::{BlockId, ChoiceId, DriverId, OptionId, PriorId};
use crate::model::Archetype;
use serde::Deserialize;

/// Top-level job submission envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobPayload {
    /// Upstream job identifier
    pub engine_job_id: i64,
    /// Engine mode requested by the caller
    pub engine_type: String,
    /// Algorithm requested by the caller
    pub algorithm: String,
    /// The project configuration to evaluate
    pub project: ProjectPayload,
}

/// Project configuration as flat record lists
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectPayload {
    /// Country the project is sited in
    pub country: String,
    /// Region within the country
    pub region: String,
    /// Upstream project identifier
    pub pk: i64,
    /// Project display name
    pub name: String,
    /// Archetypes the project is evaluated against
    pub archetypes: Vec<Archetype>,
    /// Unit conversion records, uncategorized
    pub conversions: Vec<RawConversion>,
    /// Driver records
    pub drivers: Vec<RawDriver>,
    /// Parameter records across all archetypes and categories
    pub parameters: Vec<RawParameter>,
    /// Block records
    pub blocks: Vec<RawBlock>,
    /// Directed edges between blocks
    pub connections: Vec<RawConnection>,
    /// Constraints over option combinations
    pub option_constraints: Vec<RawOptionConstraint>,
}

/// Unit conversion record with its category tag
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawConversion {
    /// Category the rule belongs to
    pub category: String,
    /// Source magnitude
    pub from_value: f64,
    /// Source unit label
    pub from_unit: String,
    /// Target magnitude
    pub to_value: f64,
    /// Target unit label
    pub to_unit: String,
}

/// Named value record shared by options, blocks and drivers
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawProperty {
    /// Property name
    pub name: String,
    /// Property value, untyped at this layer
    pub value: serde_json::Value,
    /// SI unit label; must be present, may be null
    #[serde(deserialize_with = "Option::deserialize")]
    pub si_unit: Option<String>,
}

/// Driver record with its flat property list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDriver {
    /// Driver identifier
    pub id: DriverId,
    /// Driver name, unique within a payload
    pub name: String,
    /// Whether the driver acts as an objective
    pub objective: bool,
    /// Whether the driver acts as a reported metric
    pub metric: bool,
    /// Driver properties
    pub properties: Vec<RawProperty>,
}

/// Project-level parameter record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawParameter {
    /// Parameter name
    pub name: String,
    /// Parameter value, untyped at this layer
    pub value: serde_json::Value,
    /// SI unit label; must be present, may be null
    #[serde(deserialize_with = "Option::deserialize")]
    pub si_unit: Option<String>,
    /// Owning archetype; null or empty means the shared default bucket
    #[serde(deserialize_with = "Option::deserialize")]
    pub archetype: Option<String>,
    /// Owning category
    pub category: String,
}

/// Block record with nested choices and priors
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBlock {
    /// Block identifier
    pub uuid: BlockId,
    /// Block display name
    pub name: String,
    /// Decision points of the block
    pub choices: Vec<RawChoice>,
    /// Block-level parameters
    pub parameters: Vec<RawProperty>,
    /// Prior belief records
    pub priors: Vec<RawPrior>,
}

/// Choice record with its option list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawChoice {
    /// Choice identifier
    pub id: ChoiceId,
    /// Choice display name
    pub name: String,
    /// Selectable options
    pub options: Vec<RawOption>,
}

/// Option record with flat properties and tags
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawOption {
    /// Option identifier
    pub id: OptionId,
    /// Option display name
    pub name: String,
    /// Option properties
    pub properties: Vec<RawProperty>,
    /// Tags attached to the option
    pub tags: Vec<RawTag>,
}

/// Tag record naming its grouping category
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTag {
    /// Tag name
    pub name: String,
    /// Tag category the name is grouped under
    pub group: String,
}

/// Directed edge between two blocks
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawConnection {
    /// Kind of flow carried by the edge
    pub connection_type: String,
    /// Block authoring the edge
    pub from_block_uuid: BlockId,
    /// Block the edge is addressed to
    pub to_block_uuid: BlockId,
}

/// Prior record referencing its driver by id
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPrior {
    /// Prior identifier
    pub id: PriorId,
    /// Aggregation mode
    pub aggregation: String,
    /// Referenced driver
    pub driver: DriverId,
    /// Prior properties in arbitrary order
    pub properties: Vec<RawPriorProperty>,
}

/// Prior property record before backreference stamping
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPriorProperty {
    /// Position in the prior's ordering
    pub sequence: i64,
    /// Referenced property name
    pub property: String,
    /// Relative weight of the property
    pub weight: f64,
}

/// Raw constraint over a set of option references
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawOptionConstraint {
    /// Constraint kind
    #[serde(rename = "type")]
    pub kind: String,
    /// Constrained option references
    pub options: Vec<RawOptionRef>,
}

/// Single option reference inside a constraint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawOptionRef {
    /// Referenced option id
    pub option: OptionId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_parses_minimal_project() {
        let payload: JobPayload = serde_json::from_value(json!({
            "engine_job_id": 7,
            "engine_type": "evaluation",
            "algorithm": "exhaustive",
            "project": {
                "country": "Netherlands",
                "region": "North Sea",
                "pk": 12,
                "name": "Demo",
                "archetypes": ["OWF"],
                "conversions": [],
                "drivers": [],
                "parameters": [],
                "blocks": [],
                "connections": [],
                "option_constraints": []
            }
        }))
        .unwrap();

        assert_eq!(payload.engine_job_id, 7);
        assert_eq!(payload.project.pk, 12);
        assert_eq!(payload.project.archetypes, vec![Archetype::OffshoreWind]);
    }

    #[test]
    fn payload_ignores_unknown_fields() {
        let payload: JobPayload = serde_json::from_value(json!({
            "engine_job_id": 7,
            "engine_type": "evaluation",
            "algorithm": "exhaustive",
            "submitted_by": "someone",
            "project": {
                "country": "Netherlands",
                "region": "North Sea",
                "pk": 12,
                "name": "Demo",
                "archetypes": [],
                "conversions": [],
                "drivers": [],
                "parameters": [],
                "blocks": [],
                "connections": [],
                "option_constraints": [],
                "position": {"x": 1, "y": 2}
            }
        }))
        .unwrap();

        assert_eq!(payload.project.name, "Demo");
    }

    #[test]
    fn payload_rejects_missing_field() {
        let result = serde_json::from_value::<JobPayload>(json!({
            "engine_job_id": 7,
            "engine_type": "evaluation",
            "project": {}
        }));

        assert!(result.is_err());
    }

    #[test]
    fn property_requires_si_unit_key() {
        let missing = serde_json::from_value::<RawProperty>(json!({
            "name": "ratedpower",
            "value": 15
        }));
        assert!(missing.is_err());

        let null: RawProperty = serde_json::from_value(json!({
            "name": "ratedpower",
            "value": 15,
            "si_unit": null
        }))
        .unwrap();
        assert_eq!(null.si_unit, None);
    }

    #[test]
    fn connection_parses_both_endpoints() {
        let connection: RawConnection = serde_json::from_value(json!({
            "connection_type": "power",
            "from_block_uuid": "44d5d149-ae06-4749-b308-a90c801a11ec",
            "to_block_uuid": "8f5dd5e6-9a73-4eac-843f-f0f856f1e79e"
        }))
        .unwrap();

        assert_eq!(connection.connection_type, "power");
        assert_ne!(connection.from_block_uuid, connection.to_block_uuid);
    }
}
