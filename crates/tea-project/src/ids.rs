//! Identifier newtypes for project graph entities
//!
//! Blocks are addressed by UUID; choices, options, drivers and priors carry
//! numeric identifiers assigned upstream. Wrapping them keeps the graph
//! assembly honest about which kind of id goes where.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique block identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct BlockId(pub Uuid);

impl BlockId {
    /// Wrap an existing UUID
    #[inline]
    #[must_use]
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of a choice attached to a block
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct ChoiceId(pub i64);

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a selectable option within a choice
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct OptionId(pub i64);

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an optimization driver
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct DriverId(pub i64);

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a prior belief record
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct PriorId(pub i64);

impl fmt::Display for PriorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_id_parses_and_displays() {
        let id: BlockId = "44d5d149-ae06-4749-b308-a90c801a11ec".parse().unwrap();
        assert_eq!(id.to_string(), "44d5d149-ae06-4749-b308-a90c801a11ec");
    }

    #[test]
    fn block_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<BlockId>().is_err());
    }

    #[test]
    fn numeric_ids_serialize_as_integers() {
        let json = serde_json::to_value(ChoiceId(42)).unwrap();
        assert_eq!(json, serde_json::json!(42));
    }

    #[test]
    fn block_id_serializes_as_string() {
        let id: BlockId = "44d5d149-ae06-4749-b308-a90c801a11ec".parse().unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("44d5d149-ae06-4749-b308-a90c801a11ec"));
    }
}
