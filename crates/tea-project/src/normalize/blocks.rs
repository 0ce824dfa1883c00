//! Block graph assembly
//!
//! The densest normalization stage: nests choices, options, properties
//! and tags under each block, resolves prior driver references against
//! the payload's driver records, and attaches per-block connection
//! endpoint lists derived from the flat edge list.

use crate::error::NormalizeError;
use crate::group::{group_by, insert_keyed, DuplicateKeyPolicy};
use crate::ids::{BlockId, ChoiceId, DriverId};
use crate::model::{Block, Choice, ChoiceOption, Connection, Prior, PriorProperty, Property};
use crate::raw::{RawBlock, RawChoice, RawConnection, RawDriver, RawOption, RawPrior};
use indexmap::IndexMap;

/// Assemble the block map from block, connection and driver records
///
/// # Errors
/// Returns [`NormalizeError::UnknownDriver`] when a prior references a
/// driver id the payload does not define, and
/// [`NormalizeError::DuplicateKey`] for key clashes under
/// [`DuplicateKeyPolicy::Reject`].
pub(crate) fn build(
    raw_blocks: Vec<RawBlock>,
    connections: &[RawConnection],
    drivers: &[RawDriver],
    policy: DuplicateKeyPolicy,
) -> Result<IndexMap<BlockId, Block>, NormalizeError> {
    let authored = edge_index(connections, |edge| edge.from_block_uuid, |edge| edge.to_block_uuid);
    let addressed = edge_index(connections, |edge| edge.to_block_uuid, |edge| edge.from_block_uuid);
    let driver_names: IndexMap<DriverId, &str> = drivers
        .iter()
        .map(|driver| (driver.id, driver.name.as_str()))
        .collect();

    let mut blocks = IndexMap::new();
    for raw in raw_blocks {
        let block = assemble(raw, &authored, &addressed, &driver_names, policy)?;
        insert_keyed(&mut blocks, "blocks", block.uuid, block, policy)?;
    }
    Ok(blocks)
}

/// Index edges under one endpoint, listing the opposite endpoint
///
/// Edges are sorted by the key endpoint before grouping so the index is
/// independent of connection order in the payload; edges sharing an
/// endpoint keep payload order.
fn edge_index(
    connections: &[RawConnection],
    key: impl Fn(&RawConnection) -> BlockId,
    peer: impl Fn(&RawConnection) -> BlockId,
) -> IndexMap<BlockId, Vec<Connection>> {
    let mut edges: Vec<&RawConnection> = connections.iter().collect();
    edges.sort_by_key(|edge| key(edge));

    group_by(edges, |edge| key(edge))
        .into_iter()
        .map(|(uuid, group)| {
            let endpoints = group
                .into_iter()
                .map(|edge| Connection {
                    connection_type: edge.connection_type.clone(),
                    block_uuid: peer(edge),
                })
                .collect();
            (uuid, endpoints)
        })
        .collect()
}

fn assemble(
    raw: RawBlock,
    authored: &IndexMap<BlockId, Vec<Connection>>,
    addressed: &IndexMap<BlockId, Vec<Connection>>,
    driver_names: &IndexMap<DriverId, &str>,
    policy: DuplicateKeyPolicy,
) -> Result<Block, NormalizeError> {
    let uuid = raw.uuid;

    let mut choices = IndexMap::new();
    for choice in raw.choices {
        let choice = assemble_choice(choice, uuid, policy)?;
        insert_keyed(&mut choices, "choices", choice.id, choice, policy)?;
    }

    let mut parameters = IndexMap::new();
    for parameter in raw.parameters {
        insert_keyed(
            &mut parameters,
            "block parameters",
            parameter.name.clone(),
            Property::from(parameter),
            policy,
        )?;
    }

    let mut priors = IndexMap::new();
    for prior in raw.priors {
        let prior = resolve_prior(prior, uuid, driver_names)?;
        insert_keyed(&mut priors, "priors", prior.driver_name.clone(), prior, policy)?;
    }

    // Endpoint naming follows the upstream wire contract: edges this
    // block authors land in input_connections, edges addressed to it in
    // output_connections.
    Ok(Block {
        uuid,
        name: raw.name,
        choices,
        parameters,
        input_connections: authored.get(&uuid).cloned().unwrap_or_default(),
        output_connections: addressed.get(&uuid).cloned().unwrap_or_default(),
        priors,
    })
}

fn assemble_choice(
    raw: RawChoice,
    block_uuid: BlockId,
    policy: DuplicateKeyPolicy,
) -> Result<Choice, NormalizeError> {
    let mut options = IndexMap::new();
    for option in raw.options {
        let option = assemble_option(option, raw.id, block_uuid, policy)?;
        insert_keyed(&mut options, "options", option.id, option, policy)?;
    }

    Ok(Choice {
        id: raw.id,
        name: raw.name,
        block_uuid,
        options,
    })
}

fn assemble_option(
    raw: RawOption,
    choice_id: ChoiceId,
    block_uuid: BlockId,
    policy: DuplicateKeyPolicy,
) -> Result<ChoiceOption, NormalizeError> {
    let mut properties = IndexMap::new();
    for property in raw.properties {
        insert_keyed(
            &mut properties,
            "option properties",
            property.name.clone(),
            Property::from(property),
            policy,
        )?;
    }

    let mut tags = raw.tags;
    tags.sort_by(|a, b| a.group.cmp(&b.group));
    let tags = group_by(tags, |tag| tag.group.clone())
        .into_iter()
        .map(|(category, group)| {
            let names = group.into_iter().map(|tag| tag.name).collect();
            (category, names)
        })
        .collect();

    Ok(ChoiceOption {
        id: raw.id,
        name: raw.name,
        choice_id,
        block_uuid,
        properties,
        tags,
    })
}

fn resolve_prior(
    raw: RawPrior,
    block_uuid: BlockId,
    driver_names: &IndexMap<DriverId, &str>,
) -> Result<Prior, NormalizeError> {
    let driver_name = driver_names
        .get(&raw.driver)
        .map(|name| (*name).to_string())
        .ok_or(NormalizeError::UnknownDriver {
            prior: raw.id,
            block: block_uuid,
            driver: raw.driver,
        })?;

    let mut properties: Vec<PriorProperty> = raw
        .properties
        .into_iter()
        .map(|property| PriorProperty {
            block_uuid,
            prior_id: raw.id,
            sequence: property.sequence,
            property: property.property,
            weight: property.weight,
        })
        .collect();
    properties.sort_by_key(|property| property.sequence);

    Ok(Prior {
        id: raw.id,
        block_uuid,
        aggregation: raw.aggregation,
        driver_id: raw.driver,
        driver_name,
        properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{OptionId, PriorId};
    use crate::raw::{RawPriorProperty, RawProperty, RawTag};
    use serde_json::json;

    const WTG: &str = "44d5d149-ae06-4749-b308-a90c801a11ec";
    const SUBSTATION: &str = "8f5dd5e6-9a73-4eac-843f-f0f856f1e79e";
    const EXPORT_CABLE: &str = "bf837696-47ee-45dd-ac14-cbf001dd76cf";

    fn block_id(s: &str) -> BlockId {
        s.parse().unwrap()
    }

    fn bare_block(uuid: &str, name: &str) -> RawBlock {
        RawBlock {
            uuid: block_id(uuid),
            name: name.to_string(),
            choices: vec![],
            parameters: vec![],
            priors: vec![],
        }
    }

    fn edge(from: &str, to: &str, connection_type: &str) -> RawConnection {
        RawConnection {
            connection_type: connection_type.to_string(),
            from_block_uuid: block_id(from),
            to_block_uuid: block_id(to),
        }
    }

    fn driver(id: i64, name: &str) -> RawDriver {
        RawDriver {
            id: DriverId(id),
            name: name.to_string(),
            objective: false,
            metric: true,
            properties: vec![],
        }
    }

    #[test]
    fn authored_edges_land_in_input_connections() {
        let blocks = vec![bare_block(WTG, "WTG"), bare_block(SUBSTATION, "Substation")];
        let connections = vec![edge(WTG, SUBSTATION, "power")];

        let graph = build(blocks, &connections, &[], DuplicateKeyPolicy::Overwrite).unwrap();

        let wtg = &graph[&block_id(WTG)];
        assert_eq!(wtg.input_connections.len(), 1);
        assert_eq!(wtg.input_connections[0].connection_type, "power");
        assert_eq!(wtg.input_connections[0].block_uuid, block_id(SUBSTATION));
        assert!(wtg.output_connections.is_empty());
    }

    #[test]
    fn addressed_edges_land_in_output_connections() {
        let blocks = vec![bare_block(WTG, "WTG"), bare_block(SUBSTATION, "Substation")];
        let connections = vec![edge(WTG, SUBSTATION, "power")];

        let graph = build(blocks, &connections, &[], DuplicateKeyPolicy::Overwrite).unwrap();

        let substation = &graph[&block_id(SUBSTATION)];
        assert!(substation.input_connections.is_empty());
        assert_eq!(substation.output_connections.len(), 1);
        assert_eq!(substation.output_connections[0].block_uuid, block_id(WTG));
    }

    #[test]
    fn isolated_block_gets_empty_endpoint_lists() {
        let blocks = vec![bare_block(EXPORT_CABLE, "Export cable")];
        let connections = vec![edge(WTG, SUBSTATION, "power")];

        let graph = build(blocks, &connections, &[], DuplicateKeyPolicy::Overwrite).unwrap();

        let cable = &graph[&block_id(EXPORT_CABLE)];
        assert!(cable.input_connections.is_empty());
        assert!(cable.output_connections.is_empty());
    }

    #[test]
    fn parallel_edges_keep_payload_order() {
        let blocks = vec![bare_block(WTG, "WTG"), bare_block(SUBSTATION, "Substation")];
        let connections = vec![
            edge(WTG, SUBSTATION, "power"),
            edge(WTG, SUBSTATION, "data"),
        ];

        let graph = build(blocks, &connections, &[], DuplicateKeyPolicy::Overwrite).unwrap();

        let kinds: Vec<_> = graph[&block_id(WTG)]
            .input_connections
            .iter()
            .map(|c| c.connection_type.clone())
            .collect();
        assert_eq!(kinds, vec!["power", "data"]);
    }

    #[test]
    fn options_nest_with_backreferences_and_grouped_tags() {
        let mut block = bare_block(WTG, "WTG");
        block.choices = vec![RawChoice {
            id: ChoiceId(11),
            name: "Turbine".to_string(),
            options: vec![RawOption {
                id: OptionId(101),
                name: "15MW direct drive".to_string(),
                properties: vec![RawProperty {
                    name: "ratedpower".to_string(),
                    value: json!(15),
                    si_unit: Some("MW".to_string()),
                }],
                tags: vec![
                    RawTag { name: "floating".to_string(), group: "si".to_string() },
                    RawTag { name: "prototype".to_string(), group: "maturity".to_string() },
                    RawTag { name: "deep-water".to_string(), group: "si".to_string() },
                ],
            }],
        }];

        let graph = build(vec![block], &[], &[], DuplicateKeyPolicy::Overwrite).unwrap();

        let option = &graph[&block_id(WTG)].choices[&ChoiceId(11)].options[&OptionId(101)];
        assert_eq!(option.choice_id, ChoiceId(11));
        assert_eq!(option.block_uuid, block_id(WTG));
        assert_eq!(option.properties["ratedpower"].si_unit.as_deref(), Some("MW"));

        let categories: Vec<_> = option.tags.keys().cloned().collect();
        assert_eq!(categories, vec!["maturity", "si"]);
        assert_eq!(option.tags["si"], vec!["floating", "deep-water"]);
    }

    #[test]
    fn priors_key_by_driver_name_and_sort_properties() {
        let mut block = bare_block(WTG, "WTG");
        block.priors = vec![RawPrior {
            id: PriorId(5),
            aggregation: "weighted_sum".to_string(),
            driver: DriverId(2),
            properties: vec![
                RawPriorProperty { sequence: 3, property: "c".to_string(), weight: 0.2 },
                RawPriorProperty { sequence: 1, property: "a".to_string(), weight: 0.5 },
                RawPriorProperty { sequence: 2, property: "b".to_string(), weight: 0.3 },
            ],
        }];
        let drivers = vec![driver(2, "LCOE")];

        let graph = build(vec![block], &[], &drivers, DuplicateKeyPolicy::Overwrite).unwrap();

        let prior = &graph[&block_id(WTG)].priors["LCOE"];
        assert_eq!(prior.driver_id, DriverId(2));
        assert_eq!(prior.driver_name, "LCOE");

        let ordered: Vec<_> = prior.properties.iter().map(|p| p.property.clone()).collect();
        assert_eq!(ordered, vec!["a", "b", "c"]);
        assert!(prior.properties.iter().all(|p| p.prior_id == PriorId(5)));
        assert!(prior.properties.iter().all(|p| p.block_uuid == block_id(WTG)));
    }

    #[test]
    fn prior_with_undefined_driver_fails() {
        let mut block = bare_block(WTG, "WTG");
        block.priors = vec![RawPrior {
            id: PriorId(5),
            aggregation: "weighted_sum".to_string(),
            driver: DriverId(99),
            properties: vec![],
        }];

        let result = build(vec![block], &[], &[driver(2, "LCOE")], DuplicateKeyPolicy::Overwrite);

        assert_eq!(
            result,
            Err(NormalizeError::UnknownDriver {
                prior: PriorId(5),
                block: block_id(WTG),
                driver: DriverId(99),
            })
        );
    }

    #[test]
    fn duplicate_block_uuid_overwrites_by_default() {
        let blocks = vec![bare_block(WTG, "first"), bare_block(WTG, "second")];

        let graph = build(blocks, &[], &[], DuplicateKeyPolicy::Overwrite).unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph[&block_id(WTG)].name, "second");
    }

    #[test]
    fn duplicate_block_uuid_fails_under_reject() {
        let blocks = vec![bare_block(WTG, "first"), bare_block(WTG, "second")];

        let result = build(blocks, &[], &[], DuplicateKeyPolicy::Reject);

        assert!(matches!(
            result,
            Err(NormalizeError::DuplicateKey { container: "blocks", .. })
        ));
    }
}
