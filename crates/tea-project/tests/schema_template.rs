//! Schema template of the normalized project model
//!
//! The template is what operators read to learn the output shape, so its
//! labels and leaf markers are part of the crate's contract.

use pretty_assertions::assert_eq;
use serde_json::json;
use tea_project::Project;

#[test]
fn top_level_scalars_render_as_leaves() {
    let template = Project::schema_template().unwrap();

    assert_eq!(template["engine_job_id"], json!("[integer]"));
    assert_eq!(template["currency"], json!("[string]"));
    assert_eq!(template["project_name"], json!("[string]"));
    assert_eq!(template["archetypes"], json!(["[string]", "..."]));
}

#[test]
fn conversions_render_category_map_with_rule_list() {
    let template = Project::schema_template().unwrap();

    assert_eq!(
        template["conversions"],
        json!({
            "<conversion category>": {
                "conversions": [
                    {
                        "from_unit": "[string]",
                        "from_value": "[number]",
                        "to_unit": "[string]",
                        "to_value": "[number]",
                    },
                    "...",
                ],
            },
        })
    );
}

#[test]
fn drivers_render_nested_property_map() {
    let template = Project::schema_template().unwrap();

    assert_eq!(
        template["drivers"]["<driver name>"]["properties"],
        json!({
            "<property name>": {
                "name": "[string]",
                "si_unit": "[string|null]",
                "value": "[any]",
            },
        })
    );
    assert_eq!(template["drivers"]["<driver name>"]["objective"], json!("[boolean]"));
}

#[test]
fn parameter_tree_renders_three_key_levels() {
    let template = Project::schema_template().unwrap();

    let category = &template["parameters"]["<archetype name>"]["categories"]["<category name>"];
    let parameter = &category["parameters"]["<parameter name>"];
    assert_eq!(parameter["value"], json!("[any]"));
    assert_eq!(parameter["si_unit"], json!("[string|null]"));
}

#[test]
fn block_subtree_renders_every_keyed_level() {
    let template = Project::schema_template().unwrap();
    let block = &template["blocks"]["<block uuid>"];

    assert_eq!(block["uuid"], json!("[string]"));

    let option = &block["choices"]["<choice id>"]["options"]["<option id>"];
    assert_eq!(option["name"], json!("[string]"));
    assert_eq!(option["choice_id"], json!("[integer]"));
    assert_eq!(option["block_uuid"], json!("[string]"));
    assert_eq!(option["tags"], json!({"<tag category>": ["[string]", "..."]}));

    assert_eq!(
        block["input_connections"],
        json!([
            {"block_uuid": "[string]", "connection_type": "[string]"},
            "...",
        ])
    );

    let prior = &block["priors"]["<driver name>"];
    assert_eq!(prior["driver_name"], json!("[string]"));
    assert_eq!(
        prior["properties"],
        json!([
            {
                "block_uuid": "[string]",
                "prior_id": "[integer]",
                "property": "[string]",
                "sequence": "[integer]",
                "weight": "[number]",
            },
            "...",
        ])
    );
}

#[test]
fn constraint_options_carry_comment_annotation() {
    let template = Project::schema_template().unwrap();

    assert_eq!(
        template["option_constraints"],
        json!([
            {
                "options (list of option ids)": ["[integer]", "..."],
                "type": "[string]",
            },
            "...",
        ])
    );
}

#[test]
fn template_is_deterministic() {
    let first = Project::schema_template().unwrap();
    let second = Project::schema_template().unwrap();

    assert_eq!(first, second);
}
