//! Schema template walker
//!
//! Collapses a [`RootSchema`] into a compact JSON skeleton: structs
//! become objects listing every named field, dynamic maps become a
//! single `<key>` entry, arrays become `[item, "..."]` and everything
//! else becomes a `[type]` leaf. Two description conventions drive the
//! labels:
//!
//! - `key=<label>` on a map schema names the dynamic key placeholder
//! - `comment=<text>` on a field schema appends `(text)` to the field name
//!
//! References resolve through the root's definitions; single-member
//! `allOf` wrappers unwrap transparently. Unions render as a pipe-joined
//! leaf without recursing into their members.

use crate::error::TemplateError;
use schemars::schema::{
    InstanceType, ObjectValidation, RootSchema, Schema, SchemaObject, SingleOrVec,
};
use serde_json::{Map, Value};

/// Render the compact template of a schema
///
/// The output is deterministic for a given schema: fields appear in the
/// schema's property order and nothing in the input is mutated.
///
/// # Errors
/// Returns [`TemplateError::UnresolvedReference`] for a `$ref` without a
/// matching definition and [`TemplateError::CyclicReference`] when
/// definitions reference themselves recursively.
pub fn schema_template(root: &RootSchema) -> Result<Value, TemplateError> {
    let mut walker = Walker {
        root,
        resolving: Vec::new(),
    };
    walker.walk_object(&root.schema)
}

struct Walker<'a> {
    root: &'a RootSchema,
    /// Definition names currently being resolved, for cycle detection
    resolving: Vec<String>,
}

impl Walker<'_> {
    fn walk(&mut self, schema: &Schema) -> Result<Value, TemplateError> {
        match schema {
            Schema::Bool(_) => Ok(leaf("any")),
            Schema::Object(object) => self.walk_object(object),
        }
    }

    fn walk_object(&mut self, object: &SchemaObject) -> Result<Value, TemplateError> {
        if let Some(reference) = &object.reference {
            return self.walk_reference(reference);
        }

        if let Some(validation) = object.object.as_deref() {
            if !validation.properties.is_empty() {
                return self.walk_fields(validation);
            }
            if let Some(value_schema) = validation.additional_properties.as_deref() {
                return self.walk_map(object, value_schema);
            }
        }

        if let Some(subschemas) = object.subschemas.as_deref() {
            if let Some(members) = &subschemas.any_of {
                let joined = members
                    .iter()
                    .map(member_type_name)
                    .collect::<Vec<_>>()
                    .join("|");
                return Ok(leaf(&joined));
            }
            if let Some(members) = &subschemas.all_of {
                if let [single] = members.as_slice() {
                    return self.walk(single);
                }
            }
        }

        match &object.instance_type {
            None => Ok(leaf("any")),
            Some(SingleOrVec::Vec(types)) => {
                let joined = types
                    .iter()
                    .map(|ty| type_name(*ty))
                    .collect::<Vec<_>>()
                    .join("|");
                Ok(leaf(&joined))
            }
            Some(SingleOrVec::Single(single)) => match **single {
                InstanceType::Array => self.walk_array(object),
                other => Ok(leaf(type_name(other))),
            },
        }
    }

    /// Struct-like object: one entry per named field, required or not
    fn walk_fields(&mut self, validation: &ObjectValidation) -> Result<Value, TemplateError> {
        let mut fields = Map::new();
        for (name, schema) in &validation.properties {
            let label = match field_comment(schema) {
                Some(comment) => format!("{name} ({comment})"),
                None => name.clone(),
            };
            fields.insert(label, self.walk(schema)?);
        }
        Ok(Value::Object(fields))
    }

    /// Dynamic map: a single `<key>` entry describing all values
    fn walk_map(
        &mut self,
        object: &SchemaObject,
        value_schema: &Schema,
    ) -> Result<Value, TemplateError> {
        let label = object
            .metadata
            .as_deref()
            .and_then(|metadata| metadata.description.as_deref())
            .map_or("key", |description| {
                description.strip_prefix("key=").unwrap_or(description)
            });

        let mut map = Map::new();
        map.insert(format!("<{label}>"), self.walk(value_schema)?);
        Ok(Value::Object(map))
    }

    fn walk_array(&mut self, object: &SchemaObject) -> Result<Value, TemplateError> {
        let items = object.array.as_deref().and_then(|array| array.items.as_ref());
        let item = match items {
            Some(SingleOrVec::Single(schema)) => self.walk(schema)?,
            Some(SingleOrVec::Vec(schemas)) => match schemas.first() {
                Some(schema) => self.walk(schema)?,
                None => leaf("any"),
            },
            None => leaf("any"),
        };
        Ok(Value::Array(vec![item, Value::String("...".to_string())]))
    }

    fn walk_reference(&mut self, reference: &str) -> Result<Value, TemplateError> {
        let name = reference.rsplit('/').next().unwrap_or(reference);

        if self.resolving.iter().any(|seen| seen == name) {
            return Err(TemplateError::CyclicReference {
                reference: name.to_string(),
            });
        }
        let definition =
            self.root
                .definitions
                .get(name)
                .ok_or_else(|| TemplateError::UnresolvedReference {
                    reference: name.to_string(),
                })?;

        self.resolving.push(name.to_string());
        let rendered = self.walk(definition);
        self.resolving.pop();
        rendered
    }
}

/// The `comment=` annotation of a field schema, if any
fn field_comment(schema: &Schema) -> Option<&str> {
    match schema {
        Schema::Object(object) => {
            let description = object.metadata.as_deref()?.description.as_deref()?;
            description.split_once("comment=").map(|(_, text)| text)
        }
        Schema::Bool(_) => None,
    }
}

/// Primitive name of a union member, without recursing into it
fn member_type_name(schema: &Schema) -> &'static str {
    match schema {
        Schema::Bool(_) => "any",
        Schema::Object(object) => match &object.instance_type {
            Some(SingleOrVec::Single(single)) => type_name(**single),
            _ => "any",
        },
    }
}

fn type_name(ty: InstanceType) -> &'static str {
    match ty {
        InstanceType::Null => "null",
        InstanceType::Boolean => "boolean",
        InstanceType::Object => "object",
        InstanceType::Array => "array",
        InstanceType::Number => "number",
        InstanceType::String => "string",
        InstanceType::Integer => "integer",
    }
}

fn leaf(label: &str) -> Value {
    Value::String(format!("[{label}]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schemars::{schema_for, JsonSchema};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn reference(name: &str) -> Schema {
        Schema::Object(SchemaObject {
            reference: Some(format!("#/definitions/{name}")),
            ..Default::default()
        })
    }

    fn object_with_properties(properties: Vec<(&str, Schema)>) -> SchemaObject {
        let mut validation = ObjectValidation::default();
        for (name, schema) in properties {
            validation.properties.insert(name.to_string(), schema);
        }
        SchemaObject {
            object: Some(Box::new(validation)),
            ..Default::default()
        }
    }

    #[test]
    fn scalars_render_as_type_leaves() {
        assert_eq!(schema_template(&schema_for!(String)).unwrap(), json!("[string]"));
        assert_eq!(schema_template(&schema_for!(u32)).unwrap(), json!("[integer]"));
        assert_eq!(schema_template(&schema_for!(f64)).unwrap(), json!("[number]"));
        assert_eq!(schema_template(&schema_for!(bool)).unwrap(), json!("[boolean]"));
    }

    #[test]
    fn nullable_renders_as_pipe_union() {
        let rendered = schema_template(&schema_for!(Option<String>)).unwrap();
        assert_eq!(rendered, json!("[string|null]"));
    }

    #[test]
    fn untyped_value_renders_as_any() {
        let rendered = schema_template(&schema_for!(serde_json::Value)).unwrap();
        assert_eq!(rendered, json!("[any]"));
    }

    #[test]
    fn arrays_render_item_and_ellipsis() {
        let rendered = schema_template(&schema_for!(Vec<String>)).unwrap();
        assert_eq!(rendered, json!(["[string]", "..."]));
    }

    #[test]
    fn struct_fields_render_in_property_order() {
        #[derive(JsonSchema)]
        #[allow(dead_code)]
        struct Specimen {
            kind: String,
            #[schemars(description = "comment=list of option ids")]
            options: Vec<u32>,
        }

        let rendered = schema_template(&schema_for!(Specimen)).unwrap();

        assert_eq!(
            rendered,
            json!({
                "kind": "[string]",
                "options (list of option ids)": ["[integer]", "..."],
            })
        );
    }

    #[test]
    fn map_renders_key_placeholder_from_description() {
        #[derive(JsonSchema)]
        #[allow(dead_code)]
        struct Ledger {
            #[schemars(description = "key=account name")]
            accounts: BTreeMap<String, f64>,
        }

        let rendered = schema_template(&schema_for!(Ledger)).unwrap();

        assert_eq!(rendered, json!({"accounts": {"<account name>": "[number]"}}));
    }

    #[test]
    fn map_without_description_uses_generic_key() {
        let rendered = schema_template(&schema_for!(BTreeMap<String, bool>)).unwrap();
        assert_eq!(rendered, json!({"<key>": "[boolean]"}));
    }

    #[test]
    fn nested_references_resolve_through_definitions() {
        #[derive(JsonSchema)]
        #[allow(dead_code)]
        struct Inner {
            value: f64,
        }

        #[derive(JsonSchema)]
        #[allow(dead_code)]
        struct Outer {
            inner: Inner,
            inners: Vec<Inner>,
        }

        let rendered = schema_template(&schema_for!(Outer)).unwrap();

        assert_eq!(
            rendered,
            json!({
                "inner": {"value": "[number]"},
                "inners": [{"value": "[number]"}, "..."],
            })
        );
    }

    #[test]
    fn repeated_sibling_references_are_not_cycles() {
        let mut definitions = schemars::Map::new();
        definitions.insert(
            "Leaf".to_string(),
            Schema::Object(SchemaObject {
                instance_type: Some(SingleOrVec::Single(Box::new(InstanceType::String))),
                ..Default::default()
            }),
        );
        let root = RootSchema {
            schema: object_with_properties(vec![
                ("first", reference("Leaf")),
                ("second", reference("Leaf")),
            ]),
            definitions,
            ..Default::default()
        };

        let rendered = schema_template(&root).unwrap();

        assert_eq!(rendered, json!({"first": "[string]", "second": "[string]"}));
    }

    #[test]
    fn cyclic_reference_is_reported() {
        let mut definitions = schemars::Map::new();
        definitions.insert(
            "Node".to_string(),
            Schema::Object(object_with_properties(vec![("next", reference("Node"))])),
        );
        let root = RootSchema {
            schema: object_with_properties(vec![("head", reference("Node"))]),
            definitions,
            ..Default::default()
        };

        let result = schema_template(&root);

        assert_eq!(
            result,
            Err(TemplateError::CyclicReference {
                reference: "Node".to_string(),
            })
        );
    }

    #[test]
    fn dangling_reference_is_reported() {
        let root = RootSchema {
            schema: object_with_properties(vec![("ghost", reference("Missing"))]),
            ..Default::default()
        };

        let result = schema_template(&root);

        assert_eq!(
            result,
            Err(TemplateError::UnresolvedReference {
                reference: "Missing".to_string(),
            })
        );
    }

    #[test]
    fn empty_object_schema_renders_as_object_leaf() {
        let root = RootSchema {
            schema: SchemaObject {
                instance_type: Some(SingleOrVec::Single(Box::new(InstanceType::Object))),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(schema_template(&root).unwrap(), json!("[object]"));
    }
}
