//! Parameter tree assembly and currency extraction

use crate::error::NormalizeError;
use crate::group::{group_by, insert_keyed, DuplicateKeyPolicy};
use crate::model::{ParameterArchetype, ParameterCategory, Property, DEFAULT_ARCHETYPE};
use crate::raw::RawParameter;
use indexmap::IndexMap;

const FINANCIALS_CATEGORY: &str = "Financials";
const CURRENCY_PARAMETER: &str = "default_financials_project_currency";

/// Build the archetype -> category -> name parameter tree
///
/// Records are sorted by archetype bucket and category before grouping,
/// so both outer levels are lexicographic; parameters within a category
/// keep payload order.
///
/// # Errors
/// Returns [`NormalizeError::DuplicateKey`] for repeated parameter names
/// within one category under [`DuplicateKeyPolicy::Reject`].
pub(crate) fn build(
    mut raw: Vec<RawParameter>,
    policy: DuplicateKeyPolicy,
) -> Result<IndexMap<String, ParameterArchetype>, NormalizeError> {
    raw.sort_by(|a, b| {
        bucket(a)
            .cmp(bucket(b))
            .then_with(|| a.category.cmp(&b.category))
    });

    let mut tree = IndexMap::new();
    for (archetype, records) in group_by(raw, |parameter| bucket(parameter).to_string()) {
        let mut categories = IndexMap::new();
        for (category, records) in group_by(records, |parameter| parameter.category.clone()) {
            let mut parameters = IndexMap::new();
            for record in records {
                insert_keyed(
                    &mut parameters,
                    "parameters",
                    record.name.clone(),
                    Property::from(record),
                    policy,
                )?;
            }
            categories.insert(category, ParameterCategory { parameters });
        }
        tree.insert(archetype, ParameterArchetype { categories });
    }

    Ok(tree)
}

/// Pull the project currency out of the parameter tree
///
/// The currency lives at `default/Financials/default_financials_project_currency`
/// and is promoted to a top-level project field; the parameter itself is
/// removed from the tree so it is not reported twice.
///
/// # Errors
/// Returns [`NormalizeError::MissingCurrency`] when the parameter is
/// absent and [`NormalizeError::InvalidCurrency`] when its value is not
/// a string.
pub(crate) fn extract_currency(
    mut tree: IndexMap<String, ParameterArchetype>,
) -> Result<(String, IndexMap<String, ParameterArchetype>), NormalizeError> {
    let parameter = tree
        .get_mut(DEFAULT_ARCHETYPE)
        .and_then(|archetype| archetype.categories.get_mut(FINANCIALS_CATEGORY))
        .and_then(|category| category.parameters.shift_remove(CURRENCY_PARAMETER))
        .ok_or_else(|| NormalizeError::MissingCurrency {
            path: currency_path(),
        })?;

    match parameter.value {
        serde_json::Value::String(currency) => Ok((currency, tree)),
        other => Err(NormalizeError::InvalidCurrency {
            path: currency_path(),
            found: json_type_name(&other),
        }),
    }
}

fn currency_path() -> String {
    format!("{DEFAULT_ARCHETYPE}/{FINANCIALS_CATEGORY}/{CURRENCY_PARAMETER}")
}

/// Null and empty archetype tags land in the shared default bucket
fn bucket(parameter: &RawParameter) -> &str {
    match parameter.archetype.as_deref() {
        Some(archetype) if !archetype.is_empty() => archetype,
        _ => DEFAULT_ARCHETYPE,
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
