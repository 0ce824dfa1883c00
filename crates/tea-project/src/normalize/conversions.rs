//! Conversion rule grouping

use crate::group::group_by;
use crate::model::{ConversionCategory, ConversionRule};
use crate::raw::RawConversion;
use indexmap::IndexMap;

/// Group conversion records by category
///
/// Categories come out in lexicographic order; rules within a category
/// keep payload order.
pub(crate) fn index(mut raw: Vec<RawConversion>) -> IndexMap<String, ConversionCategory> {
    raw.sort_by(|a, b| a.category.cmp(&b.category));

    group_by(raw, |rule| rule.category.clone())
        .into_iter()
        .map(|(category, rules)| {
            let conversions = rules.into_iter().map(ConversionRule::from).collect();
            (category, ConversionCategory { conversions })
        })
        .collect()
}

impl From<RawConversion> for ConversionRule {
    fn from(raw: RawConversion) -> Self {
        Self {
            from_value: raw.from_value,
            from_unit: raw.from_unit,
            to_value: raw.to_value,
            to_unit: raw.to_unit,
        }
    }
}
