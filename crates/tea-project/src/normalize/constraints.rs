//! Option constraint flattening

use crate::model::OptionConstraint;
use crate::raw::RawOptionConstraint;

/// Strip constraint records down to their kind and bare option id list
///
/// Order is preserved on both levels and no deduplication happens;
/// whatever the payload claims to constrain is reported as-is.
pub(crate) fn flatten(raw: Vec<RawOptionConstraint>) -> Vec<OptionConstraint> {
    raw.into_iter()
        .map(|constraint| OptionConstraint {
            kind: constraint.kind,
            options: constraint
                .options
                .into_iter()
                .map(|reference| reference.option)
                .collect(),
        })
        .collect()
}
