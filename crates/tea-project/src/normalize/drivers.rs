//! Driver indexing

use crate::error::NormalizeError;
use crate::group::{insert_keyed, DuplicateKeyPolicy};
use crate::model::{Driver, Property};
use crate::raw::RawDriver;
use indexmap::IndexMap;

/// Index driver records by name, nesting their properties by name
///
/// The numeric driver id is not part of the normalized driver; blocks
/// resolve it to the name during graph assembly and address drivers by
/// name from then on.
///
/// # Errors
/// Returns [`NormalizeError::DuplicateKey`] for repeated driver or
/// property names under [`DuplicateKeyPolicy::Reject`].
pub(crate) fn index(
    raw: Vec<RawDriver>,
    policy: DuplicateKeyPolicy,
) -> Result<IndexMap<String, Driver>, NormalizeError> {
    let mut drivers = IndexMap::new();

    for record in raw {
        let mut properties = IndexMap::new();
        for property in record.properties {
            insert_keyed(
                &mut properties,
                "driver properties",
                property.name.clone(),
                Property::from(property),
                policy,
            )?;
        }

        let driver = Driver {
            objective: record.objective,
            metric: record.metric,
            properties,
        };
        insert_keyed(&mut drivers, "drivers", record.name, driver, policy)?;
    }

    Ok(drivers)
}
