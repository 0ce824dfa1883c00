//! Order-preserving grouping and keyed insertion
//!
//! The normalizer turns record lists into ordered maps in two steps:
//! [`group_by`] collects runs of records under a derived key, and
//! [`insert_keyed`] places single records into keyed maps under a
//! [`DuplicateKeyPolicy`]. Both preserve encounter order, which is what
//! makes normalized output deterministic for a given payload.

use crate::error::NormalizeError;
use indexmap::IndexMap;
use std::fmt::Display;
use std::hash::Hash;

/// How keyed collections treat a record that claims an already-used key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateKeyPolicy {
    /// Later records replace earlier ones, keeping the original key position
    #[default]
    Overwrite,

    /// Any duplicate key fails normalization
    Reject,
}

/// Group items by a derived key
///
/// Groups appear in first-occurrence order of their key and items within
/// a group keep their input order. Callers that want groups in a sorted
/// order sort the input first; grouping itself never reorders.
#[must_use]
pub fn group_by<I, T, K, F>(items: I, mut key: F) -> IndexMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Insert a value under a key, applying the duplicate policy
///
/// # Errors
/// Returns [`NormalizeError::DuplicateKey`] when the key is already taken
/// and the policy is [`DuplicateKeyPolicy::Reject`].
pub(crate) fn insert_keyed<K, V>(
    map: &mut IndexMap<K, V>,
    container: &'static str,
    key: K,
    value: V,
    policy: DuplicateKeyPolicy,
) -> Result<(), NormalizeError>
where
    K: Hash + Eq + Display,
{
    if map.contains_key(&key) {
        match policy {
            DuplicateKeyPolicy::Overwrite => {
                tracing::warn!(container, key = %key, "duplicate key overwrites earlier record");
            }
            DuplicateKeyPolicy::Reject => {
                return Err(NormalizeError::DuplicateKey {
                    container,
                    key: key.to_string(),
                });
            }
        }
    }
    map.insert(key, value);
    Ok(())
}
