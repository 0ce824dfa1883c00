//! Resolution of user selections against the project graph
//!
//! A selection names a choice and one of its options. Resolution walks the
//! project, verifies both ids, and flattens the winning option into a bare
//! name-to-value property map the engineering formulas can read directly.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tea_project::{BlockId, ChoiceId, OptionId, Project};

use crate::error::EngineError;

/// A user-selected option within a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Selection {
    /// The choice being decided
    pub choice: ChoiceId,
    /// The option picked for it
    pub option: OptionId,
}

/// A resolved option with its properties flattened to bare values
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedOption {
    /// Display name of the option
    pub name: String,
    /// Property values keyed by property name
    pub properties: IndexMap<String, Value>,
}

/// One resolved option per block
///
/// Blocks hold at most one selected option. When several selections land on
/// the same block the first one wins and the rest are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectedChoices {
    by_block: IndexMap<BlockId, SelectedOption>,
}

impl SelectedChoices {
    /// Resolves a list of selections against the project graph.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownChoice`] when a selection names a choice
    /// the project does not define, and [`EngineError::UnknownOption`] when
    /// the choice exists but does not offer the selected option.
    pub fn resolve(project: &Project, selections: &[Selection]) -> Result<Self, EngineError> {
        let mut by_block = IndexMap::new();

        for selection in selections {
            let choice = project
                .find_choice(selection.choice)
                .ok_or(EngineError::UnknownChoice {
                    choice: selection.choice,
                })?;
            let option = choice
                .options
                .get(&selection.option)
                .ok_or(EngineError::UnknownOption {
                    choice: selection.choice,
                    option: selection.option,
                })?;

            if by_block.contains_key(&choice.block_uuid) {
                tracing::debug!(
                    block = %choice.block_uuid,
                    option = %selection.option,
                    "block already decided, ignoring selection"
                );
                continue;
            }

            let properties = option
                .properties
                .iter()
                .map(|(name, property)| (name.clone(), property.value.clone()))
                .collect();
            by_block.insert(
                choice.block_uuid,
                SelectedOption {
                    name: option.name.clone(),
                    properties,
                },
            );
        }

        Ok(Self { by_block })
    }

    /// Returns the selected option for a block, if any.
    #[must_use]
    pub fn get(&self, block: BlockId) -> Option<&SelectedOption> {
        self.by_block.get(&block)
    }

    /// Returns the selected option for a block.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoSelection`] when no selection covers the
    /// block.
    pub fn for_block(&self, block: BlockId) -> Result<&SelectedOption, EngineError> {
        self.by_block
            .get(&block)
            .ok_or(EngineError::NoSelection { block })
    }

    /// Reads a numeric property off the option selected for a block.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoSelection`] when the block has no selected
    /// option and [`EngineError::MissingNumericProperty`] when the option
    /// lacks the property or its value is not a number.
    pub fn number(&self, block: BlockId, property: &str) -> Result<f64, EngineError> {
        self.for_block(block)?
            .properties
            .get(property)
            .and_then(Value::as_f64)
            .ok_or_else(|| EngineError::MissingNumericProperty {
                block,
                property: property.to_string(),
            })
    }

    /// Sums a numeric property across all selected options that carry it.
    #[must_use]
    pub fn sum_property(&self, property: &str) -> f64 {
        self.by_block
            .values()
            .filter_map(|option| option.properties.get(property).and_then(Value::as_f64))
            .sum()
    }

    /// Number of blocks with a selected option.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_block.len()
    }

    /// True when no block has a selected option.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_block.is_empty()
    }
}
