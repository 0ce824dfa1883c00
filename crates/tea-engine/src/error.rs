//! Error types for choice resolution and evaluation

use tea_project::{Archetype, BlockId, ChoiceId, OptionId};
use thiserror::Error;

/// Errors produced while resolving selections or evaluating a project
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A selection named a choice id the project does not define
    #[error("selection references unknown choice {choice}")]
    UnknownChoice {
        /// The choice id that could not be found
        choice: ChoiceId,
    },

    /// A selection named an option its choice does not offer
    #[error("choice {choice} has no option {option}")]
    UnknownOption {
        /// The choice the option was looked up in
        choice: ChoiceId,
        /// The option id that could not be found
        option: OptionId,
    },

    /// An evaluation formula needed a block no selection covers
    #[error("no option selected for block {block}")]
    NoSelection {
        /// The block left without a selected option
        block: BlockId,
    },

    /// A selected option lacks a property a formula depends on
    #[error("selected option on block {block} has no numeric property {property}")]
    MissingNumericProperty {
        /// The block whose selected option was inspected
        block: BlockId,
        /// The property name the formula asked for
        property: String,
    },

    /// The wind data carries no profile for the project country
    #[error("no wind profile for country {country}")]
    UnknownWindCountry {
        /// The country that was looked up
        country: String,
    },

    /// The project lists an archetype the supplied context does not cover
    #[error("no engineering context for archetype {archetype}")]
    MissingContext {
        /// The archetype left without a context
        archetype: Archetype,
    },

    /// None of the project archetypes has an engineering model
    #[error("no engineering model for any of [{archetypes}]")]
    UnsupportedArchetypes {
        /// Comma-separated archetype tags from the project
        archetypes: String,
    },
}

impl EngineError {
    pub(crate) fn unsupported(archetypes: &[Archetype]) -> Self {
        let archetypes = archetypes
            .iter()
            .map(Archetype::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnsupportedArchetypes { archetypes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_property_message_names_block_and_property() {
        let err = EngineError::MissingNumericProperty {
            block: "44d5d149-ae06-4749-b308-a90c801a11ec".parse().unwrap(),
            property: "ratedpower".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("44d5d149-ae06-4749-b308-a90c801a11ec"));
        assert!(message.contains("ratedpower"));
    }

    #[test]
    fn unsupported_archetypes_lists_tags() {
        let err = EngineError::unsupported(&[Archetype::Solar, Archetype::Ammonia]);

        assert_eq!(
            err.to_string(),
            "no engineering model for any of [solar, ammonia]"
        );
    }
}
