//! Template rendering errors

use thiserror::Error;

/// Errors produced while rendering a schema template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `$ref` pointed at a definition that does not exist
    #[error("unresolved schema reference {reference}")]
    UnresolvedReference {
        /// Name of the missing definition
        reference: String,
    },

    /// A definition referenced itself, directly or through other definitions
    #[error("cyclic schema reference through {reference}")]
    CyclicReference {
        /// Name of the definition that closed the cycle
        reference: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_reference() {
        let err = TemplateError::UnresolvedReference {
            reference: "Block".to_string(),
        };
        assert_eq!(err.to_string(), "unresolved schema reference Block");

        let err = TemplateError::CyclicReference {
            reference: "Node".to_string(),
        };
        assert_eq!(err.to_string(), "cyclic schema reference through Node");
    }
}
