//! Schema error types.
//!
//! The only errors that cross the host boundary. Routine editing input -
//! out-of-range navigation, empty list text, malformed property values -
//! is absorbed locally by defaulting and never surfaces as an error.

use thiserror::Error;

use crate::types::BlockType;

/// A block type's declared schema disagrees with its renderer or defaults.
///
/// Raised while building the registry (aborting startup) or when the host
/// looks up an identifier the registry does not know.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unknown block type '{0}'")]
    UnknownBlockType(String),

    #[error("block type '{block}' declares field '{field}' without a default value")]
    MissingDefault { block: BlockType, field: String },

    #[error("block type '{block}' has a default for undeclared field '{field}'")]
    UndeclaredDefault { block: BlockType, field: String },

    #[error("block type '{block}' default for '{field}' is not among the declared options")]
    DefaultOutsideOptions { block: BlockType, field: String },
}

/// Result type alias using SchemaError.
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_block() {
        let err = SchemaError::MissingDefault {
            block: BlockType::Slider,
            field: "slides".to_string(),
        };
        assert!(err.to_string().contains("Slider"));
        assert!(err.to_string().contains("slides"));

        let err = SchemaError::UnknownBlockType("Bogus".to_string());
        assert_eq!(err.to_string(), "unknown block type 'Bogus'");
    }
}
