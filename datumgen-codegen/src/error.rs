//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Template description error.
    #[error("template error: {0}")]
    Schema(#[from] datumgen_schema::SchemaError),

    /// Field type the generator cannot marshal.
    #[error("unsupported type '{type_name}' in field '{field}': {reason}")]
    UnsupportedType {
        /// Type name.
        type_name: String,
        /// Field name.
        field: String,
        /// Why the type was rejected.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(
        type_name: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}
