//! Error types for template parsing and validation.

use thiserror::Error;

/// Error type for template description problems.
///
/// Every variant names the offending template or field so that a failed
/// generation can be traced back to its source without reading the output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Template simple name is empty.
    #[error("template name is empty")]
    EmptyTemplateName,

    /// A name that must be a Java identifier is not one.
    #[error("'{name}' is not a valid identifier for {context}")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
        /// Where the name was used.
        context: String,
    },

    /// Package name is malformed.
    #[error("invalid package name '{package}': bad segment '{segment}'")]
    InvalidPackage {
        /// Full package name.
        package: String,
        /// First offending segment.
        segment: String,
    },

    /// Template declares no fields.
    #[error("template '{template}' declares no fields")]
    NoFields {
        /// Template simple name.
        template: String,
    },

    /// A field has an empty raw name.
    #[error("field #{index} has no name")]
    MissingFieldName {
        /// Zero-based position of the field.
        index: usize,
    },

    /// A field name is not usable once the marker prefix is stripped.
    #[error("field '{field}' does not form a valid identifier once stripped")]
    InvalidFieldName {
        /// Raw field name.
        field: String,
    },

    /// A stripped field name is a Java reserved word.
    #[error("field '{field}' uses the reserved word '{word}'")]
    ReservedWord {
        /// Raw field name.
        field: String,
        /// The reserved word.
        word: String,
    },

    /// Two fields share a stripped name.
    #[error("duplicate field '{name}' (declared as '{first}' and '{second}')")]
    DuplicateField {
        /// Stripped name.
        name: String,
        /// Raw name of the first declaration.
        first: String,
        /// Raw name of the second declaration.
        second: String,
    },

    /// Two fields map to the same field-name constant.
    #[error("fields '{first}' and '{second}' both map to constant {constant}")]
    ConstantCollision {
        /// Raw name of the first field.
        first: String,
        /// Raw name of the second field.
        second: String,
        /// The shared constant name.
        constant: String,
    },

    /// Two fields map to the same accessor method.
    #[error("fields '{first}' and '{second}' both map to accessor {accessor}")]
    AccessorCollision {
        /// Raw name of the first field.
        first: String,
        /// Raw name of the second field.
        second: String,
        /// The shared setter name.
        accessor: String,
    },

    /// A JVM type name cannot be represented in a datum.
    #[error("unsupported type '{type_name}': {reason}")]
    UnsupportedType {
        /// The JVM type name.
        type_name: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl SchemaError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            context: context.into(),
        }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}
