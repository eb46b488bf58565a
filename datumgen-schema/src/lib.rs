//! # datumgen Schema
//!
//! Template descriptions and naming conventions for datum generation.
//!
//! This crate provides:
//! - The data model describing a template type (fields and their JVM types)
//! - Naming transforms for class names, field-name constants and accessors
//! - Template validation
//! - Intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod naming;
pub mod types;
pub mod validation;

pub use error::SchemaError;
pub use ir::{ResolvedField, TemplateIr};
pub use types::{
    DatumTemplate, FieldDescriptor, FieldType, Primitive, TemplateBuilder, TemplateDescription,
};
pub use validation::validate_template;
