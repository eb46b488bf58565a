//! # datumgen Codegen
//!
//! Java datum generation from template descriptions.
//!
//! This crate provides:
//! - Type mapping from template field types to tuple storage strategies
//! - Java source emission for datum classes
//! - Generator configuration
//! - A helper writing generated units into a source tree

pub mod error;
pub mod generator;
pub mod java;
pub mod mapping;
pub mod output;
pub mod writer;

pub use error::CodegenError;
pub use generator::{GeneratedUnit, Generator, GeneratorConfig};
pub use mapping::{ContainerGetter, MappedField, StorageStrategy};
pub use output::{WriteOutcome, write_unit};

use datumgen_schema::TemplateDescription;

/// Generates a datum class with the default configuration.
///
/// # Arguments
/// * `template` - Description of the template type
///
/// # Returns
/// The generated compilation unit.
///
/// # Errors
/// Returns `CodegenError` if validation or generation fails.
pub fn generate(template: &TemplateDescription) -> Result<GeneratedUnit, CodegenError> {
    Generator::new().generate(template)
}

/// Generates a datum class and writes it under `dir`.
///
/// # Errors
/// Returns `CodegenError` if generation or writing fails.
pub fn generate_to_dir(
    template: &TemplateDescription,
    dir: &std::path::Path,
) -> Result<WriteOutcome, CodegenError> {
    let unit = generate(template)?;
    write_unit(&unit, dir)
}
