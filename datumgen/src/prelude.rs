//! Prelude module for convenient imports.
//!
//! ```
//! use datumgen::prelude::*;
//! ```

// Schema types
pub use datumgen_schema::{
    DatumTemplate, FieldDescriptor, FieldType, Primitive, SchemaError, TemplateDescription,
};

// Derive macro, named like the trait it implements
pub use datumgen_derive::DatumTemplate;

// Generation
pub use datumgen_codegen::{
    CodegenError, GeneratedUnit, Generator, GeneratorConfig, WriteOutcome, write_unit,
};
