//! # datumgen
//!
//! Generates Java "datum" classes whose state lives in a Cascading tuple
//! rather than in native fields.
//!
//! A template describes the fields (name, JVM type, optional docs) in order.
//! The generator turns it into a class extending `BaseDatum` with field-name
//! constants, four constructors and one setter/getter pair per field.
//! Output is byte-for-byte deterministic.
//!
//! ## Quick Start
//!
//! ```
//! use datumgen::prelude::*;
//!
//! let template = TemplateDescription::builder("com.example", "UserDatumTemplate")
//!     .field("_userId", FieldType::Primitive(Primitive::Int))
//!     .field("_signupDate", FieldType::Date)
//!     .build();
//!
//! let unit = Generator::new().generate(&template)?;
//! assert_eq!(unit.class_name, "UserDatum");
//! assert!(unit.source.contains("USER_ID_FN"));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! Templates can also be derived from Rust structs:
//!
//! ```
//! use datumgen::prelude::*;
//!
//! #[derive(DatumTemplate)]
//! #[datum(package = "com.example", name = "UserDatumTemplate")]
//! struct User {
//!     _user_id: i32,
//!     #[datum(java = "java.util.Date")]
//!     _signup_date: i64,
//! }
//!
//! let unit = datumgen::generate::<User>()?;
//! assert_eq!(unit.qualified_name(), "com.example.UserDatum");
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Template data model, naming rules and validation
//! - [`codegen`] - Type mapping, Java emission and output

// Lets the derive's `::datumgen::` paths resolve inside this crate too.
extern crate self as datumgen;

pub mod prelude;

/// Template data model, naming rules and validation.
pub mod schema {
    pub use datumgen_schema::*;
}

/// Java source generation.
pub mod codegen {
    pub use datumgen_codegen::*;
}

pub use datumgen_codegen::{
    CodegenError, GeneratedUnit, Generator, GeneratorConfig, WriteOutcome, write_unit,
};
pub use datumgen_derive::DatumTemplate;
pub use datumgen_schema::{DatumTemplate, SchemaError, TemplateDescription};

/// Generates the datum class for a template type with the default
/// configuration.
///
/// # Errors
/// Returns `CodegenError` if the template is invalid or a field type
/// cannot be stored in a tuple.
pub fn generate<T: schema::DatumTemplate>() -> Result<GeneratedUnit, CodegenError> {
    Generator::new().generate(&T::template_description())
}
