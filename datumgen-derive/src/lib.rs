//! # datumgen Derive
//!
//! Procedural macro describing datum templates with Rust structs.
//!
//! `#[derive(DatumTemplate)]` implements `datumgen::schema::DatumTemplate`,
//! turning the struct's named fields into an ordered template description.
//! The description is validated while the macro expands, so an invalid
//! template is a compile error rather than a generation failure.
//!
//! # Example
//! ```ignore
//! use datumgen::DatumTemplate;
//!
//! #[derive(DatumTemplate)]
//! #[datum(package = "com.example", name = "UserDatumTemplate")]
//! struct User {
//!     /// Account identifier
//!     _user_id: i32,
//!     #[datum(java = "java.util.Date")]
//!     _signup_date: i64,
//!     #[datum(enumeration = "com.example.Status")]
//!     _status: i32,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod expand;
mod parse;

/// Derives `DatumTemplate` for a struct with named fields.
///
/// ## Container attributes
/// - `#[datum(package = "...")]` - package of the generated class (default: none)
/// - `#[datum(name = "...")]` - template name (default: the struct name)
///
/// ## Field attributes
/// - `#[datum(java = "...")]` - explicit JVM type name
/// - `#[datum(enumeration = "...")]` - qualified name of a Java enum
/// - `#[datum(rename = "...")]` - raw field name to use
/// - `#[datum(skip)]` - leave the field out of the template
///
/// Doc comments on fields become the documentation of the generated getter.
#[proc_macro_derive(DatumTemplate, attributes(datum))]
pub fn derive_datum_template(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match parse::TemplateInput::from_derive(&input) {
        Ok(template) => expand::expand(&input, &template).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
