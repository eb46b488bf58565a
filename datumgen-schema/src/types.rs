//! Template type definitions.
//!
//! This module contains the data structures describing a template type:
//! the JVM types a field may have, the fields themselves and the template
//! that orders them.

use crate::error::SchemaError;
use crate::naming::{is_java_identifier, is_reserved_word};

/// JVM primitive types a datum field may use.
///
/// `byte` and `char` are deliberately absent: the tuple container has no
/// typed getter for them and an `Object` result cannot be cast to a
/// primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `boolean` / `java.lang.Boolean`.
    Boolean,
    /// `short` / `java.lang.Short`.
    Short,
    /// `int` / `java.lang.Integer`.
    Int,
    /// `long` / `java.lang.Long`.
    Long,
    /// `float` / `java.lang.Float`.
    Float,
    /// `double` / `java.lang.Double`.
    Double,
}

impl Primitive {
    /// Returns the Java keyword for this primitive.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Returns the fully qualified name of the boxed type.
    #[must_use]
    pub const fn boxed_name(&self) -> &'static str {
        match self {
            Self::Boolean => "java.lang.Boolean",
            Self::Short => "java.lang.Short",
            Self::Int => "java.lang.Integer",
            Self::Long => "java.lang.Long",
            Self::Float => "java.lang.Float",
            Self::Double => "java.lang.Double",
        }
    }

    /// Parses a primitive from its Java keyword.
    #[must_use]
    pub fn from_keyword(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(Self::Boolean),
            "short" => Some(Self::Short),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    /// Parses a primitive from its boxed type name, qualified or not.
    #[must_use]
    pub fn from_boxed_name(name: &str) -> Option<Self> {
        match name.strip_prefix("java.lang.").unwrap_or(name) {
            "Boolean" => Some(Self::Boolean),
            "Short" => Some(Self::Short),
            "Integer" => Some(Self::Int),
            "Long" => Some(Self::Long),
            "Float" => Some(Self::Float),
            "Double" => Some(Self::Double),
            _ => None,
        }
    }
}

/// Declared type of a template field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Primitive value type.
    Primitive(Primitive),
    /// Boxed primitive (`java.lang.Integer`, ...).
    Boxed(Primitive),
    /// `java.lang.String`.
    String,
    /// Enum type, by qualified name.
    Enum(String),
    /// `java.util.Date`.
    Date,
    /// `java.util.UUID`.
    Uuid,
    /// Array of a reference type, by qualified element name.
    ReferenceArray(String),
    /// Any other reference type, by qualified name.
    Object(String),
}

impl FieldType {
    /// Creates an enum field type.
    #[must_use]
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    /// Parses a JVM type name.
    ///
    /// Accepts primitive keywords, boxed and `java.lang` names (qualified or
    /// not), binary array descriptors (`[Ljava.lang.String;`) and source-form
    /// arrays (`java.lang.String[]`). Enums cannot be told apart from other
    /// classes by name and come back as [`FieldType::Object`]; use
    /// [`FieldType::enumeration`] for them.
    ///
    /// # Errors
    /// Returns `SchemaError::UnsupportedType` for primitive arrays, nested
    /// arrays, `byte`, `char`, `void` and names that are not type names.
    pub fn from_jvm_name(name: &str) -> Result<Self, SchemaError> {
        let name = name.trim();

        if let Some(descriptor) = name.strip_prefix('[') {
            if descriptor.starts_with('[') {
                return Err(SchemaError::unsupported_type(name, "nested arrays"));
            }
            return match descriptor
                .strip_prefix('L')
                .and_then(|d| d.strip_suffix(';'))
            {
                Some(element) => Ok(Self::ReferenceArray(reference_name(element, name)?)),
                None => Err(SchemaError::unsupported_type(
                    name,
                    "arrays of primitive types",
                )),
            };
        }

        if let Some(element) = name.strip_suffix("[]") {
            if element.ends_with("[]") {
                return Err(SchemaError::unsupported_type(name, "nested arrays"));
            }
            if Primitive::from_keyword(element).is_some() || is_unsupported_primitive(element) {
                return Err(SchemaError::unsupported_type(
                    name,
                    "arrays of primitive types",
                ));
            }
            return Ok(Self::ReferenceArray(reference_name(element, name)?));
        }

        if let Some(primitive) = Primitive::from_keyword(name) {
            return Ok(Self::Primitive(primitive));
        }

        if is_unsupported_primitive(name) {
            return Err(SchemaError::unsupported_type(
                name,
                "no tuple accessor for this primitive",
            ));
        }

        if let Some(primitive) = Primitive::from_boxed_name(name) {
            return Ok(Self::Boxed(primitive));
        }

        Ok(match name {
            "java.lang.String" | "String" => Self::String,
            "java.util.Date" => Self::Date,
            "java.util.UUID" => Self::Uuid,
            _ => Self::Object(reference_name(name, name)?),
        })
    }

    /// Returns the JVM name of this type, as `Class.getName()` would.
    ///
    /// Reference arrays use the binary descriptor form (`[Lpkg.Type;`).
    #[must_use]
    pub fn jvm_name(&self) -> String {
        match self {
            Self::Primitive(p) => p.keyword().to_string(),
            Self::Boxed(p) => p.boxed_name().to_string(),
            Self::String => "java.lang.String".to_string(),
            Self::Enum(name) | Self::Object(name) => name.clone(),
            Self::Date => "java.util.Date".to_string(),
            Self::Uuid => "java.util.UUID".to_string(),
            Self::ReferenceArray(element) => format!("[L{element};"),
        }
    }

    /// Checks the type names carried by enum, object and array types.
    ///
    /// Those variants can be built directly without going through
    /// [`FieldType::from_jvm_name`], so their names are checked again here.
    ///
    /// # Errors
    /// Returns `SchemaError::UnsupportedType` if a carried name is not a
    /// reference type name.
    pub fn check_type_names(&self) -> Result<(), SchemaError> {
        match self {
            Self::Enum(name) | Self::Object(name) => reference_name(name, name).map(drop),
            Self::ReferenceArray(element) => {
                reference_name(element, &self.jvm_name()).map(drop)
            }
            _ => Ok(()),
        }
    }

    /// Returns true for arrays of reference types.
    #[must_use]
    pub const fn is_reference_array(&self) -> bool {
        matches!(self, Self::ReferenceArray(_))
    }

    /// Returns true for enum types.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns true for `java.util.Date`.
    #[must_use]
    pub fn is_date(&self) -> bool {
        self.jvm_name() == "java.util.Date"
    }

    /// Returns true for `java.util.UUID`.
    #[must_use]
    pub fn is_uuid(&self) -> bool {
        self.jvm_name() == "java.util.UUID"
    }

    /// Returns true for `int` and `java.lang.Integer`.
    #[must_use]
    pub fn is_int32(&self) -> bool {
        matches!(self.jvm_name().as_str(), "int" | "java.lang.Integer")
    }

    /// Returns true for `long` and `java.lang.Long`.
    #[must_use]
    pub fn is_int64(&self) -> bool {
        matches!(self.jvm_name().as_str(), "long" | "java.lang.Long")
    }
}

fn is_unsupported_primitive(name: &str) -> bool {
    matches!(name, "byte" | "char" | "void")
}

/// Checks that `name` is a dotted (possibly `$`-nested) type name.
///
/// Keywords are rejected as segments, which also covers primitive element
/// types.
fn reference_name(name: &str, original: &str) -> Result<String, SchemaError> {
    let valid = !name.is_empty()
        && name
            .split(['.', '$'])
            .all(|segment| is_java_identifier(segment) && !is_reserved_word(segment));

    if valid {
        Ok(name.to_string())
    } else {
        Err(SchemaError::unsupported_type(original, "not a type name"))
    }
}

/// One field of a template type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Raw field name, possibly carrying the marker prefix.
    pub name: String,
    /// Declared field type.
    pub field_type: FieldType,
    /// Optional documentation, emitted above the generated getter.
    pub doc: Option<String>,
}

impl FieldDescriptor {
    /// Creates a new field descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            doc: None,
        }
    }

    /// Attaches documentation to the field.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Description of a template type: the input to generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescription {
    /// Package the generated type belongs to (may be empty).
    pub package_name: String,
    /// Unqualified template type name.
    pub simple_name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl TemplateDescription {
    /// Creates a template description with no fields.
    #[must_use]
    pub fn new(package_name: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            simple_name: simple_name.into(),
            fields: Vec::new(),
        }
    }

    /// Starts building a template description.
    #[must_use]
    pub fn builder(
        package_name: impl Into<String>,
        simple_name: impl Into<String>,
    ) -> TemplateBuilder {
        TemplateBuilder {
            template: Self::new(package_name, simple_name),
        }
    }

    /// Appends a field.
    pub fn add_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Returns the package-qualified template name.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.package_name, self.simple_name)
        }
    }
}

/// Builder for [`TemplateDescription`].
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    template: TemplateDescription,
}

impl TemplateBuilder {
    /// Appends a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.template.add_field(FieldDescriptor::new(name, field_type));
        self
    }

    /// Appends a documented field.
    #[must_use]
    pub fn field_with_doc(
        mut self,
        name: impl Into<String>,
        field_type: FieldType,
        doc: impl Into<String>,
    ) -> Self {
        self.template
            .add_field(FieldDescriptor::new(name, field_type).with_doc(doc));
        self
    }

    /// Finishes the description.
    #[must_use]
    pub fn build(self) -> TemplateDescription {
        self.template
    }
}

/// A Rust type that describes a datum template.
///
/// Usually implemented with `#[derive(DatumTemplate)]`.
pub trait DatumTemplate {
    /// Returns the description of this template.
    fn template_description() -> TemplateDescription;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitives() {
        assert_eq!(
            FieldType::from_jvm_name("int").unwrap(),
            FieldType::Primitive(Primitive::Int)
        );
        assert_eq!(
            FieldType::from_jvm_name("boolean").unwrap(),
            FieldType::Primitive(Primitive::Boolean)
        );
    }

    #[test]
    fn test_parse_boxed() {
        assert_eq!(
            FieldType::from_jvm_name("java.lang.Long").unwrap(),
            FieldType::Boxed(Primitive::Long)
        );
        assert_eq!(
            FieldType::from_jvm_name("Double").unwrap(),
            FieldType::Boxed(Primitive::Double)
        );
    }

    #[test]
    fn test_parse_well_known_types() {
        assert_eq!(
            FieldType::from_jvm_name("java.lang.String").unwrap(),
            FieldType::String
        );
        assert_eq!(
            FieldType::from_jvm_name("java.util.Date").unwrap(),
            FieldType::Date
        );
        assert_eq!(
            FieldType::from_jvm_name("java.util.UUID").unwrap(),
            FieldType::Uuid
        );
        assert_eq!(
            FieldType::from_jvm_name("com.example.Address").unwrap(),
            FieldType::Object("com.example.Address".to_string())
        );
    }

    #[test]
    fn test_parse_arrays() {
        assert_eq!(
            FieldType::from_jvm_name("[Ljava.lang.String;").unwrap(),
            FieldType::ReferenceArray("java.lang.String".to_string())
        );
        assert_eq!(
            FieldType::from_jvm_name("com.example.Tag[]").unwrap(),
            FieldType::ReferenceArray("com.example.Tag".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_unsupported() {
        let names = [
            "[I",
            "int[]",
            "[[Ljava.lang.String;",
            "String[][]",
            "byte",
            "char",
            "void",
        ];
        for name in names {
            let err = FieldType::from_jvm_name(name).unwrap_err();
            assert!(
                matches!(err, SchemaError::UnsupportedType { .. }),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(FieldType::from_jvm_name("").is_err());
        assert!(FieldType::from_jvm_name("com..Foo").is_err());
        assert!(FieldType::from_jvm_name("List<String>").is_err());
        assert!(FieldType::from_jvm_name("[L;").is_err());
    }

    #[test]
    fn test_check_type_names() {
        assert!(FieldType::String.check_type_names().is_ok());
        assert!(FieldType::enumeration("com.example.Color").check_type_names().is_ok());
        assert!(
            FieldType::Object("com.example.Outer$Inner".to_string())
                .check_type_names()
                .is_ok()
        );

        let rejected = [
            FieldType::enumeration(""),
            FieldType::enumeration("int"),
            FieldType::Object("not a type".to_string()),
            FieldType::Object("com.example.class".to_string()),
            FieldType::ReferenceArray("int".to_string()),
            FieldType::ReferenceArray("java.lang.String[]".to_string()),
        ];
        for field_type in rejected {
            assert!(
                matches!(
                    field_type.check_type_names(),
                    Err(SchemaError::UnsupportedType { .. })
                ),
                "{field_type:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_keyword_segments() {
        assert!(FieldType::from_jvm_name("com.new.Foo").is_err());
        assert!(FieldType::from_jvm_name("[Lint;").is_err());
    }

    #[test]
    fn test_jvm_name_round_trips_through_parse() {
        let types = [
            FieldType::Primitive(Primitive::Float),
            FieldType::Boxed(Primitive::Short),
            FieldType::String,
            FieldType::Date,
            FieldType::Uuid,
            FieldType::ReferenceArray("java.lang.String".to_string()),
            FieldType::Object("com.example.Outer$Inner".to_string()),
        ];
        for field_type in types {
            assert_eq!(
                FieldType::from_jvm_name(&field_type.jvm_name()).unwrap(),
                field_type
            );
        }
    }

    #[test]
    fn test_predicates() {
        assert!(FieldType::Boxed(Primitive::Int).is_int32());
        assert!(FieldType::Primitive(Primitive::Int).is_int32());
        assert!(FieldType::Primitive(Primitive::Long).is_int64());
        assert!(!FieldType::Primitive(Primitive::Short).is_int32());
        assert!(FieldType::Date.is_date());
        assert!(FieldType::Uuid.is_uuid());
        assert!(FieldType::enumeration("com.example.Color").is_enum());
        assert!(FieldType::ReferenceArray("X".to_string()).is_reference_array());
    }

    #[test]
    fn test_enum_named_like_integer_is_both() {
        let field_type = FieldType::enumeration("java.lang.Integer");
        assert!(field_type.is_enum());
        assert!(field_type.is_int32());
    }

    #[test]
    fn test_builder_preserves_order() {
        let template = TemplateDescription::builder("com.example", "UserDatumTemplate")
            .field("_c", FieldType::String)
            .field("_a", FieldType::Primitive(Primitive::Int))
            .field_with_doc("_b", FieldType::Date, "When it happened")
            .build();

        let names: Vec<&str> = template.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["_c", "_a", "_b"]);
        assert_eq!(template.fields[2].doc.as_deref(), Some("When it happened"));
        assert_eq!(template.qualified_name(), "com.example.UserDatumTemplate");
    }

    #[test]
    fn test_qualified_name_default_package() {
        let template = TemplateDescription::new("", "PlainDatumTemplate");
        assert_eq!(template.qualified_name(), "PlainDatumTemplate");
    }
}
