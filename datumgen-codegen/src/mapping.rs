//! Type mapping.
//!
//! Decides, per field, the Java type name used in generated signatures and
//! the strategy used to pack the value into (and out of) the tuple.

use crate::error::CodegenError;
use crate::generator::GeneratorConfig;
use datumgen_schema::ir::ResolvedField;
use datumgen_schema::naming::simple_type_name;
use datumgen_schema::types::FieldType;

/// Package whose types are always in scope in Java source.
const IMPLICIT_PACKAGE: &str = "java.lang.";

/// Package of the tuple runtime, whose types the generated source imports.
const TUPLE_PACKAGE: &str = "cascading.tuple.";

/// Tuple runtime types imported by every generated unit.
const IMPORTED_TUPLE_TYPES: &[&str] = &["Fields", "Tuple", "TupleEntry"];

/// Typed getter on the tuple entry used to read a generic field back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerGetter {
    /// `getBoolean`.
    Boolean,
    /// `getShort`.
    Short,
    /// `getInteger`.
    Integer,
    /// `getLong`.
    Long,
    /// `getFloat`.
    Float,
    /// `getDouble`.
    Double,
    /// `getString`.
    String,
    /// `getObject`, whose result must be cast.
    Object,
}

impl ContainerGetter {
    /// Picks the getter for a resolved Java type name.
    #[must_use]
    pub fn for_type_name(type_name: &str) -> Self {
        match type_name {
            "boolean" | "Boolean" => Self::Boolean,
            "short" | "Short" => Self::Short,
            "int" | "Integer" => Self::Integer,
            "long" | "Long" => Self::Long,
            "float" | "Float" => Self::Float,
            "double" | "Double" => Self::Double,
            "String" => Self::String,
            _ => Self::Object,
        }
    }

    /// Returns the tuple entry method name.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Boolean => "getBoolean",
            Self::Short => "getShort",
            Self::Integer => "getInteger",
            Self::Long => "getLong",
            Self::Float => "getFloat",
            Self::Double => "getDouble",
            Self::String => "getString",
            Self::Object => "getObject",
        }
    }

    /// Returns true if the result must be cast to the declared type.
    #[must_use]
    pub const fn needs_cast(&self) -> bool {
        matches!(self, Self::Object)
    }
}

/// How a field's value is stored in and retrieved from the tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageStrategy {
    /// Array of a reference type, stored as a nested `Tuple`.
    ReferenceArray {
        /// Resolved element type name.
        element: String,
    },
    /// Enum, stored as its ordinal.
    EnumOrdinal,
    /// Date, stored as epoch milliseconds.
    EpochMillis,
    /// UUID, stored as its string form.
    UuidString,
    /// 32-bit integer, primitive or boxed.
    Int32,
    /// 64-bit integer, primitive or boxed.
    Int64,
    /// Everything else, stored untyped and read with a typed getter.
    Generic(ContainerGetter),
}

/// Picks the storage strategy for a field type.
///
/// Rules are tried in a fixed order and the first match wins: reference
/// array, enum, date, UUID, 32-bit integer, 64-bit integer, generic.
#[must_use]
pub fn storage_strategy(field_type: &FieldType) -> StorageStrategy {
    if let FieldType::ReferenceArray(element) = field_type {
        StorageStrategy::ReferenceArray {
            element: resolve_type_name(element),
        }
    } else if field_type.is_enum() {
        StorageStrategy::EnumOrdinal
    } else if field_type.is_date() {
        StorageStrategy::EpochMillis
    } else if field_type.is_uuid() {
        StorageStrategy::UuidString
    } else if field_type.is_int32() {
        StorageStrategy::Int32
    } else if field_type.is_int64() {
        StorageStrategy::Int64
    } else {
        let type_name = resolve_type_name(&field_type.jvm_name());
        StorageStrategy::Generic(ContainerGetter::for_type_name(&type_name))
    }
}

/// Converts a JVM type name into the name used in generated source.
///
/// Binary array descriptors become `Elem[]`, `java.lang` types and imported
/// tuple types lose their package, and nested class separators (`$`) become
/// dots.
#[must_use]
pub fn resolve_type_name(jvm_name: &str) -> String {
    if let Some(element) = jvm_name
        .strip_prefix("[L")
        .and_then(|rest| rest.strip_suffix(';'))
    {
        return format!("{}[]", resolve_type_name(element));
    }

    let source_name = jvm_name.replace('$', ".");

    if let Some(rest) = source_name.strip_prefix(IMPLICIT_PACKAGE) {
        if !rest.contains('.') {
            return rest.to_string();
        }
    }

    if let Some(rest) = source_name.strip_prefix(TUPLE_PACKAGE) {
        if IMPORTED_TUPLE_TYPES.contains(&rest) {
            return rest.to_string();
        }
    }

    source_name
}

/// A resolved field paired with its Java type and storage strategy.
#[derive(Debug, Clone)]
pub struct MappedField<'a> {
    /// The resolved field.
    pub field: &'a ResolvedField,
    /// Java type name used in signatures.
    pub java_type: String,
    /// Storage strategy.
    pub strategy: StorageStrategy,
}

impl<'a> MappedField<'a> {
    /// Maps a resolved field.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedType` for nested templates, and for
    /// any type without a typed tuple accessor when the configuration
    /// rejects opaque objects.
    pub fn resolve(
        field: &'a ResolvedField,
        config: &GeneratorConfig,
    ) -> Result<Self, CodegenError> {
        let jvm_name = field.field_type.jvm_name();

        if let Some(nested) = nested_template(&field.field_type, &config.template_suffix) {
            return Err(CodegenError::unsupported_type(
                nested,
                &field.raw_name,
                "nested templates cannot be stored in a tuple field",
            ));
        }

        let strategy = storage_strategy(&field.field_type);
        if config.reject_opaque_objects
            && strategy == StorageStrategy::Generic(ContainerGetter::Object)
        {
            return Err(CodegenError::unsupported_type(
                jvm_name,
                &field.raw_name,
                "no typed tuple accessor for this type",
            ));
        }

        Ok(Self {
            field,
            java_type: resolve_type_name(&jvm_name),
            strategy,
        })
    }
}

/// Returns the offending type name if `field_type` refers to another template.
fn nested_template<'t>(field_type: &'t FieldType, template_suffix: &str) -> Option<&'t str> {
    if template_suffix.is_empty() {
        return None;
    }

    match field_type {
        FieldType::Object(name) | FieldType::ReferenceArray(name)
            if simple_type_name(name).ends_with(template_suffix) =>
        {
            Some(name.as_str())
        }
        _ => None,
    }
}
