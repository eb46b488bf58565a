//! Intermediate representation for code generation.
//!
//! This module resolves every name the generator needs up front, so the
//! emission stage never calls back into the naming transforms.

use crate::error::SchemaError;
use crate::naming::{
    CLASS_SUFFIX, TEMPLATE_SUFFIX, accessor_name, constant_name, is_java_identifier,
    is_reserved_word, replace_template_suffix, strip_marker,
};
use crate::types::{FieldDescriptor, FieldType, TemplateDescription};
use crate::validation::validate_template;

/// Intermediate representation of a template for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateIr {
    /// Package name (may be empty).
    pub package: String,
    /// Template simple name.
    pub template_name: String,
    /// Generated class name.
    pub class_name: String,
    /// Resolved fields in declaration order.
    pub fields: Vec<ResolvedField>,
}

impl TemplateIr {
    /// Creates an intermediate representation using the default
    /// `DatumTemplate` → `Datum` naming convention.
    ///
    /// # Errors
    /// Returns `SchemaError` if the template fails validation.
    pub fn from_template(template: &TemplateDescription) -> Result<Self, SchemaError> {
        Self::from_template_with_suffix(template, TEMPLATE_SUFFIX, CLASS_SUFFIX)
    }

    /// Creates an intermediate representation, replacing a trailing
    /// `template_suffix` of the template name with `class_suffix`.
    ///
    /// # Errors
    /// Returns `SchemaError` if the template fails validation or the derived
    /// class name is not an identifier.
    pub fn from_template_with_suffix(
        template: &TemplateDescription,
        template_suffix: &str,
        class_suffix: &str,
    ) -> Result<Self, SchemaError> {
        validate_template(template)?;

        let class_name =
            replace_template_suffix(&template.simple_name, template_suffix, class_suffix);
        if !is_java_identifier(&class_name) || is_reserved_word(&class_name) {
            return Err(SchemaError::invalid_identifier(
                class_name,
                "generated class name",
            ));
        }

        Ok(Self {
            package: template.package_name.clone(),
            template_name: template.simple_name.clone(),
            class_name,
            fields: template
                .fields
                .iter()
                .map(ResolvedField::from_descriptor)
                .collect(),
        })
    }

    /// Returns the field-name constants in declaration order.
    #[must_use]
    pub fn constant_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.constant_name.as_str()).collect()
    }

    /// Returns true if the class name is the template name unchanged.
    #[must_use]
    pub fn keeps_template_name(&self) -> bool {
        self.class_name == self.template_name
    }
}

/// Resolved field information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    /// Raw name as declared on the template.
    pub raw_name: String,
    /// Name with the marker prefix stripped.
    pub name: String,
    /// Field-name constant (`USER_ID_FN`).
    pub constant_name: String,
    /// Setter method name.
    pub setter_name: String,
    /// Getter method name.
    pub getter_name: String,
    /// Declared type.
    pub field_type: FieldType,
    /// Optional documentation.
    pub doc: Option<String>,
}

impl ResolvedField {
    /// Creates a resolved field from a descriptor.
    #[must_use]
    pub fn from_descriptor(field: &FieldDescriptor) -> Self {
        let name = strip_marker(&field.name).to_string();

        Self {
            raw_name: field.name.clone(),
            constant_name: constant_name(&name),
            setter_name: accessor_name(&name, "set"),
            getter_name: accessor_name(&name, "get"),
            field_type: field.field_type.clone(),
            doc: field.doc.clone(),
            name,
        }
    }
}
