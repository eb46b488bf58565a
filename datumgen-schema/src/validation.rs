//! Template validation.
//!
//! Generation must never produce partial or corrupt output, so every
//! template is checked here before any source is emitted.

use crate::error::SchemaError;
use crate::naming::{
    accessor_name, constant_name, is_java_identifier, is_reserved_word, strip_marker,
};
use crate::types::TemplateDescription;
use std::collections::HashMap;

/// Validates a template description.
///
/// # Arguments
/// * `template` - The template to validate
///
/// # Returns
/// Ok(()) if valid, or the first `SchemaError` found.
///
/// # Errors
/// Returns `SchemaError` if the template name, package or any field is
/// unusable.
pub fn validate_template(template: &TemplateDescription) -> Result<(), SchemaError> {
    validate_template_name(&template.simple_name)?;
    validate_package(&template.package_name)?;

    if template.fields.is_empty() {
        return Err(SchemaError::NoFields {
            template: template.simple_name.clone(),
        });
    }

    validate_fields(template)
}

fn validate_template_name(simple_name: &str) -> Result<(), SchemaError> {
    if simple_name.is_empty() {
        return Err(SchemaError::EmptyTemplateName);
    }

    if !is_java_identifier(simple_name) || is_reserved_word(simple_name) {
        return Err(SchemaError::invalid_identifier(simple_name, "template name"));
    }

    Ok(())
}

fn validate_package(package: &str) -> Result<(), SchemaError> {
    if package.is_empty() {
        return Ok(());
    }

    match package
        .split('.')
        .find(|segment| !is_java_identifier(segment) || is_reserved_word(segment))
    {
        Some(segment) => Err(SchemaError::InvalidPackage {
            package: package.to_string(),
            segment: segment.to_string(),
        }),
        None => Ok(()),
    }
}

/// Validates field names and types, then checks for duplicate names,
/// constants and accessors.
fn validate_fields(template: &TemplateDescription) -> Result<(), SchemaError> {
    let mut by_name: HashMap<&str, &str> = HashMap::new();
    let mut by_constant: HashMap<String, &str> = HashMap::new();
    let mut by_accessor: HashMap<String, &str> = HashMap::new();

    for (index, field) in template.fields.iter().enumerate() {
        if field.name.is_empty() {
            return Err(SchemaError::MissingFieldName { index });
        }

        let stripped = strip_marker(&field.name);
        if !is_java_identifier(stripped) {
            return Err(SchemaError::InvalidFieldName {
                field: field.name.clone(),
            });
        }

        if is_reserved_word(stripped) {
            return Err(SchemaError::ReservedWord {
                field: field.name.clone(),
                word: stripped.to_string(),
            });
        }

        field
            .field_type
            .check_type_names()
            .map_err(|err| match err {
                SchemaError::UnsupportedType { type_name, reason } => {
                    SchemaError::unsupported_type(
                        type_name,
                        format!("{reason} (field '{}')", field.name),
                    )
                }
                other => other,
            })?;

        if let Some(first) = by_name.insert(stripped, &field.name) {
            return Err(SchemaError::DuplicateField {
                name: stripped.to_string(),
                first: first.to_string(),
                second: field.name.clone(),
            });
        }

        let constant = constant_name(stripped);
        if let Some(first) = by_constant.get(&constant) {
            return Err(SchemaError::ConstantCollision {
                first: (*first).to_string(),
                second: field.name.clone(),
                constant,
            });
        }
        by_constant.insert(constant, &field.name);

        // Getters share the capitalized stem, so the setter name is enough.
        let accessor = accessor_name(stripped, "set");
        if let Some(first) = by_accessor.get(&accessor) {
            return Err(SchemaError::AccessorCollision {
                first: (*first).to_string(),
                second: field.name.clone(),
                accessor,
            });
        }
        by_accessor.insert(accessor, &field.name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldType, Primitive};

    fn template_with(names: &[&str]) -> TemplateDescription {
        names
            .iter()
            .fold(
                TemplateDescription::builder("com.example", "UserDatumTemplate"),
                |builder, name| builder.field(*name, FieldType::Primitive(Primitive::Int)),
            )
            .build()
    }

    #[test]
    fn test_valid_template() {
        let template = template_with(&["_userId", "_signupDate"]);
        assert!(validate_template(&template).is_ok());
    }

    #[test]
    fn test_default_package_is_valid() {
        let mut template = template_with(&["id"]);
        template.package_name.clear();
        assert!(validate_template(&template).is_ok());
    }

    #[test]
    fn test_empty_template_name() {
        let mut template = template_with(&["id"]);
        template.simple_name.clear();
        assert_eq!(
            validate_template(&template),
            Err(SchemaError::EmptyTemplateName)
        );
    }

    #[test]
    fn test_invalid_template_name() {
        let mut template = template_with(&["id"]);
        template.simple_name = "User-Template".to_string();
        assert!(matches!(
            validate_template(&template),
            Err(SchemaError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_invalid_package() {
        let mut template = template_with(&["id"]);
        template.package_name = "com.example..model".to_string();
        assert_eq!(
            validate_template(&template),
            Err(SchemaError::InvalidPackage {
                package: "com.example..model".to_string(),
                segment: String::new(),
            })
        );

        template.package_name = "com.new.model".to_string();
        assert!(matches!(
            validate_template(&template),
            Err(SchemaError::InvalidPackage { segment, .. }) if segment == "new"
        ));
    }

    #[test]
    fn test_no_fields() {
        let template = TemplateDescription::new("com.example", "EmptyDatumTemplate");
        assert_eq!(
            validate_template(&template),
            Err(SchemaError::NoFields {
                template: "EmptyDatumTemplate".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_field_name_reports_index() {
        let template = template_with(&["_id", ""]);
        assert_eq!(
            validate_template(&template),
            Err(SchemaError::MissingFieldName { index: 1 })
        );
    }

    #[test]
    fn test_marker_only_field_name() {
        let template = template_with(&["___"]);
        assert_eq!(
            validate_template(&template),
            Err(SchemaError::InvalidFieldName {
                field: "___".to_string(),
            })
        );
    }

    #[test]
    fn test_reserved_word_field() {
        let template = template_with(&["_class"]);
        assert_eq!(
            validate_template(&template),
            Err(SchemaError::ReservedWord {
                field: "_class".to_string(),
                word: "class".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_after_strip() {
        let template = template_with(&["_id", "id"]);
        assert_eq!(
            validate_template(&template),
            Err(SchemaError::DuplicateField {
                name: "id".to_string(),
                first: "_id".to_string(),
                second: "id".to_string(),
            })
        );
    }

    #[test]
    fn test_constant_collision() {
        let template = template_with(&["url", "Url"]);
        assert_eq!(
            validate_template(&template),
            Err(SchemaError::ConstantCollision {
                first: "url".to_string(),
                second: "Url".to_string(),
                constant: "URL_FN".to_string(),
            })
        );
    }

    #[test]
    fn test_accessor_collision() {
        let template = template_with(&["aB", "AB"]);
        assert_eq!(
            validate_template(&template),
            Err(SchemaError::AccessorCollision {
                first: "aB".to_string(),
                second: "AB".to_string(),
                accessor: "setAB".to_string(),
            })
        );
    }

    #[test]
    fn test_unchecked_type_names_rejected() {
        let cases = [
            FieldType::enumeration(""),
            FieldType::Object("not a type".to_string()),
            FieldType::ReferenceArray("int".to_string()),
            FieldType::enumeration("boolean"),
        ];

        for field_type in cases {
            let template = TemplateDescription::builder("com.example", "UserDatumTemplate")
                .field("_x", field_type.clone())
                .build();
            assert!(
                matches!(
                    validate_template(&template),
                    Err(SchemaError::UnsupportedType { ref reason, .. }) if reason.contains("'_x'")
                ),
                "{field_type:?} should be rejected"
            );
        }
    }
}
