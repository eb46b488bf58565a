//! Main code generator.

use crate::error::CodegenError;
use crate::java::runtime::{DEFAULT_BASE_RECORD, FIELDS_CONSTANT, TUPLE_IMPORTS};
use crate::java::{AccessorGenerator, ConstantGenerator, ConstructorGenerator, PrologueGenerator};
use crate::mapping::MappedField;
use crate::writer::SourceWriter;
use datumgen_schema::TemplateDescription;
use datumgen_schema::ir::TemplateIr;
use datumgen_schema::naming::{
    CLASS_SUFFIX, TEMPLATE_SUFFIX, is_java_identifier, is_reserved_word, simple_type_name,
};
use std::path::PathBuf;

/// Generator settings.
///
/// Setters consume and return the configuration so calls can be chained:
///
/// ```
/// use datumgen_codegen::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .indent_width(2)
///     .reject_opaque_objects(true);
/// assert_eq!(config.indent_width, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Width the aggregate `FIELDS` constant must fit in to stay on one line.
    pub max_line_width: usize,
    /// Qualified name of the class every datum extends.
    pub base_record: String,
    /// Trailing part of template names replaced by `class_suffix`.
    pub template_suffix: String,
    /// Replacement for `template_suffix`.
    pub class_suffix: String,
    /// Fail instead of falling back to `getObject` plus a cast.
    pub reject_opaque_objects: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            max_line_width: 100,
            base_record: DEFAULT_BASE_RECORD.to_string(),
            template_suffix: TEMPLATE_SUFFIX.to_string(),
            class_suffix: CLASS_SUFFIX.to_string(),
            reject_opaque_objects: false,
        }
    }
}

impl GeneratorConfig {
    /// Sets the indentation width.
    #[must_use]
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Sets the maximum line width.
    #[must_use]
    pub fn max_line_width(mut self, width: usize) -> Self {
        self.max_line_width = width;
        self
    }

    /// Sets the base record class.
    #[must_use]
    pub fn base_record(mut self, qualified_name: impl Into<String>) -> Self {
        self.base_record = qualified_name.into();
        self
    }

    /// Sets the template suffix.
    #[must_use]
    pub fn template_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.template_suffix = suffix.into();
        self
    }

    /// Sets the class suffix.
    #[must_use]
    pub fn class_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.class_suffix = suffix.into();
        self
    }

    /// Sets whether opaque object fields are rejected.
    #[must_use]
    pub fn reject_opaque_objects(mut self, reject: bool) -> Self {
        self.reject_opaque_objects = reject;
        self
    }
}

/// A generated Java compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Package name (may be empty).
    pub package_name: String,
    /// Generated class name.
    pub class_name: String,
    /// Complete source text.
    pub source: String,
}

impl GeneratedUnit {
    /// Returns the fully qualified class name.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.class_name.clone()
        } else {
            format!("{}.{}", self.package_name, self.class_name)
        }
    }

    /// Returns the source path relative to a source root, e.g.
    /// `com/example/UserDatum.java`.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self
            .package_name
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        path.push(format!("{}.java", self.class_name));
        path
    }
}

/// Java datum generator.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the datum class for a template.
    ///
    /// The output depends only on the template and the configuration.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if the template is invalid,
    /// `CodegenError::UnsupportedType` if a field cannot be stored in a tuple,
    /// and `CodegenError::Generation` if the names involved would not compile.
    pub fn generate(&self, template: &TemplateDescription) -> Result<GeneratedUnit, CodegenError> {
        tracing::debug!("Generating datum for template {}", template.qualified_name());

        let ir = TemplateIr::from_template_with_suffix(
            template,
            &self.config.template_suffix,
            &self.config.class_suffix,
        )?;

        if ir.keeps_template_name() {
            tracing::warn!(
                "Template {} does not end with {}; the datum keeps the template name",
                ir.template_name,
                self.config.template_suffix
            );
        }

        let base_class = self.check_names(&ir)?;

        let fields = ir
            .fields
            .iter()
            .map(|field| MappedField::resolve(field, &self.config))
            .collect::<Result<Vec<_>, _>>()?;

        // A lone Tuple or TupleEntry field would give the value constructor
        // the same signature as one of the wrapping constructors.
        if let [only] = fields.as_slice() {
            if matches!(only.java_type.as_str(), "Tuple" | "TupleEntry") {
                return Err(CodegenError::generation(format!(
                    "single field '{}' of type {} clashes with the {} constructor",
                    only.field.raw_name, only.java_type, only.java_type
                )));
            }
        }

        let mut writer = SourceWriter::new(self.config.indent_width);
        PrologueGenerator::new(&ir.package, &self.config.base_record).write(&mut writer);

        writer.open(format!("public class {} extends {}", ir.class_name, base_class));
        writer.blank();
        ConstantGenerator::new(&ir.class_name, &fields, self.config.max_line_width)
            .write(&mut writer);

        let methods = ConstructorGenerator::new(&ir.class_name, &fields)
            .constructors()
            .into_iter()
            .chain(AccessorGenerator::new(&fields).accessors());
        for method in methods {
            writer.blank();
            method.write_to(&mut writer);
        }
        writer.close();

        let source = writer.finish();
        tracing::debug!(
            "Generated {} with {} fields ({} bytes)",
            ir.class_name,
            fields.len(),
            source.len()
        );

        Ok(GeneratedUnit {
            package_name: ir.package,
            class_name: ir.class_name,
            source,
        })
    }

    /// Checks the names the validator cannot see, returning the base class's
    /// simple name.
    fn check_names<'c>(&'c self, ir: &TemplateIr) -> Result<&'c str, CodegenError> {
        let base_record = self.config.base_record.as_str();
        let valid_base = !base_record.is_empty()
            && base_record
                .split('.')
                .all(|segment| is_java_identifier(segment) && !is_reserved_word(segment));
        if !valid_base {
            return Err(CodegenError::generation(format!(
                "invalid base record class '{base_record}'"
            )));
        }

        let base_class = simple_type_name(base_record);
        if base_class == ir.class_name {
            return Err(CodegenError::generation(format!(
                "class {} cannot extend a base record of the same name",
                ir.class_name
            )));
        }

        let clashes_with_import = TUPLE_IMPORTS
            .iter()
            .any(|import| simple_type_name(import) == ir.class_name);
        if clashes_with_import {
            return Err(CodegenError::generation(format!(
                "class name {} clashes with an imported tuple type",
                ir.class_name
            )));
        }

        // Parameters named FIELDS would shadow the aggregate constant.
        if let Some(field) = ir.fields.iter().find(|f| f.name == FIELDS_CONSTANT) {
            return Err(CodegenError::generation(format!(
                "field '{}' shadows the {FIELDS_CONSTANT} constant",
                field.raw_name
            )));
        }

        // getClass() is final on java.lang.Object and cannot be overridden.
        if let Some(field) = ir.fields.iter().find(|f| f.getter_name == "getClass") {
            return Err(CodegenError::generation(format!(
                "field '{}' would override the final Object.getClass()",
                field.raw_name
            )));
        }

        Ok(base_class)
    }
}
