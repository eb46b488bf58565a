//! Constructor generation.

use crate::java::runtime::{FIELDS_CONSTANT, VALIDATE_FIELDS_FN};
use crate::java::syntax::{Method, Statement};
use crate::mapping::MappedField;

/// Generator for the four datum constructors.
pub struct ConstructorGenerator<'a> {
    class_name: &'a str,
    fields: &'a [MappedField<'a>],
}

impl<'a> ConstructorGenerator<'a> {
    /// Creates a new constructor generator.
    #[must_use]
    pub fn new(class_name: &'a str, fields: &'a [MappedField<'a>]) -> Self {
        Self { class_name, fields }
    }

    /// Returns the constructors in emission order: empty, from a tuple,
    /// from a tuple entry, and from one value per field.
    #[must_use]
    pub fn constructors(&self) -> Vec<Method> {
        vec![
            self.empty(),
            self.from_tuple(),
            self.from_tuple_entry(),
            self.from_values(),
        ]
    }

    fn empty(&self) -> Method {
        Method::constructor(self.class_name)
            .statement(Statement::line(format!("super({FIELDS_CONSTANT});")))
    }

    fn from_tuple(&self) -> Method {
        Method::constructor(self.class_name)
            .param("Tuple", "tuple")
            .statement(Statement::line(format!("super({FIELDS_CONSTANT}, tuple);")))
    }

    /// The entry brings its own fields, which must match ours exactly.
    fn from_tuple_entry(&self) -> Method {
        Method::constructor(self.class_name)
            .param("TupleEntry", "tupleEntry")
            .statement(Statement::line("super(tupleEntry);"))
            .statement(Statement::line(format!(
                "{VALIDATE_FIELDS_FN}(tupleEntry, {FIELDS_CONSTANT});"
            )))
    }

    fn from_values(&self) -> Method {
        let method = self
            .fields
            .iter()
            .fold(Method::constructor(self.class_name), |method, mapped| {
                method.param(&mapped.java_type, &mapped.field.name)
            })
            .statement(Statement::line(format!("super({FIELDS_CONSTANT});")))
            .statement(Statement::Blank);

        method.statements(self.fields.iter().map(|mapped| {
            Statement::line(format!(
                "{}({});",
                mapped.field.setter_name, mapped.field.name
            ))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorConfig;
    use crate::writer::SourceWriter;
    use datumgen_schema::ir::ResolvedField;
    use datumgen_schema::types::{FieldDescriptor, FieldType, Primitive};

    fn fields() -> Vec<ResolvedField> {
        [
            ("_a", FieldType::Primitive(Primitive::Int)),
            ("_b", FieldType::String),
            ("_c", FieldType::Date),
        ]
        .into_iter()
        .map(|(name, field_type)| {
            ResolvedField::from_descriptor(&FieldDescriptor::new(name, field_type))
        })
        .collect()
    }

    fn constructors(fields: &[ResolvedField]) -> Vec<Method> {
        let config = GeneratorConfig::default();
        let mapped: Vec<MappedField<'_>> = fields
            .iter()
            .map(|f| MappedField::resolve(f, &config).unwrap())
            .collect();
        ConstructorGenerator::new("AbcDatum", &mapped).constructors()
    }

    #[test]
    fn test_constructor_order() {
        let fields = fields();
        let signatures: Vec<String> = constructors(&fields)
            .iter()
            .map(Method::signature)
            .collect();

        assert_eq!(
            signatures,
            [
                "public AbcDatum()",
                "public AbcDatum(Tuple tuple)",
                "public AbcDatum(TupleEntry tupleEntry)",
                "public AbcDatum(int a, String b, java.util.Date c)",
            ]
        );
    }

    #[test]
    fn test_tuple_entry_constructor_validates() {
        let fields = fields();
        let ctors = constructors(&fields);
        let ctor = &ctors[2];

        assert_eq!(
            ctor.body,
            [
                Statement::line("super(tupleEntry);"),
                Statement::line("validateFields(tupleEntry, FIELDS);"),
            ]
        );
    }

    #[test]
    fn test_value_constructor_calls_setters_in_order() {
        let fields = fields();
        let ctors = constructors(&fields);
        let ctor = &ctors[3];
        let mut writer = SourceWriter::new(4);
        ctor.write_to(&mut writer);

        assert_eq!(
            writer.finish(),
            concat!(
                "public AbcDatum(int a, String b, java.util.Date c) {\n",
                "    super(FIELDS);\n",
                "\n",
                "    setA(a);\n",
                "    setB(b);\n",
                "    setC(c);\n",
                "}\n"
            )
        );
    }
}
