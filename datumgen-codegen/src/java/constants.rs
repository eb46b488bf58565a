//! Field-name constants.

use crate::java::runtime::{FIELD_NAME_FN, FIELDS_CONSTANT};
use crate::java::syntax::string_literal;
use crate::mapping::MappedField;
use crate::writer::SourceWriter;

/// Generator for the per-field constants and the aggregate `FIELDS`.
pub struct ConstantGenerator<'a> {
    class_name: &'a str,
    fields: &'a [MappedField<'a>],
    max_line_width: usize,
}

impl<'a> ConstantGenerator<'a> {
    /// Creates a new constant generator.
    #[must_use]
    pub fn new(class_name: &'a str, fields: &'a [MappedField<'a>], max_line_width: usize) -> Self {
        Self {
            class_name,
            fields,
            max_line_width,
        }
    }

    /// Writes one constant per field, a blank line, then `FIELDS`.
    pub fn write(&self, writer: &mut SourceWriter) {
        for mapped in self.fields {
            writer.line(format!(
                "public static final String {} = {}({}.class, {});",
                mapped.field.constant_name,
                FIELD_NAME_FN,
                self.class_name,
                string_literal(&mapped.field.name)
            ));
        }
        writer.blank();
        self.write_aggregate(writer);
    }

    /// Writes `FIELDS` on one line when it fits, else one constant per line.
    fn write_aggregate(&self, writer: &mut SourceWriter) {
        let head = format!("public static final Fields {FIELDS_CONSTANT} = new Fields(new String[]");
        let names: Vec<&str> = self
            .fields
            .iter()
            .map(|f| f.field.constant_name.as_str())
            .collect();

        let single = format!("{} {{{}}});", head, names.join(", "));
        if writer.indent_width() + single.chars().count() <= self.max_line_width {
            writer.line(single);
            return;
        }

        writer.open(head);
        let last = names.len().saturating_sub(1);
        for (i, name) in names.iter().enumerate() {
            if i == last {
                writer.line(*name);
            } else {
                writer.line(format!("{name},"));
            }
        }
        writer.close_with("});");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorConfig;
    use datumgen_schema::ir::ResolvedField;
    use datumgen_schema::types::{FieldDescriptor, FieldType, Primitive};

    fn resolved(names: &[&str]) -> Vec<ResolvedField> {
        names
            .iter()
            .map(|name| {
                ResolvedField::from_descriptor(&FieldDescriptor::new(
                    *name,
                    FieldType::Primitive(Primitive::Long),
                ))
            })
            .collect()
    }

    fn render(fields: &[ResolvedField], max_line_width: usize) -> String {
        let config = GeneratorConfig::default();
        let mapped: Vec<MappedField<'_>> = fields
            .iter()
            .map(|f| MappedField::resolve(f, &config).unwrap())
            .collect();
        let mut writer = SourceWriter::new(4);
        writer.indent();
        ConstantGenerator::new("UserDatum", &mapped, max_line_width).write(&mut writer);
        writer.finish()
    }

    #[test]
    fn test_field_name_constants() {
        let fields = resolved(&["_userId", "_signupDate"]);
        let output = render(&fields, 100);

        assert!(output.contains(
            "    public static final String USER_ID_FN = fieldName(UserDatum.class, \"userId\");\n"
        ));
        assert!(output.contains(
            "    public static final String SIGNUP_DATE_FN = fieldName(UserDatum.class, \"signupDate\");\n"
        ));
    }

    #[test]
    fn test_aggregate_single_line_preserves_order() {
        let fields = resolved(&["c", "a", "b"]);
        let output = render(&fields, 100);

        assert!(output.ends_with(
            "\n\n    public static final Fields FIELDS = new Fields(new String[] {C_FN, A_FN, B_FN});\n"
        ));
    }

    #[test]
    fn test_aggregate_wraps_when_too_long() {
        let fields = resolved(&["c", "a", "b"]);
        let output = render(&fields, 40);

        assert!(output.ends_with(concat!(
            "    public static final Fields FIELDS = new Fields(new String[] {\n",
            "        C_FN,\n",
            "        A_FN,\n",
            "        B_FN\n",
            "    });\n"
        )));
    }
}
