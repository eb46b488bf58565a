//! File header, package declaration and imports.

use crate::java::runtime::{FILE_HEADER, TUPLE_IMPORTS};
use crate::writer::SourceWriter;

/// Generator for everything above the class declaration.
pub struct PrologueGenerator<'a> {
    package: &'a str,
    base_record: &'a str,
}

impl<'a> PrologueGenerator<'a> {
    /// Creates a new prologue generator.
    #[must_use]
    pub fn new(package: &'a str, base_record: &'a str) -> Self {
        Self {
            package,
            base_record,
        }
    }

    /// Returns the import list in emission order.
    #[must_use]
    pub fn imports(&self) -> Vec<&'a str> {
        let mut imports = TUPLE_IMPORTS.to_vec();

        // A base record in the default package cannot be imported.
        if self.base_record.contains('.') {
            imports.push(self.base_record);
        }

        imports
    }

    /// Writes the prologue.
    pub fn write(&self, writer: &mut SourceWriter) {
        writer.raw(FILE_HEADER);
        writer.blank();

        if !self.package.is_empty() {
            writer.line(format!("package {};", self.package));
            writer.blank();
        }

        for import in self.imports() {
            writer.line(format!("import {import};"));
        }
        writer.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::java::runtime::DEFAULT_BASE_RECORD;

    #[test]
    fn test_prologue_with_package() {
        let mut writer = SourceWriter::new(4);
        PrologueGenerator::new("com.example", DEFAULT_BASE_RECORD).write(&mut writer);
        let output = writer.finish();

        assert!(output.starts_with(FILE_HEADER));
        assert!(output.starts_with(
            "/**\n * Autogenerated by Scale Unlimited's DatumCompiler\n * \n * DO NOT EDIT"
        ));
        assert!(output.contains("\npackage com.example;\n\nimport cascading.tuple.Fields;\n"));
        assert!(output.ends_with(
            "import cascading.tuple.TupleEntry;\nimport com.scaleunlimited.cascading.BaseDatum;\n\n"
        ));
    }

    #[test]
    fn test_prologue_default_package() {
        let mut writer = SourceWriter::new(4);
        PrologueGenerator::new("", DEFAULT_BASE_RECORD).write(&mut writer);
        let output = writer.finish();

        assert!(!output.contains("package"));
        assert!(output.contains(" */\n\nimport cascading.tuple.Fields;"));
    }

    #[test]
    fn test_unqualified_base_record_not_imported() {
        let generator = PrologueGenerator::new("com.example", "BaseDatum");
        assert_eq!(generator.imports(), TUPLE_IMPORTS);
    }
}
