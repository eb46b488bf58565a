//! Structured Java statements and methods.
//!
//! Generators build these values instead of concatenating strings, and the
//! generator renders them through a [`SourceWriter`].

use crate::writer::SourceWriter;

/// A statement inside a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A single line, written as-is.
    Line(String),
    /// An empty line.
    Blank,
    /// `head {` body `}`.
    Block {
        /// Text before the opening brace.
        head: String,
        /// Nested statements.
        body: Vec<Statement>,
    },
}

impl Statement {
    /// Creates a single-line statement.
    #[must_use]
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    /// Creates a braced block.
    #[must_use]
    pub fn block(head: impl Into<String>, body: Vec<Statement>) -> Self {
        Self::Block {
            head: head.into(),
            body,
        }
    }

    /// Renders the statement.
    pub fn write_to(&self, writer: &mut SourceWriter) {
        match self {
            Self::Line(text) => {
                writer.line(text);
            }
            Self::Blank => {
                writer.blank();
            }
            Self::Block { head, body } => {
                writer.open(head);
                for statement in body {
                    statement.write_to(writer);
                }
                writer.close();
            }
        }
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Java type name.
    pub type_name: String,
    /// Parameter name.
    pub name: String,
}

impl Param {
    /// Creates a parameter.
    #[must_use]
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

/// A public method or constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Documentation emitted above the declaration.
    pub doc: Option<String>,
    /// Return type; `None` for constructors.
    pub return_type: Option<String>,
    /// Method (or class) name.
    pub name: String,
    /// Parameters in order.
    pub params: Vec<Param>,
    /// Body statements.
    pub body: Vec<Statement>,
}

impl Method {
    /// Creates a method returning `return_type`.
    #[must_use]
    pub fn new(return_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            doc: None,
            return_type: Some(return_type.into()),
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Creates a constructor for `class_name`.
    #[must_use]
    pub fn constructor(class_name: impl Into<String>) -> Self {
        Self {
            doc: None,
            return_type: None,
            name: class_name.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Sets the documentation.
    #[must_use]
    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        self.params.push(Param::new(type_name, name));
        self
    }

    /// Appends a statement.
    #[must_use]
    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    /// Appends several statements.
    #[must_use]
    pub fn statements(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        self.body.extend(statements);
        self
    }

    /// Returns the declaration line without the opening brace.
    #[must_use]
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.type_name, p.name))
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(return_type) => format!("public {} {}({})", return_type, self.name, params),
            None => format!("public {}({})", self.name, params),
        }
    }

    /// Renders the method.
    pub fn write_to(&self, writer: &mut SourceWriter) {
        if let Some(doc) = &self.doc {
            write_doc(writer, doc);
        }

        writer.open(self.signature());
        for statement in &self.body {
            statement.write_to(writer);
        }
        writer.close();
    }
}

/// Writes a Javadoc comment, one line or boxed.
pub fn write_doc(writer: &mut SourceWriter, doc: &str) {
    let escaped = escape_for_javadoc(doc);
    let lines: Vec<&str> = escaped.lines().map(str::trim_end).collect();

    if lines.len() <= 1 {
        writer.line(format!("/** {} */", lines.first().copied().unwrap_or_default()));
        return;
    }

    writer.line("/**");
    for line in lines {
        if line.is_empty() {
            writer.line(" *");
        } else {
            writer.line(format!(" * {line}"));
        }
    }
    writer.line(" */");
}

/// Replaces comment terminators so documentation cannot end the comment.
///
/// `javac` translates `\uXXXX` escapes before it sees comments, so their
/// backslash is replaced too.
#[must_use]
pub fn escape_for_javadoc(doc: &str) -> String {
    doc.replace("\\u", "&#92;u").replace("*/", "*&#47;")
}

/// Quotes `text` as a Java string literal.
#[must_use]
pub fn string_literal(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');
    for c in text.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_signature() {
        let method = Method::new("void", "setAge").param("int", "age");
        assert_eq!(method.signature(), "public void setAge(int age)");

        let ctor = Method::constructor("UserDatum")
            .param("int", "userId")
            .param("java.util.Date", "signupDate");
        assert_eq!(
            ctor.signature(),
            "public UserDatum(int userId, java.util.Date signupDate)"
        );
        assert_eq!(Method::constructor("UserDatum").signature(), "public UserDatum()");
    }

    #[test]
    fn test_method_write_to() {
        let method = Method::new("int", "getAge")
            .statement(Statement::line("return _tupleEntry.getInteger(AGE_FN);"));
        let mut writer = SourceWriter::new(4);
        writer.indent();
        method.write_to(&mut writer);

        assert_eq!(
            writer.finish(),
            "    public int getAge() {\n        return _tupleEntry.getInteger(AGE_FN);\n    }\n"
        );
    }

    #[test]
    fn test_block_statement() {
        let statement = Statement::block(
            "if (x == null)",
            vec![Statement::line("return null;")],
        );
        let mut writer = SourceWriter::new(2);
        statement.write_to(&mut writer);
        Statement::Blank.write_to(&mut writer);

        assert_eq!(writer.finish(), "if (x == null) {\n  return null;\n}\n\n");
    }

    #[test]
    fn test_single_line_doc() {
        let mut writer = SourceWriter::new(4);
        write_doc(&mut writer, "The user's id");
        assert_eq!(writer.finish(), "/** The user's id */\n");
    }

    #[test]
    fn test_multi_line_doc() {
        let mut writer = SourceWriter::new(4);
        write_doc(&mut writer, "First line\n\nSecond line");
        assert_eq!(
            writer.finish(),
            "/**\n * First line\n *\n * Second line\n */\n"
        );
    }

    #[test]
    fn test_escape_for_javadoc() {
        assert_eq!(escape_for_javadoc("ends */ here"), "ends *&#47; here");
    }

    #[test]
    fn test_escape_for_javadoc_unicode_escapes() {
        assert_eq!(escape_for_javadoc("star \\u002a/"), "star &#92;u002a/");
        assert_eq!(escape_for_javadoc("\\uuu002a/ */"), "&#92;uuu002a/ *&#47;");
        assert_eq!(escape_for_javadoc("C:\\temp"), "C:\\temp");
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(string_literal("userId"), "\"userId\"");
        assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
