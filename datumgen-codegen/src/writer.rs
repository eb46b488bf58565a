//! Indentation-aware source buffer.

/// Line-oriented source writer.
///
/// Every line is prefixed with the current indentation; empty lines carry no
/// trailing whitespace.
#[derive(Debug, Clone)]
pub struct SourceWriter {
    buffer: String,
    indent_unit: String,
    level: usize,
}

impl SourceWriter {
    /// Creates a writer indenting by `indent_width` spaces per level.
    #[must_use]
    pub fn new(indent_width: usize) -> Self {
        Self {
            buffer: String::new(),
            indent_unit: " ".repeat(indent_width),
            level: 0,
        }
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.level {
                self.buffer.push_str(&self.indent_unit);
            }
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Appends text verbatim, ignoring indentation.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Writes `head {` and indents one level.
    pub fn open(&mut self, head: impl AsRef<str>) -> &mut Self {
        self.line(format!("{} {{", head.as_ref()));
        self.indent()
    }

    /// Dedents one level and writes `}`.
    pub fn close(&mut self) -> &mut Self {
        self.close_with("}")
    }

    /// Dedents one level and writes `text` (for closers such as `});`).
    pub fn close_with(&mut self, text: &str) -> &mut Self {
        self.dedent();
        self.line(text)
    }

    /// Increases indentation by one level.
    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Decreases indentation by one level.
    pub fn dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Returns the width in characters of the current indentation.
    #[must_use]
    pub fn indent_width(&self) -> usize {
        self.indent_unit.len() * self.level
    }

    /// Consumes the writer and returns the source text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut writer = SourceWriter::new(4);
        writer.open("class A");
        writer.open("void f()");
        writer.line("return;");
        writer.close();
        writer.close();

        assert_eq!(
            writer.finish(),
            "class A {\n    void f() {\n        return;\n    }\n}\n"
        );
    }

    #[test]
    fn test_blank_lines_have_no_indent() {
        let mut writer = SourceWriter::new(2);
        writer.indent().line("a").blank().line("b");

        assert_eq!(writer.finish(), "  a\n\n  b\n");
    }

    #[test]
    fn test_close_with_and_dedent_floor() {
        let mut writer = SourceWriter::new(4);
        writer.dedent();
        writer.open("x = f(new int[]");
        writer.line("1");
        writer.close_with("});");

        assert_eq!(writer.finish(), "x = f(new int[] {\n    1\n});\n");
    }

    #[test]
    fn test_indent_width() {
        let mut writer = SourceWriter::new(3);
        writer.indent().indent();
        assert_eq!(writer.indent_width(), 6);
    }

    #[test]
    fn test_raw_ignores_indent() {
        let mut writer = SourceWriter::new(4);
        writer.indent().raw("/* x */\n");
        assert_eq!(writer.finish(), "/* x */\n");
    }
}
