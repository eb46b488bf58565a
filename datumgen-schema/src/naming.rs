//! Naming transforms.
//!
//! Every generated identifier is derived from a raw template field name or
//! the template's simple name by the pure functions in this module. None of
//! them look at type information.

/// Character marking an internal storage field (`_userId`).
pub const MARKER: char = '_';

/// Suffix a template's simple name is expected to end with.
pub const TEMPLATE_SUFFIX: &str = "DatumTemplate";

/// Replacement for [`TEMPLATE_SUFFIX`] in the generated class name.
pub const CLASS_SUFFIX: &str = "Datum";

/// Suffix appended to every field-name constant.
pub const CONSTANT_SUFFIX: &str = "_FN";

/// Java keywords and literals that can never be used as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Removes the leading run of marker characters from a raw field name.
///
/// Names without a marker are returned unchanged.
#[must_use]
pub fn strip_marker(name: &str) -> &str {
    name.trim_start_matches(MARKER)
}

/// Derives the generated class name from a template's simple name.
///
/// A trailing `DatumTemplate` becomes `Datum`; names without that suffix pass
/// through unchanged.
#[must_use]
pub fn class_name_from_template_name(simple_name: &str) -> String {
    replace_template_suffix(simple_name, TEMPLATE_SUFFIX, CLASS_SUFFIX)
}

/// Replaces a trailing `suffix` of `simple_name` with `replacement`.
///
/// Only a trailing occurrence is replaced; an embedded one is left alone.
#[must_use]
pub fn replace_template_suffix(simple_name: &str, suffix: &str, replacement: &str) -> String {
    if suffix.is_empty() {
        return simple_name.to_string();
    }

    match simple_name.strip_suffix(suffix) {
        Some(stem) => format!("{stem}{replacement}"),
        None => simple_name.to_string(),
    }
}

/// Converts a camelCase field name into an upper-snake-case constant name.
///
/// A separator goes before an uppercase character that follows a lowercase
/// letter or digit, and before the last capital of an acronym run when a
/// lowercase character follows it, so `HTMLParser` becomes `HTML_PARSER_FN`.
#[must_use]
pub fn constant_name(field_name: &str) -> String {
    let chars: Vec<char> = field_name.chars().collect();
    let mut result = String::with_capacity(field_name.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());

            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                result.push('_');
            }
        }

        result.extend(c.to_uppercase());
    }

    result.push_str(CONSTANT_SUFFIX);
    result
}

/// Builds an accessor name: `prefix` followed by the capitalized field name.
#[must_use]
pub fn accessor_name(field_name: &str, prefix: &str) -> String {
    let mut result = String::with_capacity(prefix.len() + field_name.len());
    result.push_str(prefix);

    let mut chars = field_name.chars();
    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
        result.push_str(chars.as_str());
    }

    result
}

/// Returns true if `name` is lexically a Java identifier.
///
/// Reserved words are accepted here; see [`is_reserved_word`].
#[must_use]
pub fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }

    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Returns true if `name` is a Java keyword or literal.
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Returns the unqualified part of a dotted name.
#[must_use]
pub fn simple_type_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}
