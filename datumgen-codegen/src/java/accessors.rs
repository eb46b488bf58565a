//! Getter and setter generation.

use crate::java::runtime::TUPLE_ENTRY_FIELD;
use crate::java::syntax::{Method, Statement};
use crate::mapping::{MappedField, StorageStrategy};

/// Generator for the per-field setter/getter pairs.
pub struct AccessorGenerator<'a> {
    fields: &'a [MappedField<'a>],
}

impl<'a> AccessorGenerator<'a> {
    /// Creates a new accessor generator.
    #[must_use]
    pub fn new(fields: &'a [MappedField<'a>]) -> Self {
        Self { fields }
    }

    /// Returns setter then getter for each field, in declaration order.
    #[must_use]
    pub fn accessors(&self) -> Vec<Method> {
        self.fields
            .iter()
            .flat_map(|mapped| [setter(mapped), getter(mapped)])
            .collect()
    }
}

/// Generates the setter for a field.
#[must_use]
pub fn setter(mapped: &MappedField<'_>) -> Method {
    let name = &mapped.field.name;
    let constant = &mapped.field.constant_name;

    let store = match &mapped.strategy {
        StorageStrategy::ReferenceArray { .. } => format!(
            "{TUPLE_ENTRY_FIELD}.setObject({constant}, {name} == null ? null : new Tuple((Object[]) {name}));"
        ),
        StorageStrategy::EnumOrdinal => {
            format!("{TUPLE_ENTRY_FIELD}.setInteger({constant}, {name}.ordinal());")
        }
        StorageStrategy::EpochMillis => {
            format!("{TUPLE_ENTRY_FIELD}.setLong({constant}, {name}.getTime());")
        }
        StorageStrategy::UuidString => {
            format!("{TUPLE_ENTRY_FIELD}.setString({constant}, {name}.toString());")
        }
        StorageStrategy::Int32 => format!("{TUPLE_ENTRY_FIELD}.setInteger({constant}, {name});"),
        StorageStrategy::Int64 => format!("{TUPLE_ENTRY_FIELD}.setLong({constant}, {name});"),
        StorageStrategy::Generic(_) => format!("{TUPLE_ENTRY_FIELD}.setObject({constant}, {name});"),
    };

    Method::new("void", &mapped.field.setter_name)
        .param(&mapped.java_type, name)
        .statement(Statement::line(store))
}

/// Generates the getter for a field.
#[must_use]
pub fn getter(mapped: &MappedField<'_>) -> Method {
    let java_type = &mapped.java_type;
    let constant = &mapped.field.constant_name;

    let body = match &mapped.strategy {
        StorageStrategy::ReferenceArray { element } => read_array(element, constant),
        StorageStrategy::EnumOrdinal => vec![Statement::line(format!(
            "return {java_type}.values()[{TUPLE_ENTRY_FIELD}.getInteger({constant})];"
        ))],
        StorageStrategy::EpochMillis => vec![Statement::line(format!(
            "return new {java_type}({TUPLE_ENTRY_FIELD}.getLong({constant}));"
        ))],
        StorageStrategy::UuidString => vec![Statement::line(format!(
            "return java.util.UUID.fromString({TUPLE_ENTRY_FIELD}.getString({constant}));"
        ))],
        StorageStrategy::Int32 => vec![Statement::line(format!(
            "return {TUPLE_ENTRY_FIELD}.getInteger({constant});"
        ))],
        StorageStrategy::Int64 => vec![Statement::line(format!(
            "return {TUPLE_ENTRY_FIELD}.getLong({constant});"
        ))],
        StorageStrategy::Generic(getter) => {
            let cast = if getter.needs_cast() {
                format!("({java_type})")
            } else {
                String::new()
            };
            vec![Statement::line(format!(
                "return {cast}{TUPLE_ENTRY_FIELD}.{}({constant});",
                getter.method()
            ))]
        }
    };

    Method::new(java_type, &mapped.field.getter_name)
        .doc(mapped.field.doc.clone())
        .statements(body)
}

/// Copies a nested tuple back into a freshly allocated array.
fn read_array(element: &str, constant: &str) -> Vec<Statement> {
    vec![
        Statement::line(format!(
            "Tuple tuple = (Tuple){TUPLE_ENTRY_FIELD}.getObject({constant});"
        )),
        Statement::block("if (tuple == null)", vec![Statement::line("return null;")]),
        Statement::Blank,
        Statement::line(format!("{element}[] result = new {element}[tuple.size()];")),
        Statement::block(
            "for (int i = 0; i < result.length; i++)",
            vec![Statement::line(format!(
                "result[i] = ({element})tuple.getObject(i);"
            ))],
        ),
        Statement::Blank,
        Statement::line("return result;"),
    ]
}
