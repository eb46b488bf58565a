//! Attribute parsing and Rust-to-JVM type mapping.

use datumgen_schema::{
    FieldDescriptor, FieldType, Primitive, TemplateDescription, validate_template,
};
use syn::spanned::Spanned;
use syn::{
    Attribute, Data, DeriveInput, Error, Expr, ExprLit, Fields, GenericArgument, Lit, LitStr,
    Meta, PathArguments, Result, Type,
};

/// A fully parsed and validated template.
pub struct TemplateInput {
    pub description: TemplateDescription,
}

impl TemplateInput {
    pub fn from_derive(input: &DeriveInput) -> Result<Self> {
        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => &named.named,
                _ => {
                    return Err(Error::new(
                        input.ident.span(),
                        "DatumTemplate requires a struct with named fields",
                    ));
                }
            },
            _ => {
                return Err(Error::new(
                    input.ident.span(),
                    "DatumTemplate can only be derived for structs",
                ));
            }
        };

        let container = ContainerAttrs::parse(&input.attrs)?;
        let mut description = TemplateDescription::new(
            container.package.unwrap_or_default(),
            container.name.unwrap_or_else(|| input.ident.to_string()),
        );

        for field in fields {
            let attrs = FieldAttrs::parse(&field.attrs)?;
            if attrs.skip {
                continue;
            }

            let name = match (&attrs.rename, &field.ident) {
                (Some(rename), _) => rename.value(),
                (None, Some(ident)) => camel_case(&ident.to_string()),
                (None, None) => return Err(Error::new(field.span(), "unnamed field")),
            };

            let field_type = attrs.field_type(&field.ty)?;
            let descriptor = FieldDescriptor::new(name, field_type);
            description.add_field(match doc_comment(&field.attrs) {
                Some(doc) => descriptor.with_doc(doc),
                None => descriptor,
            });
        }

        validate_template(&description).map_err(|err| {
            Error::new(
                input.ident.span(),
                format!("invalid datum template: {err}"),
            )
        })?;

        Ok(Self { description })
    }
}

#[derive(Default)]
struct ContainerAttrs {
    package: Option<String>,
    name: Option<String>,
}

impl ContainerAttrs {
    fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut result = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("datum")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("package") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.package = Some(value.value());
                } else if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.name = Some(value.value());
                } else {
                    return Err(meta.error(format!(
                        "unknown datum attribute: `{}`",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }
}

#[derive(Default)]
struct FieldAttrs {
    java: Option<LitStr>,
    enumeration: Option<LitStr>,
    rename: Option<LitStr>,
    skip: bool,
}

impl FieldAttrs {
    fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut result = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("datum")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("java") {
                    result.java = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("enumeration") {
                    result.enumeration = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("rename") {
                    result.rename = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                } else {
                    return Err(meta.error(format!(
                        "unknown datum field attribute: `{}`",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }

        if let (Some(_), Some(enumeration)) = (&result.java, &result.enumeration) {
            return Err(Error::new(
                enumeration.span(),
                "`java` and `enumeration` cannot both be set",
            ));
        }

        Ok(result)
    }

    fn field_type(&self, ty: &Type) -> Result<FieldType> {
        if let Some(java) = &self.java {
            return FieldType::from_jvm_name(&java.value())
                .map_err(|err| Error::new(java.span(), err.to_string()));
        }

        if let Some(enumeration) = &self.enumeration {
            return match FieldType::from_jvm_name(&enumeration.value()) {
                Ok(FieldType::Object(name)) => Ok(FieldType::Enum(name)),
                _ => Err(Error::new(
                    enumeration.span(),
                    format!("`{}` is not an enum type name", enumeration.value()),
                )),
            };
        }

        rust_type(ty).ok_or_else(|| {
            Error::new(
                ty.span(),
                "no default JVM type for this field; add #[datum(java = \"...\")]",
            )
        })
    }
}

/// Maps a Rust field type onto its default JVM type.
fn rust_type(ty: &Type) -> Option<FieldType> {
    let (name, argument) = last_segment(ty)?;

    match (name.as_str(), argument) {
        ("String", None) => Some(FieldType::String),
        ("Uuid", None) => Some(FieldType::Uuid),
        ("SystemTime", None) => Some(FieldType::Date),
        ("Option", Some(inner)) => match rust_type(inner)? {
            FieldType::Primitive(primitive) => Some(FieldType::Boxed(primitive)),
            FieldType::String => Some(FieldType::String),
            _ => None,
        },
        ("Vec", Some(inner)) => match rust_type(inner)? {
            FieldType::String => Some(FieldType::ReferenceArray("java.lang.String".to_string())),
            _ => None,
        },
        (scalar, None) => rust_primitive(scalar).map(FieldType::Primitive),
        _ => None,
    }
}

fn rust_primitive(name: &str) -> Option<Primitive> {
    match name {
        "bool" => Some(Primitive::Boolean),
        "i16" => Some(Primitive::Short),
        "i32" => Some(Primitive::Int),
        "i64" => Some(Primitive::Long),
        "f32" => Some(Primitive::Float),
        "f64" => Some(Primitive::Double),
        _ => None,
    }
}

/// Returns the last path segment and its single type argument, if any.
fn last_segment(ty: &Type) -> Option<(String, Option<&Type>)> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }

    let segment = path.path.segments.last()?;
    let argument = match &segment.arguments {
        PathArguments::None => None,
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first() {
            Some(GenericArgument::Type(inner)) => Some(inner),
            _ => return None,
        },
        _ => return None,
    };

    Some((segment.ident.to_string(), argument))
}

/// Converts a snake_case identifier to camelCase, keeping leading underscores.
pub fn camel_case(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let body = ident.trim_start_matches('_');
    let mut result = ident[..ident.len() - body.len()].to_string();

    for (i, word) in body.split('_').filter(|w| !w.is_empty()).enumerate() {
        if i == 0 {
            result.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}

/// Joins `///` comments, dropping the space rustdoc leaves after `///`.
fn doc_comment(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|a| a.path().is_ident("doc"))
        .filter_map(|a| match &a.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').unwrap_or(&line).to_string())
        .collect();

    let doc = lines.join("\n").trim().to_string();
    (!doc.is_empty()).then_some(doc)
}
