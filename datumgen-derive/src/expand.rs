//! Token generation for the `DatumTemplate` impl.

use crate::parse::TemplateInput;
use datumgen_schema::{FieldDescriptor, FieldType, Primitive};
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

pub fn expand(input: &DeriveInput, template: &TemplateInput) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let package = &template.description.package_name;
    let simple_name = &template.description.simple_name;
    let fields = template.description.fields.iter().map(field_tokens);

    quote! {
        impl #impl_generics ::datumgen::schema::DatumTemplate for #ident #ty_generics #where_clause {
            fn template_description() -> ::datumgen::schema::TemplateDescription {
                let mut template = ::datumgen::schema::TemplateDescription::new(#package, #simple_name);
                #( template.add_field(#fields); )*
                template
            }
        }
    }
}

fn field_tokens(field: &FieldDescriptor) -> TokenStream {
    let name = &field.name;
    let field_type = field_type_tokens(&field.field_type);
    let descriptor = quote!(::datumgen::schema::FieldDescriptor::new(#name, #field_type));

    match &field.doc {
        Some(doc) => quote!(#descriptor.with_doc(#doc)),
        None => descriptor,
    }
}

fn field_type_tokens(field_type: &FieldType) -> TokenStream {
    let owned = |name: &str| quote!(::std::string::String::from(#name));

    match field_type {
        FieldType::Primitive(p) => {
            let p = primitive_tokens(*p);
            quote!(::datumgen::schema::FieldType::Primitive(#p))
        }
        FieldType::Boxed(p) => {
            let p = primitive_tokens(*p);
            quote!(::datumgen::schema::FieldType::Boxed(#p))
        }
        FieldType::String => quote!(::datumgen::schema::FieldType::String),
        FieldType::Date => quote!(::datumgen::schema::FieldType::Date),
        FieldType::Uuid => quote!(::datumgen::schema::FieldType::Uuid),
        FieldType::Enum(name) => {
            let name = owned(name);
            quote!(::datumgen::schema::FieldType::Enum(#name))
        }
        FieldType::ReferenceArray(element) => {
            let element = owned(element);
            quote!(::datumgen::schema::FieldType::ReferenceArray(#element))
        }
        FieldType::Object(name) => {
            let name = owned(name);
            quote!(::datumgen::schema::FieldType::Object(#name))
        }
    }
}

fn primitive_tokens(primitive: Primitive) -> TokenStream {
    match primitive {
        Primitive::Boolean => quote!(::datumgen::schema::Primitive::Boolean),
        Primitive::Short => quote!(::datumgen::schema::Primitive::Short),
        Primitive::Int => quote!(::datumgen::schema::Primitive::Int),
        Primitive::Long => quote!(::datumgen::schema::Primitive::Long),
        Primitive::Float => quote!(::datumgen::schema::Primitive::Float),
        Primitive::Double => quote!(::datumgen::schema::Primitive::Double),
    }
}
