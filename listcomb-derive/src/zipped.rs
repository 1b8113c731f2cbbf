//! Implementation of the `#[derive(Zipped)]` macro.
//!
//! This module contains the procedural macro implementation that turns a
//! struct of parallel sequences into a record type plus a `Zipped` impl.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident, LitStr, PathArguments,
    Type, parse_macro_input, parse_quote,
};

/// Main implementation of the Zipped derive macro.
pub fn derive_zipped_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = expand(&input).unwrap_or_else(|error| error.to_compile_error());

    TokenStream::from(expanded)
}

/// A struct field of type `Sequence<element>`.
struct Member<'a> {
    field: &'a Field,
    name: &'a Ident,
    element: &'a Type,
}

impl<'a> Member<'a> {
    fn parse(field: &'a Field) -> syn::Result<Self> {
        let name = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "Zipped requires named fields."))?;
        let element = sequence_element(&field.ty).ok_or_else(|| {
            syn::Error::new_spanned(
                &field.ty,
                format!("Zipped requires every field to be a `Sequence<_>`; field `{name}` is not."),
            )
        })?;
        Ok(Self {
            field,
            name,
            element,
        })
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data_struct) => named_fields(name, &data_struct.fields)?,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Zipped can only be derived for structs of sequences, not enums.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Zipped cannot be derived for unions.",
            ));
        }
    };

    let record_name = record_name(input)?;
    let members = fields
        .named
        .iter()
        .map(Member::parse)
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(generate(input, &record_name, &members))
}

fn named_fields<'a>(name: &Ident, fields: &'a Fields) -> syn::Result<&'a FieldsNamed> {
    match fields {
        Fields::Named(named_fields) => Ok(named_fields),
        Fields::Unnamed(_) => Err(syn::Error::new_spanned(
            name,
            "Zipped can only be derived for structs with named fields, not tuple structs.",
        )),
        Fields::Unit => Err(syn::Error::new_spanned(
            name,
            "Zipped cannot be derived for unit structs (structs with no fields).",
        )),
    }
}

/// Reads `#[zipped(record = "Name")]`, defaulting to `<Struct>Record`.
fn record_name(input: &DeriveInput) -> syn::Result<Ident> {
    let mut record = None;
    for attribute in &input.attrs {
        if !attribute.path().is_ident("zipped") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("record") {
                let value: LitStr = meta.value()?.parse()?;
                record = Some(value.parse::<Ident>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported zipped attribute; expected `record = \"Name\"`"))
            }
        })?;
    }
    Ok(record.unwrap_or_else(|| format_ident!("{}Record", input.ident)))
}

/// Returns `T` for a type written `Sequence<T>` (under any path prefix).
fn sequence_element(field_type: &Type) -> Option<&Type> {
    let Type::Path(type_path) = field_type else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Sequence" {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    let mut types = arguments.args.iter().filter_map(|argument| match argument {
        GenericArgument::Type(element) => Some(element),
        _ => None,
    });
    match (types.next(), types.next()) {
        (Some(element), None) => Some(element),
        _ => None,
    }
}

fn generate(input: &DeriveInput, record_name: &Ident, members: &[Member<'_>]) -> TokenStream2 {
    let name = &input.ident;
    let visibility = &input.vis;
    let generics = &input.generics;
    let (_, type_generics, where_clause) = generics.split_for_impl();

    let record_fields = members.iter().map(|member| {
        let field_visibility = &member.field.vis;
        let field_name = member.name;
        let element = member.element;
        quote! { #field_visibility #field_name: #element }
    });
    let field_names: Vec<&Ident> = members.iter().map(|member| member.name).collect();
    let member_count = members.len();

    let mut zipped_generics = generics.clone();
    let zipped_where = zipped_generics.make_where_clause();
    for member in members {
        let element = member.element;
        zipped_where
            .predicates
            .push(parse_quote!(#element: ::core::clone::Clone));
    }
    let (impl_generics, _, zipped_where_clause) = zipped_generics.split_for_impl();

    let build_record = if members.is_empty() {
        quote! { |_| #record_name {} }
    } else {
        quote! {
            |index| #record_name {
                #(#field_names: ::core::clone::Clone::clone(&self.#field_names[index])),*
            }
        }
    };

    let record_doc = format!("One element from each sequence of [`{name}`].");

    quote! {
        #[doc = #record_doc]
        #[derive(Debug, Clone, PartialEq)]
        #visibility struct #record_name #generics #where_clause {
            #(#record_fields),*
        }

        impl #impl_generics ::listcomb::Zipped for #name #type_generics #zipped_where_clause {
            type Record = #record_name #type_generics;

            fn zipped(&self) -> ::listcomb::Sequence<Self::Record> {
                let lengths: [usize; #member_count] = [#(self.#field_names.size()),*];
                ::listcomb::__private::zip_members(&lengths, #build_record)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn element_of(field_type: &Type) -> Option<String> {
        sequence_element(field_type).map(|element| quote!(#element).to_string())
    }

    #[rstest]
    fn sequence_element_accepts_plain_and_qualified_paths() {
        assert_eq!(element_of(&parse_quote!(Sequence<i32>)), Some("i32".to_string()));
        assert_eq!(
            element_of(&parse_quote!(::listcomb::Sequence<Vec<u8>>)),
            Some("Vec < u8 >".to_string())
        );
    }

    #[rstest]
    fn sequence_element_rejects_other_types() {
        assert_eq!(element_of(&parse_quote!(Vec<i32>)), None);
        assert_eq!(element_of(&parse_quote!(Sequence)), None);
        assert_eq!(element_of(&parse_quote!(&Sequence<i32>)), None);
    }

    #[rstest]
    fn record_name_defaults_to_struct_name_with_suffix() {
        let input: DeriveInput = parse_quote! {
            struct Columns { xs: Sequence<i32> }
        };
        let record = record_name(&input).expect("valid attributes");
        assert_eq!(record, "ColumnsRecord");
    }

    #[rstest]
    fn record_name_reads_attribute() {
        let input: DeriveInput = parse_quote! {
            #[zipped(record = "Row")]
            struct Columns { xs: Sequence<i32> }
        };
        let record = record_name(&input).expect("valid attributes");
        assert_eq!(record, "Row");
    }

    #[rstest]
    fn record_name_rejects_unknown_keys() {
        let input: DeriveInput = parse_quote! {
            #[zipped(rows = "Row")]
            struct Columns { xs: Sequence<i32> }
        };
        assert!(record_name(&input).is_err());
    }

    #[rstest]
    fn expand_rejects_tuple_structs_and_enums() {
        let tuple: DeriveInput = parse_quote! { struct Pair(Sequence<i32>, Sequence<i32>); };
        let enumeration: DeriveInput = parse_quote! { enum Either { Left, Right } };
        assert!(expand(&tuple).is_err());
        assert!(expand(&enumeration).is_err());
    }

    #[rstest]
    fn expand_rejects_non_sequence_fields() {
        let input: DeriveInput = parse_quote! {
            struct Columns { xs: Sequence<i32>, total: usize }
        };
        let error = expand(&input).expect_err("usize is not a sequence");
        assert!(error.to_string().contains("`total`"));
    }
}
