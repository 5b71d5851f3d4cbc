//! Implementation of `#[derive(Lenses)]`.

use proc_macro::TokenStream;
use proc_macro2::{TokenStream as TokenStream2, TokenTree};
use quote::{ToTokens, format_ident, quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Field, Fields, FieldsNamed, Generics, Ident, Type, parse_macro_input};

pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => generate_field_lenses(name, generics, named_fields),
            Fields::Unnamed(_) => syn::Error::new_spanned(
                name,
                "Lenses can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error(),
            Fields::Unit => syn::Error::new_spanned(
                name,
                "Lenses cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error(),
        },
        Data::Enum(_) => {
            syn::Error::new_spanned(name, "Lenses can only be derived for structs, not enums.")
                .to_compile_error()
        }
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Lenses cannot be derived for unions.").to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_field_lenses(name: &Ident, generics: &Generics, fields: &FieldsNamed) -> TokenStream2 {
    let type_parameters: Vec<&Ident> = generics.type_params().map(|param| &param.ident).collect();

    let mut lens_methods = Vec::new();
    for field in &fields.named {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        match is_skipped(field) {
            Ok(true) => continue,
            Ok(false) => {}
            Err(error) => return error.to_compile_error(),
        }

        let field_type = &field.ty;
        let method_name = format_ident!("{}_lens", field_name);
        let doc = format!("Returns a lens focusing on the `{field_name}` field.");

        // A bound on a concrete type is checked eagerly, so only generic
        // field types get a method-level `Clone` bound.
        let clone_bound = if mentions_any(field_type, &type_parameters) {
            quote! { where #field_type: ::core::clone::Clone, }
        } else {
            TokenStream2::new()
        };
        let clone = quote_spanned!(field_type.span()=> ::core::clone::Clone::clone);

        lens_methods.push(quote! {
            #[doc = #doc]
            #[inline]
            #[must_use]
            pub fn #method_name() -> impl ::lensbox::optics::Lens<Self, #field_type> + Clone
            #clone_bound
            {
                ::lensbox::optics::FunctionLens::new(
                    |whole: &Self| #clone(&whole.#field_name),
                    |part: #field_type, mut whole: Self| {
                        whole.#field_name = part;
                        whole
                    },
                )
            }
        });
    }

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#lens_methods)*
        }
    }
}

/// Reads `#[lens(skip)]`.
fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skip = false;
    for attribute in field.attrs.iter().filter(|attribute| attribute.path().is_ident("lens")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported lens attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

fn mentions_any(field_type: &Type, type_parameters: &[&Ident]) -> bool {
    fn walk(tokens: TokenStream2, type_parameters: &[&Ident]) -> bool {
        tokens.into_iter().any(|token| match token {
            TokenTree::Ident(ident) => type_parameters.iter().any(|param| **param == ident),
            TokenTree::Group(group) => walk(group.stream(), type_parameters),
            TokenTree::Punct(_) | TokenTree::Literal(_) => false,
        })
    }

    !type_parameters.is_empty() && walk(field_type.to_token_stream(), type_parameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn first_field(input: &DeriveInput) -> &Field {
        match &input.data {
            Data::Struct(data_struct) => data_struct.fields.iter().next().unwrap(),
            _ => panic!("expected a struct"),
        }
    }

    #[test]
    fn test_skip_attribute_is_read() {
        let input: DeriveInput = parse_quote! {
            struct Holder { #[lens(skip)] handle: Handle }
        };
        assert!(is_skipped(first_field(&input)).unwrap());
    }

    #[test]
    fn test_unknown_lens_attribute_is_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Holder { #[lens(rename)] handle: Handle }
        };
        assert!(is_skipped(first_field(&input)).is_err());
    }

    #[test]
    fn test_generic_field_detection() {
        let input: DeriveInput = parse_quote! {
            struct Tagged<T> { payload: Vec<Option<T>>, tag: String }
        };
        let parameters: Vec<&Ident> = input.generics.type_params().map(|param| &param.ident).collect();
        let types: Vec<&Type> = match &input.data {
            Data::Struct(data_struct) => data_struct.fields.iter().map(|field| &field.ty).collect(),
            _ => panic!("expected a struct"),
        };

        assert!(mentions_any(types[0], &parameters));
        assert!(!mentions_any(types[1], &parameters));
    }

    #[test]
    fn test_concrete_field_gets_no_clone_bound() {
        let input: DeriveInput = parse_quote! {
            struct Holder { id: u32, #[lens(skip)] handle: Handle }
        };
        let Data::Struct(data_struct) = &input.data else {
            panic!("expected a struct");
        };
        let Fields::Named(fields) = &data_struct.fields else {
            panic!("expected named fields");
        };

        let expanded = generate_field_lenses(&input.ident, &input.generics, fields).to_string();
        assert!(expanded.contains("id_lens"));
        assert!(!expanded.contains("handle_lens"));
        assert!(!expanded.contains("where"));
    }
}
