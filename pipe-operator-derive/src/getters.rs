//! Implementation of the `#[derive(Getters)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the Getters derive macro.
pub fn derive_getters_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_getters(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Getters can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Getters cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates getter methods for a struct's fields.
fn generate_struct_getters(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let getter_methods: Vec<TokenStream2> = named_fields
                .named
                .iter()
                .filter_map(generate_field_getter)
                .collect();

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#getter_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Getters can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Getters cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

/// Generates `<field>_getter()` for one named field.
fn generate_field_getter(field: &Field) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let method_name = format_ident!("{}_getter", field_name);
    let documentation = format!("Returns a getter focusing on the `{field_name}` field.");

    Some(quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::pipe_operator::optics::Getter<Self, Focus = #field_type> + Clone + Copy {
            ::pipe_operator::optics::FunctionGetter::new(|source: &Self| &source.#field_name)
        }
    })
}
