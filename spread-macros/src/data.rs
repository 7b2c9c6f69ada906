//! `Data` derive macro
use proc_macro2::TokenStream;
use quote::quote;
use spread_core::Marker;
use syn::*;

use crate::{
    attribute::AttrField,
    shared::{SpreadData, SpreadValue, error},
};

/// output is two `From` impl, one for `Data` which insert every field, and one for `Value`
/// which wrap the former as `Value::Map`
pub fn data(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput { ident, mut generics, data, .. } = input;

    let fields = match data {
        Data::Struct(DataStruct { fields: Fields::Named(fields), .. }) => fields.named,
        Data::Struct(_) => error!(ident, "only struct with named fields is supported"),
        Data::Enum(_) | Data::Union(_) => error!(ident, "only struct is supported"),
    };

    let mut keys = Vec::<String>::new();
    let mut members = vec![];
    let mut types = vec![];

    for field in &fields {
        let attr = AttrField::from_attr(&field.attrs)?;
        if attr.skip {
            continue;
        }

        let member = error!(?field.ident.as_ref(), "unnamed field");

        let key = match &attr.rename {
            Some(lit) => {
                let key = lit.value();
                if !Marker::is_segment(&key) {
                    error!(lit, "`{key}` is not a valid key")
                }
                key
            }
            None => {
                let key = member.to_string();
                let key = key.trim_start_matches("r#");
                if !Marker::is_segment(key) {
                    error!(member, "`{key}` is not a valid key, use `#[data(rename = \"..\")]`")
                }
                key.to_owned()
            }
        };

        if keys.contains(&key) {
            error!(field, "duplicate key `{key}`")
        }

        keys.push(key);
        members.push(member);
        types.push(&field.ty);
    }

    if !generics.params.is_empty() {
        let predicates = &mut generics.make_where_clause().predicates;
        for ty in &types {
            predicates.push(parse_quote! { #SpreadValue: ::core::convert::From<#ty> });
        }
    }

    let (g1,g2,g3) = generics.split_for_impl();

    Ok(quote! {
        impl #g1 ::core::convert::From<#ident #g2> for #SpreadData #g3 {
            fn from(value: #ident #g2) -> Self {
                let mut data = #SpreadData::new();
                #(data.insert(#keys, value.#members);)*
                data
            }
        }

        impl #g1 ::core::convert::From<#ident #g2> for #SpreadValue #g3 {
            fn from(value: #ident #g2) -> Self {
                #SpreadValue::Map(<#SpreadData as ::core::convert::From<#ident #g2>>::from(value))
            }
        }
    })
}
