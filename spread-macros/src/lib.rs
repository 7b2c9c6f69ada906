//! macros for `spread` template
mod shared;
mod attribute;
mod data;

/// derive `From<T>` for `spread::Data` and `spread::Value`
///
/// Field attributes:
///
/// - `#[data(rename = "key")]`, bind the field under another key
/// - `#[data(skip)]`, do not bind the field
#[proc_macro_derive(Data, attributes(data))]
pub fn data(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match data::data(syn::parse_macro_input!(input as syn::DeriveInput)) {
        Ok(ok) => ok.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
