
// ===== Namespace =====

/// `ToTokens` for public name
pub struct SpreadData;

impl quote::ToTokens for SpreadData {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        quote::quote! {::spread::Data}.to_tokens(tokens);
    }
}

/// `ToTokens` for public name
pub struct SpreadValue;

impl quote::ToTokens for SpreadValue {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        quote::quote! {::spread::Value}.to_tokens(tokens);
    }
}

// ===== macros =====

/// Everything will return `Result<T, syn::Error>`
///
/// `error!(?option, "{}", error)`, unwrap option with error as standard `format!`.
///
/// `error!(attr, "`{path}`: {}")`, standard `format!` with `attr`s span.
///
/// `error!("{}",error)`, standard `format!`
macro_rules! error {
    (@ $s:expr, $($tt:tt)*) => {
        return Err(syn::Error::new($s, format!($($tt)*)))
    };
    (?$s:expr, $($tt:tt)*) => {
        match $s { Some(ok) => ok, None => crate::shared::error!($($tt)*), }
    };
    ($s:expr, $($tt:tt)*) => {
        crate::shared::error!(@ syn::spanned::Spanned::span(&$s), $($tt)*)
    };
    ($($tt:tt)*) => {
        crate::shared::error!(@ proc_macro2::Span::call_site(), $($tt)*)
    };
}

pub(crate) use error;
