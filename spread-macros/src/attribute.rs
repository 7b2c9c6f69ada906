use syn::*;

use crate::shared::error;

/// Derive macro field level attribute
///
/// Accept input:
///
/// - rename: `#[data(rename = "key")]`
/// - skip: `#[data(skip)]`
#[derive(Default)]
pub struct AttrField {
    pub rename: Option<LitStr>,
    pub skip: bool,
}

impl AttrField {
    pub fn from_attr(attrs: &[Attribute]) -> Result<AttrField> {
        let mut field = AttrField::default();

        for attr in attrs.iter().filter(|e|e.path().is_ident("data")) {
            attr.parse_nested_meta(|meta|{
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if field.rename.replace(lit).is_some() {
                        error!(meta.path, "duplicate `rename` key")
                    }
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    field.skip = true;
                    Ok(())
                } else {
                    error!(meta.path, "expected `rename` or `skip`")
                }
            })?;
        }

        Ok(field)
    }
}
