//! Common parsing utilities
//!
//! Helper attribute parsing shared by the user-facing macros.

use syn::{Attribute, LitStr};

// =============================================================================
// Per-function Helper Attribute: `#[host(...)]`
// =============================================================================

/// Options collected from `#[host(...)]` on a function.
///
/// Used in:
/// - `#[host(rename = "siblings")]`
/// - `#[host(skip)]`
#[derive(Default)]
pub struct HostAttr {
    pub rename: Option<LitStr>,
    pub skip: bool,
}

/// Remove every `#[host(...)]` from `attrs` and merge their options.
///
/// The helper attribute is not a real attribute, so it must never reach the
/// compiler.
pub fn take_host_attrs(attrs: &mut Vec<Attribute>) -> syn::Result<HostAttr> {
    let mut out = HostAttr::default();
    let mut error: Option<syn::Error> = None;

    attrs.retain(|attr| {
        if !attr.path().is_ident("host") {
            return true;
        }
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                out.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                out.rename = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `rename = \"...\"`"))
            }
        });
        if let Err(err) = parsed {
            match &mut error {
                Some(existing) => existing.combine(err),
                None => error = Some(err),
            }
        }
        false
    });

    match error {
        Some(err) => Err(err),
        None => Ok(out),
    }
}
