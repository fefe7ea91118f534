//! Procedural macros for tola-collect
//!
//! ## Macros
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[host_functions]` | inherent impl | Generate `HostFunctions` descriptors |
//!
//! ## Example
//!
//! ```ignore
//! struct Dog;
//!
//! #[host_functions]
//! impl Dog {
//!     // public, static, zero-argument, iterable: a discovery source
//!     pub fn siblings() -> Vec<&'static str> {
//!         vec!["Cat", "Fish"]
//!     }
//!
//!     // described, but validation will reject it
//!     pub fn bark(&self) -> String { "woof".into() }
//!
//!     #[host(skip)]
//!     fn internal() {}
//! }
//!
//! let universe = Universe::builder()
//!     .class("Dog", |t| t.functions_of::<Dog>())
//!     .build();
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Describe the functions of an inherent impl block for a host universe.
///
/// Implements `tola_collect::HostFunctions` for the self type. For each
/// function:
///
/// - visibility: plain `pub` is public, anything else (including
///   `pub(crate)`) is private
/// - receiver: any `self` parameter makes it an instance function
/// - required parameters: every non-receiver input
/// - return shape: `Vec`, arrays, slices and std sets are sequences,
///   `impl Iterator` / `Box<dyn Iterator>` are iterators, `Result<T, E>`
///   is fallible
///
/// Static, zero-argument functions with an iterable return also get a body,
/// so the universe can invoke them. Items must convert into `Ident`; errors
/// must convert into `BoxError`.
///
/// Helper attributes on functions:
/// - `#[host(rename = "name")]` registers the function under another name
/// - `#[host(skip)]` leaves the function out
#[proc_macro_attribute]
pub fn host_functions(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[host_functions] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let item = parse_macro_input!(item as syn::ItemImpl);
    user::expand_host_functions(item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
