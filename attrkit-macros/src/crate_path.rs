//! Crate path resolution for generated code.
//!
//! Detects whether the user depends on `attrkit` (facade) or `attrkit-core`
//! directly, and returns the appropriate path prefix for generated code.

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::quote;

/// Returns the token stream for accessing `attrkit_core` types.
///
/// If the user depends on `attrkit`, returns `::attrkit`.
/// Otherwise returns `::attrkit_core`.
pub fn attrkit_core_path() -> TokenStream {
    // First check if the facade crate is available
    if let Ok(found) = crate_name("attrkit") {
        match found {
            FoundCrate::Itself => quote!(crate),
            FoundCrate::Name(name) => {
                let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
                quote!(::#ident)
            }
        }
    } else if let Ok(found) = crate_name("attrkit-core") {
        match found {
            FoundCrate::Itself => quote!(crate),
            FoundCrate::Name(name) => {
                let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
                quote!(::#ident)
            }
        }
    } else {
        // Fallback - assume attrkit_core is available (for error messages)
        quote!(::attrkit_core)
    }
}
