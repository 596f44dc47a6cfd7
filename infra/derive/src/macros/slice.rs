use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemStruct;

/// Expands `#[sheetwise_slice]` into an `Inner` state struct plus a cloneable `Arc` handle.
pub fn expand_slice(input: ItemStruct) -> TokenStream {
    let handle = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let inner = format_ident!("{handle}Inner");

    let semicolon = if matches!(fields, syn::Fields::Named(_)) { quote!() } else { quote!(;) };

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner #fields #semicolon

        #[derive(Debug, Clone)]
        #vis struct #handle {
            inner: ::std::sync::Arc<#inner>,
        }

        impl #handle {
            #[must_use]
            pub fn new(inner: #inner) -> Self {
                Self { inner: ::std::sync::Arc::new(inner) }
            }
        }

        impl ::std::ops::Deref for #handle {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::sheetwise_kernel::domain::registry::FeatureSlice for #handle {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    }
}
