use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitBool, LitStr, Meta, MetaNameValue, Token};

const DEFAULT_RENAME_ALL: &str = "camelCase";

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<LitBool>,
}

#[derive(Default)]
struct SerdeAttrs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

/// Expands `#[api_model]`.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let expanded = parse_model_args(args).and_then(|args| {
        let serde = existing_serde_attrs(&input.attrs)?;
        let derives = existing_derives(&input.attrs);

        let derive_attr = derive_attr(&derives);
        let schema_attr = if derives.contains("ToSchema") {
            quote!()
        } else {
            quote!(#[cfg_attr(feature = "server", derive(::utoipa::ToSchema))])
        };
        let rename_attr = rename_attr(args.rename_all, &serde)?;
        let deny_attr = deny_attr(args.deny_unknown_fields, &serde)?;

        Ok(quote! {
            #derive_attr
            #schema_attr
            #rename_attr
            #deny_attr
            #input
        })
    });

    expanded.unwrap_or_else(|err| err.to_compile_error())
}

/// Expands `#[api_handler]`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn parse_model_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Meta::NameValue(pair) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected `rename_all = \"...\"` or `deny_unknown_fields = <bool>`",
            ));
        };

        if pair.path.is_ident("rename_all") {
            let Lit::Str(value) = literal(&pair)? else {
                return Err(syn::Error::new_spanned(&pair.value, "rename_all must be a string"));
            };
            ensure_unset(parsed.rename_all.is_some(), &pair)?;
            parsed.rename_all = Some(value);
        } else if pair.path.is_ident("deny_unknown_fields") {
            let Lit::Bool(value) = literal(&pair)? else {
                return Err(syn::Error::new_spanned(
                    &pair.value,
                    "deny_unknown_fields must be a boolean",
                ));
            };
            ensure_unset(parsed.deny_unknown_fields.is_some(), &pair)?;
            parsed.deny_unknown_fields = Some(value);
        } else {
            return Err(syn::Error::new_spanned(
                &pair.path,
                "unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn literal(pair: &MetaNameValue) -> syn::Result<Lit> {
    match &pair.value {
        Expr::Lit(expr) => Ok(expr.lit.clone()),
        other => Err(syn::Error::new_spanned(other, "expected a literal value")),
    }
}

fn ensure_unset(already_set: bool, pair: &MetaNameValue) -> syn::Result<()> {
    if already_set {
        return Err(syn::Error::new_spanned(pair, "duplicate argument"));
    }
    Ok(())
}

fn existing_derives(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut derives = FxHashSet::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                derives.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }
    derives
}

fn existing_serde_attrs(attrs: &[Attribute]) -> syn::Result<SerdeAttrs> {
    let mut serde = SerdeAttrs::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                serde.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                serde.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                // Skip the value of unrelated `key = value` serde options.
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(serde)
}

fn derive_attr(present: &FxHashSet<String>) -> TokenStream {
    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote!(Debug));
    }
    if !present.contains("Serialize") {
        derives.push(quote!(::serde::Serialize));
    }
    if !present.contains("Deserialize") {
        derives.push(quote!(::serde::Deserialize));
    }

    if derives.is_empty() { quote!() } else { quote!(#[derive(#(#derives),*)]) }
}

fn rename_attr(requested: Option<LitStr>, serde: &SerdeAttrs) -> syn::Result<TokenStream> {
    let requested = requested.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME_ALL, Span::call_site()));

    match &serde.rename_all {
        Some(existing) if existing.value() != requested.value() => Err(syn::Error::new_spanned(
            existing,
            "conflicting serde rename_all; drop it or pass the same value to api_model",
        )),
        Some(_) => Ok(quote!()),
        None => Ok(quote!(#[serde(rename_all = #requested)])),
    }
}

fn deny_attr(requested: Option<LitBool>, serde: &SerdeAttrs) -> syn::Result<TokenStream> {
    let deny = requested.as_ref().is_none_or(LitBool::value);

    match (serde.deny_unknown_fields, deny) {
        (true, false) => Err(syn::Error::new_spanned(
            requested,
            "serde(deny_unknown_fields) is already set; remove it before disabling",
        )),
        (true, true) | (false, false) => Ok(quote!()),
        (false, true) => Ok(quote!(#[serde(deny_unknown_fields)])),
    }
}
