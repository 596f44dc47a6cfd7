use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Ident, ItemFn, ReturnType, Type};

/// Expands `#[sheetwise_runtime::main]`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            &input.sig.fn_token,
            "#[sheetwise_runtime::main] expects an `async fn`",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "#[sheetwise_runtime::main] expects the function to return a `Result`",
        )
        .to_compile_error();
    }

    let profile = match runtime_profile(args) {
        Ok(profile) => profile,
        Err(err) => return err,
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #profile;
            let runtime = ::sheetwise_runtime::build_runtime_with_config(&config)?;
            runtime.block_on(async move #block)
        }
    }
}

fn runtime_profile(args: TokenStream) -> Result<TokenStream, TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::sheetwise_runtime::RuntimeConfig::default() });
    }

    let profile: Ident = syn::parse2(args).map_err(|err| err.to_compile_error())?;
    let constructor = match profile.to_string().as_str() {
        "high_performance" => quote! { high_performance },
        "memory_efficient" => quote! { memory_efficient },
        "default" => quote! { default },
        _ => {
            return Err(Error::new_spanned(
                profile,
                "unknown runtime profile, expected one of: high_performance, memory_efficient, default",
            )
            .to_compile_error());
        }
    };

    Ok(quote! { ::sheetwise_runtime::RuntimeConfig::#constructor() })
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = ty.as_ref() else {
        return false;
    };
    path.path.segments.last().is_some_and(|segment| segment.ident == "Result")
}
