#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `SheetWise` workspace: the runtime entry point,
//! API models and handlers, error enums, and feature slices.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! sheetwise-derive = { path = "../infra/derive" }
//! ```
//!
//! The examples below are `ignore`d because proc-macro crates cannot use their own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a synchronous `main` running on a `sheetwise_runtime` profile.
///
/// # Arguments
///
/// * `high_performance` - Larger stacks and longer keep-alive for server workloads.
/// * `memory_efficient` - Half the worker threads and smaller stacks.
/// * `default` (or no argument) - Worker threads auto-detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[sheetwise_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a request or response body exchanged over the HTTP API.
///
/// * Adds `Debug`, `Serialize` and `Deserialize` unless already derived.
/// * Adds `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * Applies `#[serde(rename_all = "camelCase")]` and `#[serde(deny_unknown_fields)]`
///   unless overridden through the macro arguments.
///
/// # Example
///
/// ```rust,ignore
/// use sheetwise_derive::api_model;
///
/// #[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct SheetStats {
///     pub name: String,
///     pub row_count: usize,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Documents an Axum handler with `utoipa::path` (behind the `server` feature).
///
/// Accepts the regular `utoipa::path` arguments: method, `path = "..."`,
/// `request_body`, `responses(...)` and `tag = ...`.
///
/// # Example
///
/// ```rust,ignore
/// use sheetwise_derive::api_handler;
///
/// #[api_handler(
///     get,
///     path = "/api/",
///     responses((status = OK, body = Detail)),
///     tag = TESTING_TAG
/// )]
/// pub async fn info() -> Json<Detail> {
///     Json(Detail::new("ok"))
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum of named-field variants into a crate error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and to
///   `Result<T, SourceError>` for every variant carrying a `source` field.
/// * `From<SourceError>` for every variant carrying a `source` field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, .. }` variant exists.
/// * A module-private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// * Only enums with named-field variants are accepted.
/// * A variant with a source must also have `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[sheetwise_derive::sheetwise_error]
/// pub enum SummarizeError {
///     #[error("Upstream error{}: {source}", format_context(.context))]
///     Upstream { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn sheetwise_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle that can be registered in the kernel state.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// dereferences to it, and implements `FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[sheetwise_derive::sheetwise_slice]
/// pub struct Summarize {
///     pub summarizer: Arc<dyn Summarizer>,
/// }
///
/// let slice = Summarize::new(SummarizeInner { summarizer });
/// ```
#[proc_macro_attribute]
pub fn sheetwise_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
