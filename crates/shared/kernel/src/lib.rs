//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration and `.env` loading for every binary, plus the
//! shared HTTP surface (error envelope, state, informational route) behind the `server` feature.
//!
//! ## Config loading
//! ```rust,ignore
//! use sheetwise_kernel::config::{load_config, load_env};
//!
//! load_env();
//! let cfg: sheetwise_kernel::domain::config::ApiConfig = load_config(Some("server")).unwrap();
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use sheetwise_domain as domain;
