//! Facade crate for `SheetWise` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `sheetwise` with the `server` feature.
//! - Call `sheetwise::init` to register feature slices, then merge
//!   [`server::router`] into the application router.

pub use sheetwise_domain as domain;
pub use sheetwise_kernel as kernel;

use sheetwise_domain::config::ApiConfig;
use sheetwise_domain::registry::InitializedSlice;
use std::sync::Arc;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use sheetwise_kernel::server::router::system_router;
        pub use sheetwise_summarize::summarize_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use sheetwise_summarize as summarize;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "summarize",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all feature slices.
///
/// `summarizer` replaces the configured language-model engine, typically with a stub in tests.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
    summarizer: Option<Arc<dyn features::summarize::Summarizer>>,
) -> Result<Vec<InitializedSlice>, features::summarize::SummarizeError> {
    let mut slices = Vec::new();

    // Summarize
    slices.push(match summarizer {
        Some(engine) => features::summarize::init_with(engine),
        None => features::summarize::init(&config.summarize)?,
    });

    Ok(slices)
}
