//! Common imports for feature slices and binaries.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config, load_env};
pub use crate::domain::config::ApiConfig;
pub use crate::domain::constants::{SUMMARIZE_TAG, TESTING_TAG};
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{
    error::ApiError,
    schemas::Detail,
    state::{ApiState, ApiStateError},
};
