use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Prefix of environment overrides, e.g. `SHEETWISE__SERVER__PORT`.
pub const ENV_PREFIX: &str = "SHEETWISE";
const ENV_SEPARATOR: &str = "__";
const DEFAULT_CONFIG_FILE: &str = "server";

static ENV_FILE: OnceLock<Option<PathBuf>> = OnceLock::new();

#[sheetwise_derive::sheetwise_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads variables from a `.env` file in the working directory or its ancestors.
///
/// Runs at most once per process; later calls return the first outcome. Variables already
/// present in the process environment are never overwritten. A missing file is not an error,
/// a malformed one is logged and skipped.
pub fn load_env() -> Option<&'static Path> {
    ENV_FILE
        .get_or_init(|| match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded environment file");
                Some(path)
            },
            Err(err) if err.not_found() => None,
            Err(err) => {
                warn!(error = %err, "Ignoring malformed environment file");
                None
            },
        })
        .as_deref()
}

/// Builds a typed configuration from an optional file and `SHEETWISE__` environment overrides.
///
/// Layers, lowest precedence first:
/// 1. The file at `path` (extension inferred, defaults to `server`). A missing file is skipped,
///    so a bare environment is enough to start the service.
/// 2. Environment variables prefixed with `SHEETWISE__`; nested keys use `__`
///    (`SHEETWISE__SUMMARIZE__MODEL` maps to `summarize.model`).
///
/// [`load_env`] runs first so `.env` entries take part in the second layer.
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is malformed or a value does not fit `T`.
///
/// # Example
/// ```rust
/// use sheetwise_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_env();

    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());
    info!("Loading config from {}", path.display());

    Config::builder()
        .add_source(File::from(path.as_path()).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
