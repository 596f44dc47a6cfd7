use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared across the service.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub summarize: SummarizeConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
///
/// Deserializes straight through [`ApiConfigInner`] so loaders that coerce string values
/// (environment overrides) see the concrete field types.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(from = "ApiConfigInner")]
pub struct ApiConfig {
    inner: Arc<ApiConfigInner>,
}

impl From<ApiConfigInner> for ApiConfig {
    fn from(inner: ApiConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Upper bound for request bodies (spreadsheet uploads), in bytes.
    pub body_limit: usize,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Language-model settings for the summarization engine.
///
/// `api_key` stays optional so the service can boot without credentials;
/// the engine reports the missing key when a summary is requested.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SummarizeConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is not configured.
    pub api_key_env: String,
    /// Rows forwarded to the model per sheet.
    pub max_rows: usize,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for SummarizeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizeConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_env", &self.api_key_env)
            .field("max_rows", &self.max_rows)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            body_limit: 10 * 1024 * 1024,
            ssl: None,
        }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_owned(),
            model: "gpt-4o-mini".to_owned(),
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_owned(),
            max_rows: 200,
            max_tokens: 512,
            temperature: 0.2,
            timeout_seconds: 60,
        }
    }
}
