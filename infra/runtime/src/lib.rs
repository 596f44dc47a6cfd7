//! # Runtime
//!
//! Tokio runtime profiles for the `SheetWise` binaries.
//!
//! * **High performance**: server profile, larger stacks and a longer idle keep-alive.
//! * **Memory efficient**: half the worker threads and smaller stacks.
//! * **Default**: worker threads from `TOKIO_WORKER_THREADS` or the available parallelism.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[sheetwise_runtime::main(high_performance)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use sheetwise_derive::main;

use anyhow::Context;
use std::num::NonZero;
use std::sync::OnceLock;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const FALLBACK_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
const DEFAULT_STACK_SIZE: usize = 3 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(60);
const DEFAULT_THREAD_NAME: &str = "sheetwise-worker";

static WORKER_THREADS: OnceLock<usize> = OnceLock::new();

/// Worker thread count: `TOKIO_WORKER_THREADS` when valid, otherwise the CPU parallelism.
fn worker_threads() -> usize {
    *WORKER_THREADS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|n| (1..=MAX_WORKER_THREADS).contains(n))
            .unwrap_or_else(|| {
                available_parallelism().map_or(FALLBACK_WORKER_THREADS, NonZero::get)
            })
    })
}

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: worker_threads(),
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: DEFAULT_KEEP_ALIVE,
        }
    }
}

impl RuntimeConfig {
    /// Server preset.
    #[must_use]
    pub fn high_performance() -> Self {
        Self {
            stack_size: 4 * 1024 * 1024,
            thread_name: "sheetwise-hp".to_owned(),
            thread_keep_alive: Duration::from_secs(300),
            ..Self::default()
        }
    }

    /// Low-footprint preset.
    #[must_use]
    pub fn memory_efficient() -> Self {
        Self {
            worker_threads: (worker_threads() / 2).max(1),
            stack_size: 2 * 1024 * 1024,
            thread_name: "sheetwise-mem".to_owned(),
            thread_keep_alive: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKER_THREADS);
        self
    }

    /// Sets the worker stack size, clamped to 1..=16 `MiB`.
    #[must_use]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name = if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }

    #[must_use]
    pub const fn with_thread_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.thread_keep_alive = keep_alive;
        self
    }

    /// Re-applies the builder bounds, for configs assembled through public fields.
    fn normalized(&self) -> Self {
        self.clone()
            .with_worker_threads(self.worker_threads)
            .with_stack_size(self.stack_size)
            .with_thread_name(self.thread_name.clone())
    }
}

/// Builds a multi-threaded runtime with I/O and timers enabled.
///
/// # Errors
/// Returns an error when the operating system refuses to create the worker threads.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(config = ?config, "Building tokio runtime");

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .context("Failed to initialize tokio runtime")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_threads_are_clamped() {
        assert_eq!(RuntimeConfig::default().with_worker_threads(0).worker_threads, 1);
        assert_eq!(
            RuntimeConfig::default().with_worker_threads(5000).worker_threads,
            MAX_WORKER_THREADS
        );
    }

    #[test]
    fn stack_size_is_clamped() {
        assert_eq!(RuntimeConfig::default().with_stack_size(100).stack_size, MIN_STACK_SIZE);
        assert_eq!(
            RuntimeConfig::default().with_stack_size(usize::MAX).stack_size,
            MAX_STACK_SIZE
        );
    }

    #[test]
    fn blank_thread_name_falls_back() {
        let config = RuntimeConfig::default().with_thread_name("   ");
        assert_eq!(config.thread_name, DEFAULT_THREAD_NAME);
    }

    #[test]
    fn normalized_repairs_public_fields() {
        let config = RuntimeConfig { worker_threads: 0, stack_size: 1, ..RuntimeConfig::default() };
        let normalized = config.normalized();
        assert_eq!(normalized.worker_threads, 1);
        assert_eq!(normalized.stack_size, MIN_STACK_SIZE);
    }

    #[test]
    fn memory_efficient_keeps_at_least_one_worker() {
        assert!(RuntimeConfig::memory_efficient().worker_threads >= 1);
    }

    #[test]
    fn runtime_runs_futures() -> Result<()> {
        let runtime = build_runtime_with_config(&RuntimeConfig::default().with_worker_threads(2))?;
        let value = runtime.block_on(async { 21 * 2 });
        assert_eq!(value, 42);
        Ok(())
    }
}
