use anyhow::Context;
use sheetwise::kernel::config::{load_config, load_env};
use sheetwise_logger::Logger;
use sheetwise_server::Server;

#[cfg(feature = "profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[sheetwise_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    #[cfg(feature = "profiling")]
    let _profiler = dhat::Profiler::new_heap();

    // `.env` must be applied before the filter reads RUST_LOG.
    let env_file = load_env();
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;
    if let Some(path) = env_file {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let cfg = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
