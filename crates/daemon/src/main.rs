//! TradeUp X engager daemon entry point

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use engager_api_rpc::{RpcServer, RpcServerConfig};
use engager_core::application::{ActiveJobs, BotService, JobRunner, Reporter};
use engager_core::port::time_provider::SystemTimeProvider;
use engager_core::port::{
    ContentProvider, JobStore, PostLog, Publisher, SettingsStore, StatusStore, TimeProvider,
};
use engager_infra_fs::{JsonJobStore, JsonSettingsStore, JsonStatusStore, JsonlPostLog};
use engager_infra_social::{HttpPublisher, TemplateContentProvider};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_DATA_DIR: &str = "~/.tradeup-engager";

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let log_format = std::env::var("ENGAGER_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("engager=info"))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {}", e))?;

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("TradeUp X engager v{} starting...", VERSION);

    // 2. Load configuration
    let data_dir = std::env::var("ENGAGER_DATA_DIR")
        .unwrap_or_else(|_| shellexpand::tilde(DEFAULT_DATA_DIR).into_owned());

    let rpc_port: u16 = std::env::var("ENGAGER_RPC_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(9639);

    info!(data_dir = %data_dir, "Initializing data directory...");
    let data_dir = engager_infra_fs::ensure_data_dir(&data_dir)?;

    // 3. Setup dependencies (DI wiring)
    let time: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);
    let jobs: Arc<dyn JobStore> = Arc::new(JsonJobStore::new(&data_dir)?);
    let posts: Arc<dyn PostLog> = Arc::new(JsonlPostLog::new(&data_dir));
    let status: Arc<dyn StatusStore> = Arc::new(JsonStatusStore::new(&data_dir)?);
    let settings: Arc<dyn SettingsStore> = Arc::new(JsonSettingsStore::new(&data_dir)?);

    let content: Arc<dyn ContentProvider> = Arc::new(TemplateContentProvider::new());
    let publisher: Arc<dyn Publisher> = Arc::new(HttpPublisher::from_env());

    let active = Arc::new(ActiveJobs::new());
    let runner = Arc::new(JobRunner::new(
        jobs.clone(),
        posts.clone(),
        content.clone(),
        publisher.clone(),
        time.clone(),
        active.clone(),
    ));
    let service = Arc::new(BotService::new(
        jobs,
        settings,
        time.clone(),
        active.clone(),
        runner,
    ));
    let reporter = Arc::new(Reporter::new(posts, status, active.clone(), time));

    // 4. Start JSON-RPC server
    info!("Starting JSON-RPC server...");
    let rpc_config = RpcServerConfig {
        port: rpc_port,
        ..Default::default()
    };
    let rpc_server = RpcServer::new(rpc_config, service, reporter, content, publisher);
    let rpc_handle = rpc_server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!("System ready. Jobs start on request over RPC.");
    info!("Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 6. Graceful shutdown: abort all execution loops, then stop RPC
    active.abort_all();
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;

    info!("Shutdown complete.");

    Ok(())
}
