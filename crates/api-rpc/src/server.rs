//! JSON-RPC server
//!
//! Serves the bot API over TCP bound to localhost only.

use crate::handler::RpcHandler;
use crate::types::{
    CreateJobRequest, GenerateRequest, JobIdRequest, PostsRequest, PublishRequest,
    UpdateSettingsRequest,
};
use engager_core::application::{BotService, Reporter};
use engager_core::port::{ContentProvider, Publisher};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9639;

/// RPC server configuration
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// RPC server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(
        config: RpcServerConfig,
        service: Arc<BotService>,
        reporter: Arc<Reporter>,
        content: Arc<dyn ContentProvider>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(service, reporter, content, publisher)),
        }
    }

    /// Start the JSON-RPC server
    ///
    /// Security: only binds to 127.0.0.1 (no external access)
    pub async fn start(self) -> Result<ServerHandle, String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server on TCP (localhost only)"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;

        let mut module = RpcModule::new(());

        let handler = self.handler.clone();
        module
            .register_async_method("job.create.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: CreateJobRequest = params.parse()?;
                    handler.create_job(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("job.start.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: JobIdRequest = params.parse()?;
                    handler.start_job(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("job.stop.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: JobIdRequest = params.parse()?;
                    handler.stop_job(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("job.pause.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: JobIdRequest = params.parse()?;
                    handler.pause_job(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("job.get.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: JobIdRequest = params.parse()?;
                    handler.get_job(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("job.list.v1", move |_params, _, _| {
                let handler = handler.clone();
                async move { handler.list_jobs().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("bot.status.v1", move |_params, _, _| {
                let handler = handler.clone();
                async move { handler.status().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("bot.metrics.v1", move |_params, _, _| {
                let handler = handler.clone();
                async move { handler.metrics().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("bot.posts.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: PostsRequest = params.parse().unwrap_or(PostsRequest {
                        limit: 20,
                        offset: 0,
                    });
                    handler.posts(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("settings.get.v1", move |_params, _, _| {
                let handler = handler.clone();
                async move { handler.get_settings().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("settings.update.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: UpdateSettingsRequest = params.parse()?;
                    handler.update_settings(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("content.generate.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: GenerateRequest = params.parse().unwrap_or(GenerateRequest {
                        count: 3,
                        topic: None,
                    });
                    handler.generate(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("content.publish.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: PublishRequest = params.parse()?;
                    handler.publish(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        info!("JSON-RPC server started successfully");

        let handle = server.start(module);
        Ok(handle)
    }
}
