//! RPC method handlers
//!
//! Thin adapters from RPC envelopes to the application layer.

use crate::error::to_rpc_error;
use crate::types::{
    CreateJobRequest, GenerateRequest, GenerateResponse, JobIdRequest, JobListResponse,
    PostsRequest, PublishRequest, PublishResponse, UpdateSettingsRequest,
};
use engager_core::application::engagement::optimize_for_engagement;
use engager_core::application::{BotService, MetricsSummary, PagedPosts, Reporter, StatusSummary};
use engager_core::domain::{BotSettings, Job, JobKind};
use engager_core::port::{ContentProvider, Publisher};
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;

/// RPC handler with injected dependencies
pub struct RpcHandler {
    service: Arc<BotService>,
    reporter: Arc<Reporter>,
    content: Arc<dyn ContentProvider>,
    publisher: Arc<dyn Publisher>,
}

impl RpcHandler {
    pub fn new(
        service: Arc<BotService>,
        reporter: Arc<Reporter>,
        content: Arc<dyn ContentProvider>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            service,
            reporter,
            content,
            publisher,
        }
    }

    /// job.create.v1
    pub async fn create_job(&self, params: CreateJobRequest) -> Result<Job, ErrorObjectOwned> {
        let kind: JobKind = params
            .job_type
            .parse()
            .map_err(|e| to_rpc_error(engager_core::error::AppError::Domain(e)))?;
        self.service
            .create_job(kind, params.settings)
            .await
            .map_err(to_rpc_error)
    }

    /// job.start.v1
    pub async fn start_job(&self, params: JobIdRequest) -> Result<Job, ErrorObjectOwned> {
        self.service
            .start_job(&params.job_id)
            .await
            .map_err(to_rpc_error)
    }

    /// job.stop.v1
    pub async fn stop_job(&self, params: JobIdRequest) -> Result<Job, ErrorObjectOwned> {
        self.service
            .stop_job(&params.job_id)
            .await
            .map_err(to_rpc_error)
    }

    /// job.pause.v1
    pub async fn pause_job(&self, params: JobIdRequest) -> Result<Job, ErrorObjectOwned> {
        self.service
            .pause_job(&params.job_id)
            .await
            .map_err(to_rpc_error)
    }

    /// job.get.v1
    pub async fn get_job(&self, params: JobIdRequest) -> Result<Job, ErrorObjectOwned> {
        self.service
            .get_job(&params.job_id)
            .await
            .map_err(to_rpc_error)
    }

    /// job.list.v1
    pub async fn list_jobs(&self) -> Result<JobListResponse, ErrorObjectOwned> {
        let jobs = self.service.list_jobs().await.map_err(to_rpc_error)?;
        let total = jobs.len();
        Ok(JobListResponse { jobs, total })
    }

    /// bot.status.v1
    pub async fn status(&self) -> Result<StatusSummary, ErrorObjectOwned> {
        Ok(self.reporter.get_status().await)
    }

    /// bot.metrics.v1
    pub async fn metrics(&self) -> Result<MetricsSummary, ErrorObjectOwned> {
        Ok(self.reporter.get_metrics().await)
    }

    /// bot.posts.v1
    pub async fn posts(&self, params: PostsRequest) -> Result<PagedPosts, ErrorObjectOwned> {
        Ok(self.reporter.get_posts(params.limit, params.offset).await)
    }

    /// settings.get.v1
    pub async fn get_settings(&self) -> Result<BotSettings, ErrorObjectOwned> {
        Ok(self.service.get_settings().await)
    }

    /// settings.update.v1
    pub async fn update_settings(
        &self,
        params: UpdateSettingsRequest,
    ) -> Result<BotSettings, ErrorObjectOwned> {
        self.service
            .update_settings(params.settings)
            .await
            .map_err(to_rpc_error)
    }

    /// content.generate.v1
    pub async fn generate(&self, params: GenerateRequest) -> Result<GenerateResponse, ErrorObjectOwned> {
        let posts = self
            .content
            .generate(params.count, params.topic.as_deref())
            .await
            .map_err(to_rpc_error)?;
        Ok(GenerateResponse { posts })
    }

    /// content.publish.v1
    ///
    /// Manual one-off publish. Runs the same engagement pass as the
    /// posting loop before handing off to the platform client.
    pub async fn publish(&self, params: PublishRequest) -> Result<PublishResponse, ErrorObjectOwned> {
        let content = optimize_for_engagement(&params.content);
        let outcome = self
            .publisher
            .publish(&content)
            .await
            .map_err(to_rpc_error)?;

        let url = outcome
            .id
            .as_deref()
            .map(|id| self.publisher.url_for(id));

        Ok(PublishResponse {
            success: outcome.success,
            id: outcome.id,
            url,
            error: outcome.error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engager_core::application::{ActiveJobs, JobRunner};
    use engager_core::port::content_provider::mocks::MockContentProvider;
    use engager_core::port::job_store::mocks::InMemoryJobStore;
    use engager_core::port::post_log::mocks::InMemoryPostLog;
    use engager_core::port::publisher::mocks::MockPublisher;
    use engager_core::port::settings_store::mocks::InMemorySettingsStore;
    use engager_core::port::status_store::mocks::InMemoryStatusStore;
    use engager_core::port::time_provider::mocks::FixedTimeProvider;
    use engager_core::port::{JobStore, PostLog, TimeProvider};

    fn handler() -> RpcHandler {
        let jobs: Arc<dyn JobStore> = Arc::new(InMemoryJobStore::new());
        let posts: Arc<dyn PostLog> = Arc::new(InMemoryPostLog::new());
        let time: Arc<dyn TimeProvider> = Arc::new(FixedTimeProvider::new(1_700_000_000_000, 3));
        let active = Arc::new(ActiveJobs::new());
        let content: Arc<dyn ContentProvider> =
            Arc::new(MockContentProvider::new_fixed("Nice Charizard pull!"));
        let publisher: Arc<dyn Publisher> = Arc::new(MockPublisher::new_success());

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
            Arc::new(InMemorySettingsStore::new()),
            time.clone(),
            active.clone(),
            runner,
        ));
        let reporter = Arc::new(Reporter::new(
            posts,
            Arc::new(InMemoryStatusStore::new()),
            active,
            time,
        ));
        RpcHandler::new(service, reporter, content, publisher)
    }

    #[tokio::test]
    async fn create_rejects_unknown_job_type() {
        let handler = handler();
        let err = handler
            .create_job(CreateJobRequest {
                job_type: "scraping".to_string(),
                settings: Default::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), crate::error::code::VALIDATION_ERROR);
    }

    #[tokio::test]
    async fn lifecycle_round_trip_over_handler() {
        let handler = handler();
        let job = handler
            .create_job(CreateJobRequest {
                job_type: "posting".to_string(),
                settings: Default::default(),
            })
            .await
            .unwrap();

        let started = handler
            .start_job(JobIdRequest {
                job_id: job.id.clone(),
            })
            .await
            .unwrap();
        assert_eq!(started.status.to_string(), "running");

        let listed = handler.list_jobs().await.unwrap();
        assert_eq!(listed.total, 1);

        handler
            .stop_job(JobIdRequest {
                job_id: job.id.clone(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unknown_id_surfaces_not_found_code() {
        let handler = handler();
        let err = handler
            .get_job(JobIdRequest {
                job_id: "posting-0".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), crate::error::code::NOT_FOUND);
    }

    #[tokio::test]
    async fn publish_appends_mention_and_returns_url() {
        let handler = handler();
        let response = handler
            .publish(PublishRequest {
                content: "Fresh vintage holo hunting!".to_string(),
            })
            .await
            .unwrap();
        assert!(response.success);
        assert!(response.url.unwrap().ends_with("/status/1"));
    }

    #[tokio::test]
    async fn generate_honors_count_and_topic() {
        let handler = handler();
        let response = handler
            .generate(GenerateRequest {
                count: 2,
                topic: Some("Pikachu".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(response.posts.len(), 2);
        assert_eq!(response.posts[0].topic, "Pikachu");
    }
}
