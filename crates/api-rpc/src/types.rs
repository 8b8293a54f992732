//! RPC request/response types
//!
//! Job, status, metrics, and settings payloads reuse the core types
//! directly; only the request envelopes live here.

use engager_core::domain::{Job, JobSettings};
use engager_core::port::GeneratedPost;
use serde::{Deserialize, Serialize};

/// job.create.v1
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub job_type: String,
    #[serde(default)]
    pub settings: JobSettings,
}

/// job.start.v1 / job.stop.v1 / job.pause.v1 / job.get.v1
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobIdRequest {
    pub job_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub total: usize,
}

/// bot.posts.v1
#[derive(Debug, Deserialize)]
pub struct PostsRequest {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    20
}

/// settings.update.v1
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub settings: engager_core::domain::BotSettings,
}

/// content.generate.v1
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub topic: Option<String>,
}

fn default_count() -> usize {
    3
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub posts: Vec<GeneratedPost>,
}

/// content.publish.v1
#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublishResponse {
    pub success: bool,
    pub id: Option<String>,
    pub url: Option<String>,
    pub error: Option<String>,
}
