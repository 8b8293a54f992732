// X API posting client

use async_trait::async_trait;
use engager_core::port::{PublishOutcome, Publisher};
use engager_core::Result;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

const POST_ENDPOINT: &str = "https://api.x.com/2/tweets";
const ACCOUNT_HANDLE: &str = "TradeUpApp";

/// Bearer token environment variable
pub const BEARER_TOKEN_ENV: &str = "ENGAGER_X_BEARER_TOKEN";

#[derive(Debug, Deserialize)]
struct CreatedTweet {
    id: String,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    data: Option<CreatedTweet>,
}

/// Posts to the X v2 API
///
/// Missing credentials and rejected requests surface as failed outcomes,
/// never as errors; the posting loop keeps running either way.
pub struct HttpPublisher {
    client: reqwest::Client,
    endpoint: String,
    bearer_token: Option<String>,
}

impl HttpPublisher {
    pub fn new(bearer_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: POST_ENDPOINT.to_string(),
            bearer_token: bearer_token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var(BEARER_TOKEN_ENV).ok())
    }

    #[cfg(test)]
    fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl Publisher for HttpPublisher {
    async fn publish(&self, content: &str) -> Result<PublishOutcome> {
        let token = match &self.bearer_token {
            Some(token) => token,
            None => {
                warn!("No API credentials configured; publish attempt recorded as failed");
                return Ok(PublishOutcome::failed("Missing X API credentials"));
            }
        };

        let response = match self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&json!({ "text": content }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Ok(PublishOutcome::failed(format!("Request failed: {e}"))),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Ok(PublishOutcome::failed(format!(
                "API rejected post ({status}): {body}"
            )));
        }

        match response.json::<CreateResponse>().await {
            Ok(CreateResponse { data: Some(tweet) }) => {
                info!(id = %tweet.id, "Posted to X");
                Ok(PublishOutcome::ok(tweet.id))
            }
            Ok(CreateResponse { data: None }) => Ok(PublishOutcome {
                success: true,
                id: None,
                error: None,
            }),
            Err(e) => Ok(PublishOutcome::failed(format!(
                "Unreadable API response: {e}"
            ))),
        }
    }

    fn url_for(&self, id: &str) -> String {
        format!("https://x.com/{ACCOUNT_HANDLE}/status/{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credentials_is_a_failed_outcome() {
        let publisher = HttpPublisher::new(None);
        let outcome = publisher.publish("hello").await.unwrap();
        assert!(!outcome.success);
        assert!(outcome.error.unwrap().contains("credentials"));
    }

    #[tokio::test]
    async fn blank_token_counts_as_missing() {
        let publisher = HttpPublisher::new(Some("   ".to_string()));
        let outcome = publisher.publish("hello").await.unwrap();
        assert!(!outcome.success);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_failed_outcome() {
        let publisher = HttpPublisher::new(Some("token".to_string()))
            .with_endpoint("http://127.0.0.1:1/tweets");
        let outcome = publisher.publish("hello").await.unwrap();
        assert!(!outcome.success);
        assert!(outcome.id.is_none());
    }

    #[test]
    fn url_points_at_account_status() {
        let publisher = HttpPublisher::new(None);
        assert_eq!(
            publisher.url_for("12345"),
            "https://x.com/TradeUpApp/status/12345"
        );
    }
}
