// Publisher Port (external collaborator)

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of one publish attempt
///
/// Failures are carried in-band; a publisher only returns `Err` for faults
/// the caller cannot interpret as a failed attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishOutcome {
    pub success: bool,
    pub id: Option<String>,
    pub error: Option<String>,
}

impl PublishOutcome {
    pub fn ok(id: impl Into<String>) -> Self {
        Self {
            success: true,
            id: Some(id.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            id: None,
            error: Some(error.into()),
        }
    }
}

/// Publishing interface
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Attempt to publish `content` as a new post
    async fn publish(&self, content: &str) -> Result<PublishOutcome>;

    /// Public URL for a published post id (cosmetic only)
    fn url_for(&self, id: &str) -> String;
}

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Mock publisher behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Succeed with incrementing ids ("1", "2", ...)
        Success,
        /// Succeed without a publisher-assigned id
        SuccessWithoutId,
        /// Report a failed attempt
        Fail(String),
    }

    /// Mock publisher for tests
    pub struct MockPublisher {
        behavior: Mutex<MockBehavior>,
        published: Mutex<Vec<String>>,
    }

    impl MockPublisher {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Mutex::new(behavior),
                published: Mutex::new(Vec::new()),
            }
        }

        pub fn new_success() -> Self {
            Self::new(MockBehavior::Success)
        }

        pub fn new_fail(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::Fail(message.into()))
        }

        /// Contents handed to `publish`, in order
        pub fn published(&self) -> Vec<String> {
            self.published.lock().unwrap().clone()
        }

        pub fn publish_count(&self) -> usize {
            self.published.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Publisher for MockPublisher {
        async fn publish(&self, content: &str) -> Result<PublishOutcome> {
            let mut published = self.published.lock().unwrap();
            published.push(content.to_string());
            let seq = published.len();
            drop(published);

            let behavior = self.behavior.lock().unwrap().clone();
            Ok(match behavior {
                MockBehavior::Success => PublishOutcome::ok(seq.to_string()),
                MockBehavior::SuccessWithoutId => PublishOutcome {
                    success: true,
                    id: None,
                    error: None,
                },
                MockBehavior::Fail(msg) => PublishOutcome::failed(msg),
            })
        }

        fn url_for(&self, id: &str) -> String {
            format!("https://example.invalid/status/{id}")
        }
    }
}
