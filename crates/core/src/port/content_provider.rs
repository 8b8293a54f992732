// Content Provider Port (external collaborator)

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One generated post candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    pub content: String,
    pub topic: String,
    pub engagement_score: f64,
    pub generated_at: i64, // epoch ms
}

/// Content generation interface
///
/// The core treats failure the same as an empty result: a post-failure
/// stats event, never a loop termination.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Generate up to `count` post candidates, optionally pinned to a topic
    async fn generate(&self, count: usize, topic: Option<&str>) -> Result<Vec<GeneratedPost>>;
}

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::sync::Mutex;

    /// Mock content provider behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Return the same fixed post for every request
        Fixed(String),
        /// Return no candidates
        Empty,
        /// Fail outright
        Fail(String),
    }

    /// Mock content provider for tests
    pub struct MockContentProvider {
        behavior: Mutex<MockBehavior>,
        call_count: Mutex<usize>,
    }

    impl MockContentProvider {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Mutex::new(behavior),
                call_count: Mutex::new(0),
            }
        }

        pub fn new_fixed(content: impl Into<String>) -> Self {
            Self::new(MockBehavior::Fixed(content.into()))
        }

        pub fn new_empty() -> Self {
            Self::new(MockBehavior::Empty)
        }

        pub fn new_fail(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::Fail(message.into()))
        }

        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl ContentProvider for MockContentProvider {
        async fn generate(
            &self,
            count: usize,
            topic: Option<&str>,
        ) -> Result<Vec<GeneratedPost>> {
            *self.call_count.lock().unwrap() += 1;

            let behavior = self.behavior.lock().unwrap().clone();
            match behavior {
                MockBehavior::Fixed(content) => Ok((0..count)
                    .map(|_| GeneratedPost {
                        content: content.clone(),
                        topic: topic.unwrap_or("General").to_string(),
                        engagement_score: 7.5,
                        generated_at: 0,
                    })
                    .collect()),
                MockBehavior::Empty => Ok(vec![]),
                MockBehavior::Fail(msg) => Err(AppError::Internal(msg)),
            }
        }
    }
}
