// Post Record - append-only publish log entry

use serde::{Deserialize, Serialize};

/// One publish attempt's outcome, logged once and never mutated
///
/// Engagement counters are written as zero and never re-fetched. `topics`
/// keeps the log's JSON-encoded-string column; readers parse it
/// best-effort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub content: String,
    pub likes: i64,
    pub retweets: i64,
    pub replies: i64,
    pub topics: String, // JSON-encoded list
    pub timestamp: i64, // epoch ms
}

impl PostRecord {
    pub fn new(id: impl Into<String>, content: impl Into<String>, topics: &[String], timestamp: i64) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            likes: 0,
            retweets: 0,
            replies: 0,
            topics: serde_json::to_string(topics).unwrap_or_else(|_| "[]".to_string()),
            timestamp,
        }
    }

    /// Parse the topics column, defaulting to empty on malformed data
    pub fn topics_list(&self) -> Vec<String> {
        serde_json::from_str(&self.topics).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_zeroes_engagement() {
        let rec = PostRecord::new("1", "hello", &["Charizard".to_string()], 42);
        assert_eq!(rec.likes, 0);
        assert_eq!(rec.retweets, 0);
        assert_eq!(rec.replies, 0);
        assert_eq!(rec.topics_list(), vec!["Charizard".to_string()]);
    }

    #[test]
    fn malformed_topics_parse_to_empty() {
        let mut rec = PostRecord::new("1", "hello", &[], 42);
        rec.topics = "not json".to_string();
        assert!(rec.topics_list().is_empty());
    }
}
