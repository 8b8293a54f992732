// Bot-wide settings object

use serde::{Deserialize, Serialize};

/// Content category toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypes {
    pub card_pulls: bool,
    pub deck_building: bool,
    pub market_analysis: bool,
    pub tournaments: bool,
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self {
            card_pulls: true,
            deck_building: true,
            market_analysis: true,
            tournaments: true,
        }
    }
}

/// Whole-object bot settings, read and rewritten wholesale
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct BotSettings {
    pub posts_per_day: u32,
    pub keywords: Vec<String>,
    pub engagement_mode: String,
    pub auto_reply: bool,
    pub content_types: ContentTypes,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            posts_per_day: 12,
            keywords: vec![
                "Pokemon".to_string(),
                "TCG".to_string(),
                "Charizard".to_string(),
                "Pikachu".to_string(),
            ],
            engagement_mode: "balanced".to_string(),
            auto_reply: true,
            content_types: ContentTypes::default(),
        }
    }
}
