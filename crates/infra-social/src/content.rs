// Template-based content generation

use async_trait::async_trait;
use engager_core::port::{ContentProvider, GeneratedPost};
use engager_core::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

const TEMPLATES: &[&str] = &[
    "Just opened a booster pack and got an amazing holographic {pokemon}! The artwork is absolutely stunning 🎨 #{hashtag} #CardPulls #TradeUp",
    "Working on a new {pokemon} deck strategy. The synergy between cards is incredible! 🃏 #{hashtag} #DeckBuilding #TradeUp",
    "Interesting price trends for {pokemon} cards this week. Vintage cards continue to show strong performance 📈 #{hashtag} #MarketAnalysis #TradeUp",
    "Excited for the upcoming Pokemon TCG tournament! My {pokemon} deck is ready 🏆 #{hashtag} #Tournament #TradeUp",
    "Added a beautiful {pokemon} card to my collection today! The condition is perfect 💎 #{hashtag} #Collecting #TradeUp",
    "That feeling when you pull a rare {pokemon} from a pack! Nothing beats the excitement 🔥 #{hashtag} #LuckyPull #TradeUp",
    "The market for graded {pokemon} cards is evolving rapidly. PSA 10s are commanding premium prices! 💰 #{hashtag} #Investment #TradeUp",
    "Testing out a new {pokemon} deck combo today. Theory crafting is half the fun! 🧠 #{hashtag} #DeckTech #TradeUp",
    "Found a gem in today's pack opening - this {pokemon} is going straight to the collection! ✨ #{hashtag} #NewCard #TradeUp",
    "The competitive scene is heating up! Love seeing new {pokemon} strategies emerge 🌟 #{hashtag} #Competitive #TradeUp",
    "Vintage {pokemon} cards never go out of style. The nostalgia is real! 🕰️ #{hashtag} #Vintage #TradeUp",
    "Perfecting my {pokemon} deck build - every card choice matters in competitive play! ⚡ #{hashtag} #Strategy #TradeUp",
    "The hunt for that perfect {pokemon} card continues. The chase is part of the fun! 🎯 #{hashtag} #CardHunt #TradeUp",
    "Completed another page in my {pokemon} binder today. Organization is key! 📖 #{hashtag} #Organized #TradeUp",
    "Regional championships are coming up! Time to finalize my {pokemon} deck list 📝 #{hashtag} #Regionals #TradeUp",
];

const POKEMON_NAMES: &[&str] = &[
    "Charizard", "Pikachu", "Blastoise", "Venusaur", "Mewtwo", "Mew",
    "Lugia", "Ho-Oh", "Rayquaza", "Dragonite", "Gyarados", "Snorlax",
    "Eevee", "Umbreon", "Espeon", "Vaporeon", "Jolteon", "Flareon",
    "Alakazam", "Gengar", "Machamp", "Golem", "Lapras", "Articuno",
    "Zapdos", "Moltres", "Celebi", "Kyogre", "Groudon", "Dialga",
];

const HASHTAGS: &[&str] = &[
    "PokemonTCG", "TCG", "Pokemon", "Cards", "Collecting", "Gaming",
    "Nostalgia", "Vintage", "Modern", "Competitive", "Casual", "Fun",
];

// Bounds the retry loop when the combination space is nearly exhausted
const UNIQUENESS_ATTEMPTS: usize = 50;

/// Random template-and-slot content generation
///
/// Candidates within a single call are deduplicated by their
/// (template, name, hashtag) combination. When `topic` is given it
/// replaces the random card name in every candidate.
pub struct TemplateContentProvider;

impl TemplateContentProvider {
    pub fn new() -> Self {
        Self
    }

    fn build_candidate(&self, topic: Option<&str>, used: &mut HashSet<String>) -> GeneratedPost {
        let mut rng = rand::thread_rng();

        let mut template = TEMPLATES[0];
        let mut name = topic.unwrap_or(POKEMON_NAMES[0]);
        let mut hashtag = HASHTAGS[0];
        for _ in 0..UNIQUENESS_ATTEMPTS {
            template = TEMPLATES.choose(&mut rng).copied().unwrap_or(TEMPLATES[0]);
            name = match topic {
                Some(topic) => topic,
                None => POKEMON_NAMES
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or(POKEMON_NAMES[0]),
            };
            hashtag = HASHTAGS.choose(&mut rng).copied().unwrap_or(HASHTAGS[0]);

            if used.insert(format!("{template}-{name}-{hashtag}")) {
                break;
            }
        }

        let content = template
            .replace("{pokemon}", name)
            .replace("{hashtag}", hashtag);

        GeneratedPost {
            engagement_score: score(&content, &mut rng),
            content,
            topic: name.to_string(),
            generated_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl Default for TemplateContentProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Rough engagement heuristic: hashtags and emoji help, overlong text
/// hurts. Jittered so ranked candidates do not tie.
fn score(content: &str, rng: &mut impl Rng) -> f64 {
    let hashtags = content.matches('#').count() as f64;
    let emoji = content.chars().filter(|c| *c as u32 >= 0x1F000).count() as f64;
    let length_penalty = if content.len() > 280 { 2.0 } else { 0.0 };
    (5.0 + hashtags * 0.5 + emoji * 0.3 - length_penalty + rng.gen_range(0.0..1.0)).min(10.0)
}

#[async_trait]
impl ContentProvider for TemplateContentProvider {
    async fn generate(&self, count: usize, topic: Option<&str>) -> Result<Vec<GeneratedPost>> {
        let mut used = HashSet::new();
        Ok((0..count)
            .map(|_| self.build_candidate(topic, &mut used))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generates_requested_count() {
        let provider = TemplateContentProvider::new();
        let posts = provider.generate(3, None).await.unwrap();
        assert_eq!(posts.len(), 3);
        for post in &posts {
            assert!(!post.content.is_empty());
            assert!(post.content.contains("#TradeUp"));
            assert!(post.engagement_score > 0.0);
        }
    }

    #[tokio::test]
    async fn pinned_topic_flows_into_content_and_topic() {
        let provider = TemplateContentProvider::new();
        let posts = provider.generate(2, Some("Charizard")).await.unwrap();
        for post in &posts {
            assert_eq!(post.topic, "Charizard");
            assert!(post.content.contains("Charizard"));
        }
    }

    #[tokio::test]
    async fn no_unfilled_placeholders() {
        let provider = TemplateContentProvider::new();
        let posts = provider.generate(10, None).await.unwrap();
        for post in posts {
            assert!(!post.content.contains('{'), "{}", post.content);
        }
    }

    #[tokio::test]
    async fn candidates_in_one_batch_differ() {
        let provider = TemplateContentProvider::new();
        let posts = provider.generate(5, None).await.unwrap();
        let unique: std::collections::HashSet<_> =
            posts.iter().map(|p| p.content.clone()).collect();
        assert!(unique.len() >= 2);
    }
}
