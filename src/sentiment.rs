//! Sentiment Fallback Generator
//!
//! Synthesizes a fixed-shape sentiment response from a free-text query.
//! This is the stand-in for a real sentiment provider (Google NL, AWS
//! Comprehend, ...) that the deployed dashboard never had: three templated
//! articles, positionally-assigned keyword weights, and an overall score
//! drawn independently of everything else. The generator is total - any
//! query, including the empty string, produces a fully populated result.
//!
//! Randomness is injected through the constructor so tests can seed it.

use crate::types::{Article, Keyword, Sentiment, SentimentResult};
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sentiment cycle applied to query keywords by position (index mod 3)
const KEYWORD_SENTIMENTS: [Sentiment; 3] =
    [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

/// Weight table applied to query keywords by position (index mod 5)
const KEYWORD_WEIGHTS: [f64; 5] = [0.82, 0.65, 0.47, 0.73, 0.58];

/// Query tokens at or below this length are discarded
const MIN_KEYWORD_LEN: usize = 3;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200";

/// Synthetic sentiment data generator with injectable randomness
pub struct SentimentGenerator<R: Rng> {
    rng: R,
}

impl SentimentGenerator<StdRng> {
    /// Generator backed by a fresh OS-seeded RNG (production path)
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SentimentGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a full sentiment result for a query. Never fails.
    pub fn generate(&mut self, query: &str) -> SentimentResult {
        // The overall score ignores the query entirely. That matches the
        // shipped behavior; it can contradict the per-article scores.
        let overall = self.rng.gen_range(-50.0..50.0);

        SentimentResult {
            overall,
            articles: build_articles(query),
            keywords: extract_keywords(query),
        }
    }
}

/// Build the three fixed-template articles for a query
fn build_articles(query: &str) -> Vec<Article> {
    let now = Utc::now();

    vec![
        Article {
            id: "news-1".to_string(),
            title: format!("Latest updates on {query}"),
            summary: format!(
                "Recent developments in {query} show promising trends according to industry experts."
            ),
            source: "Business Insider".to_string(),
            url: search_url(query, "news business insider"),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            time: now,
            sentiment: Sentiment::Positive,
            score: 0.65,
        },
        Article {
            id: "news-2".to_string(),
            title: format!("{query}: Challenges and opportunities ahead"),
            summary: format!(
                "A comprehensive analysis of the current state of {query} and what it means for investors."
            ),
            source: "Forbes".to_string(),
            url: search_url(query, "analysis forbes"),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            time: now - Duration::days(2),
            sentiment: Sentiment::Neutral,
            score: 0.05,
        },
        Article {
            id: "news-3".to_string(),
            title: format!("Concerns rising about {query} market volatility"),
            summary: format!(
                "Experts warn about potential risks associated with {query} in the current economic climate."
            ),
            source: "Financial Times".to_string(),
            url: search_url(query, "concerns financial times"),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            time: now - Duration::days(5),
            sentiment: Sentiment::Negative,
            score: -0.38,
        },
    ]
}

/// Search-engine link for a query plus a per-article keyword suffix
fn search_url(query: &str, suffix: &str) -> String {
    let q = format!("{query} {suffix}");
    format!("https://www.google.com/search?q={}", urlencoding::encode(&q))
}

/// Split the query into keywords and assign sentiment/weight by position.
/// Falls back to a fixed default list when nothing qualifies.
fn extract_keywords(query: &str) -> Vec<Keyword> {
    let keywords: Vec<Keyword> = query
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_KEYWORD_LEN)
        .enumerate()
        .map(|(i, word)| Keyword {
            word: word.to_lowercase(),
            sentiment: KEYWORD_SENTIMENTS[i % KEYWORD_SENTIMENTS.len()],
            weight: KEYWORD_WEIGHTS[i % KEYWORD_WEIGHTS.len()],
        })
        .collect();

    if keywords.is_empty() {
        default_keywords()
    } else {
        keywords
    }
}

/// The fixed keyword list substituted when the query yields no tokens
pub fn default_keywords() -> Vec<Keyword> {
    vec![
        Keyword {
            word: "market".to_string(),
            sentiment: Sentiment::Neutral,
            weight: 0.6,
        },
        Keyword {
            word: "investment".to_string(),
            sentiment: Sentiment::Positive,
            weight: 0.75,
        },
        Keyword {
            word: "trend".to_string(),
            sentiment: Sentiment::Positive,
            weight: 0.68,
        },
        Keyword {
            word: "risk".to_string(),
            sentiment: Sentiment::Negative,
            weight: 0.55,
        },
    ]
}
