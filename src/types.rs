//! Core types for the UnicornVision backend
//!
//! Two families live here: the wire types returned by the sentiment
//! endpoint, and the in-memory state of the council debate. The sentiment
//! types match the JSON shape consumed by the dashboard field-for-field,
//! camelCase included.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentiment label attached to articles and keywords
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// A fabricated news article in a sentiment response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    /// A search-engine query link, never a direct article URL
    pub url: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub time: DateTime<Utc>,
    pub sentiment: Sentiment,
    pub score: f64,
}

/// A keyword extracted from the query with its assigned sentiment weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Keyword {
    pub word: String,
    pub sentiment: Sentiment,
    pub weight: f64,
}

/// Full sentiment analysis response
///
/// Invariants: `articles` always has length 3; `keywords` has one entry per
/// qualifying query token, or the fixed 4-entry default when there are none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentResult {
    /// Overall score in [-50, 50), drawn independently of the query
    pub overall: f64,
    pub articles: Vec<Article>,
    pub keywords: Vec<Keyword>,
}

/// One of the five fixed council personas
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Persona {
    pub id: String,
    pub name: String,
    /// One-line description of what this agent contributes
    pub role: String,
    /// Display color (hex) used by rendering code
    pub color: String,
    pub position: TablePosition,
}

/// Fixed seat offset around the round table, in pixels from center
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TablePosition {
    pub x: i32,
    pub y: i32,
}

/// Mutable per-agent state during a council run
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgentState {
    pub id: String,
    /// Integer confidence, kept within [50, 100]
    pub confidence: u8,
    pub is_speaking: bool,
    pub recent_message: Option<String>,
}

/// One revealed message in the council transcript (append-only)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Message {
    pub id: String,
    /// Persona id of the speaker
    pub agent: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Consensus recommendation derived from the mean agent confidence
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Recommendation {
    Invest,
    Avoid,
    Wait,
}

/// Derived consensus state, recomputed after every reveal
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Consensus {
    pub rating: Recommendation,
    /// Rounded mean of all agents' confidence
    pub confidence: u8,
}

impl Recommendation {
    /// Map a mean confidence to a recommendation label
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence > 80 {
            Recommendation::Invest
        } else if confidence < 60 {
            Recommendation::Avoid
        } else {
            Recommendation::Wait
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Recommendation::Invest => "Invest",
            Recommendation::Avoid => "Avoid",
            Recommendation::Wait => "Wait",
        }
    }
}

impl Sentiment {
    pub fn name(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}
