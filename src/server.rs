//! HTTP API for the UnicornVision dashboard
//!
//! One real boundary: `/api/sentiment` (GET with a `query` parameter, POST
//! with a JSON body). Any internal failure - malformed POST body included -
//! surfaces as a 500 with the one generic error message; nothing is
//! retried. `/api/chat` and `/api/health` are minor companions.

use crate::chat;
use crate::sentiment::SentimentGenerator;
use crate::types::SentimentResult;
use anyhow::Result;
use axum::{
    body::Bytes,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const DEFAULT_PORT: u16 = 3000;

/// Build the API router
pub fn router() -> Router {
    Router::new()
        .route("/api/sentiment", get(get_sentiment).post(post_sentiment))
        .route("/api/chat", post(post_chat))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve the API on localhost
pub async fn serve(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("UnicornVision API listening on http://{addr}");
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Any failure in the sentiment path collapses into one opaque 500
struct SentimentError(anyhow::Error);

impl<E: Into<anyhow::Error>> From<E> for SentimentError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for SentimentError {
    fn into_response(self) -> Response {
        tracing::error!("sentiment request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Failed to analyze sentiment" })),
        )
            .into_response()
    }
}

/// A real deployment would call a third-party provider here (Google Cloud
/// NL, AWS Comprehend, ...). The synthetic generator stands in for it.
pub async fn fetch_sentiment_analysis(query: &str) -> Result<SentimentResult> {
    Ok(SentimentGenerator::from_entropy().generate(query))
}

#[derive(Debug, Default, Deserialize)]
struct SentimentParams {
    #[serde(default)]
    query: Option<String>,
}

async fn get_sentiment(
    Query(params): Query<SentimentParams>,
) -> Result<Json<SentimentResult>, SentimentError> {
    let query = params.query.unwrap_or_default();
    tracing::debug!(query, "sentiment lookup");
    let results = fetch_sentiment_analysis(&query).await?;
    Ok(Json(results))
}

#[derive(Debug, Default, Deserialize)]
struct SentimentBody {
    #[serde(default)]
    query: Option<String>,
}

async fn post_sentiment(body: Bytes) -> Result<Json<SentimentResult>, SentimentError> {
    let body: SentimentBody = serde_json::from_slice(&body)?;
    let query = body.query.unwrap_or_default();
    tracing::debug!(query, "sentiment lookup");
    let results = fetch_sentiment_analysis(&query).await?;
    Ok(Json(results))
}

#[derive(Debug, Default, Deserialize)]
struct ChatBody {
    #[serde(default)]
    message: String,
}

#[derive(Debug, serde::Serialize)]
struct ChatReply {
    reply: &'static str,
    suggestions: [&'static str; 4],
}

async fn post_chat(Json(body): Json<ChatBody>) -> Json<ChatReply> {
    Json(ChatReply {
        reply: chat::reply(&body.message),
        suggestions: chat::SUGGESTIONS,
    })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
