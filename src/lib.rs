//! UnicornVision - mock investment research backend
//!
//! Everything data-bearing in UnicornVision is synthetic: the sentiment
//! endpoint fabricates its articles and scores, and the AI Investment
//! Council replays a fixed script. This crate is honest about that - it
//! implements the two pieces of real logic behind the dashboard and
//! nothing else:
//!
//! - **Sentiment fallback generator**: a pure function from a query string
//!   to a fixed-shape analysis response, wrapped by `/api/sentiment`.
//! - **Council simulator**: an explicit state machine that paces the
//!   scripted five-agent debate and derives a consensus recommendation.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use unicorn_vision::{CouncilRun, CouncilTiming, SentimentGenerator};
//!
//! // Synthesize a sentiment response
//! let result = SentimentGenerator::from_entropy().generate("Tesla");
//!
//! // Play the council debate
//! let (run, mut events) = CouncilRun::spawn(CouncilTiming::default());
//! while let Some(event) = events.recv().await { /* render */ }
//! run.cancel(); // on teardown, if the run may still be pending
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │            Dashboard / CLI consumer            │
//! └──────────────┬──────────────────┬─────────────┘
//!                │ HTTP             │ events
//!                ▼                  ▼
//!     /api/sentiment (axum)   CouncilRun (tokio timers)
//!                │                  │
//!                ▼                  ▼
//!      SentimentGenerator    CouncilSimulator
//!        (pure, seeded)     (pure state machine)
//! ```

pub mod chat;
pub mod council;
pub mod script;
pub mod sentiment;
pub mod server;
pub mod types;

// Core types
pub use council::{
    CouncilEvent, CouncilRun, CouncilSimulator, CouncilSnapshot, CouncilTiming, Phase,
};
pub use script::{council_personas, council_script, ScriptLine, STARTUP_NAME};
pub use sentiment::{default_keywords, SentimentGenerator};
pub use server::{router, serve, DEFAULT_PORT};
pub use types::*;
