//! Canned replies for the dashboard assistant
//!
//! The assistant never analyzes anything: one greeting, one stock reply.

/// Opening line shown before the user says anything
pub const GREETING: &str = "Hello! How can I help you with your investment research today?";

/// The single canned reply returned for any non-empty message
pub const STOCK_REPLY: &str = "I'm analyzing that for you. Our AI models suggest focusing on emerging tech companies with strong fundamentals in the current market conditions.";

/// Suggested questions surfaced next to the input box
pub const SUGGESTIONS: [&str; 4] = [
    "Market trends in tech",
    "Analyze NVDA stock",
    "Compare ETF performance",
    "AI sector growth forecast",
];

/// Pick the reply for a user message
pub fn reply(message: &str) -> &'static str {
    if message.trim().is_empty() {
        GREETING
    } else {
        STOCK_REPLY
    }
}
