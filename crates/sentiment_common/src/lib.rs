//! Sentiment Common - Shared types and schemas for the sentiment service.
//!
//! Wire schemas for the analyze/health endpoints plus the classification
//! threshold rules. Everything here is request-scoped data; nothing holds
//! state across requests.

pub mod schemas;
pub mod sentiment;

pub use schemas::*;
pub use sentiment::*;
