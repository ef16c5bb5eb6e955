//! Sentiment daemon library - exposes modules for testing.

pub mod analysis;
pub mod config;
pub mod lexicon;
pub mod routes;
pub mod scorer;
pub mod server;
