//! The search service actor and its client handle.

mod client;
mod service;

pub use client::SearchClient;
pub use service::{SearchService, DEFAULT_SEARCH_DELAY};
