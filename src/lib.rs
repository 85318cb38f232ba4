//! # User Search
//!
//! A search form client and a deliberately slow search server that agree on
//! one rule: a newer search replaces an older one that has not finished.
//!
//! - **Server** - [`search_actor::SearchService`] owns the record store and a
//!   single pending slot. A search waits out a fixed delay before it is
//!   evaluated; a second search arriving meanwhile supersedes the first, which
//!   is answered with `409 Conflict` and never evaluated. The HTTP layer in
//!   [`http`] exposes it as `POST /api/search`.
//! - **Client** - [`client::SearchSession`] cancels its own outstanding
//!   request before sending a new one and treats cancellation as a normal
//!   outcome rather than an error.
//!
//! ```text
//! client ──POST /api/search──▶ search_handler ──▶ SearchClient ──mpsc──▶ SearchService
//!                                                                           │
//!                                                           RecordStore ◀───┘
//! ```

pub mod app_system;
pub mod client;
pub mod domain;
pub mod error;
pub mod http;
pub mod messages;
pub mod search_actor;
pub mod store;

#[cfg(test)]
mod mock_framework;
