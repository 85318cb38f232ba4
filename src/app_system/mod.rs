//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod search_system;
pub mod tracing;

pub use config::*;
pub use search_system::*;
pub use self::tracing::*;
