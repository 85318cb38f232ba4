//! Terminal search client: form validation, request lifecycle and rendering.

pub mod form;
pub mod render;
pub mod session;

pub use form::{format_number, normalize_live, validate, SearchForm};
pub use render::ResultsView;
pub use session::{SearchSession, SubmitOutcome};
