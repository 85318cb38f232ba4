pub mod record;
pub mod search;

pub use record::*;
pub use search::*;
