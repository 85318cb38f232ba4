use serde::{Deserialize, Serialize};

/// A stored email/number pair. Records are seeded at startup and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub number: String,
}

impl UserRecord {
    /// Creates a new UserRecord instance.
    ///
    /// # Arguments
    /// * `email` - Match key, compared case-insensitively
    /// * `number` - Six-digit identifier, compared exactly
    pub fn new(email: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            number: number.into(),
        }
    }
}
