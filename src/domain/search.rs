use serde::{Deserialize, Serialize};

use super::UserRecord;

/// Message sent back when a search matched nothing.
pub const NO_RESULTS_MESSAGE: &str = "Nothing found";

/// A search as it arrives on the wire. Both fields may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

impl SearchQuery {
    pub fn new(email: impl Into<String>, number: Option<String>) -> Self {
        Self {
            email: Some(email.into()),
            number,
        }
    }

    /// The email, with an empty string treated as absent.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }

    /// The number filter, with an empty string treated as absent.
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref().filter(|number| !number.is_empty())
    }
}

/// Result of a completed search.
///
/// `NoResults` is a successful outcome and is kept apart from an empty list
/// so callers never confuse it with a missing field or a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Matches(Vec<UserRecord>),
    NoResults,
}

impl SearchOutcome {
    pub fn from_matches(records: Vec<UserRecord>) -> Self {
        if records.is_empty() {
            Self::NoResults
        } else {
            Self::Matches(records)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Matches(records) => records.len(),
            Self::NoResults => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoResults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_treated_as_absent() {
        let query = SearchQuery {
            email: Some(String::new()),
            number: Some(String::new()),
        };
        assert_eq!(query.email(), None);
        assert_eq!(query.number(), None);
    }

    #[test]
    fn test_missing_fields_deserialize() {
        let query: SearchQuery = serde_json::from_str(r#"{"email":"jane@x.com"}"#).unwrap();
        assert_eq!(query.email(), Some("jane@x.com"));
        assert_eq!(query.number(), None);

        let query: SearchQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.email(), None);
    }

    #[test]
    fn test_empty_matches_become_no_results() {
        assert_eq!(SearchOutcome::from_matches(Vec::new()), SearchOutcome::NoResults);

        let outcome = SearchOutcome::from_matches(vec![UserRecord::new("a@b.c", "111111")]);
        assert_eq!(outcome.len(), 1);
        assert!(!outcome.is_empty());
    }
}
