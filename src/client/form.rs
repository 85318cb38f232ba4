//! Form validation and number formatting for the search client.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::SearchQuery;
use crate::error::FormError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2}-[0-9]{2}-[0-9]{2}|[0-9]{6})$").expect("valid regex"));
static GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2})([0-9]{2})([0-9]{2})").expect("valid regex"));

/// Maximum length of the number field, grouped form included.
pub const NUMBER_MAX_LEN: usize = 8;

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    email: String,
    number: Option<String>,
}

impl SearchForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The number as entered, grouped or compact.
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    /// The six-digit form the server stores numbers in.
    pub fn compact_number(&self) -> Option<String> {
        self.number
            .as_deref()
            .map(|number| number.chars().filter(char::is_ascii_digit).collect())
    }

    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::new(self.email.clone(), self.compact_number())
    }
}

/// Checks both fields.
///
/// The email is required and must look like `local@domain.tld`. The number is
/// optional; when present it must be `DD-DD-DD` or six digits.
pub fn validate(email: &str, number: &str) -> Result<SearchForm, FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FormError::InvalidEmail);
    }

    let number = number.trim();
    let number = if number.is_empty() {
        None
    } else if NUMBER_RE.is_match(number) {
        Some(number.to_string())
    } else {
        return Err(FormError::InvalidNumber);
    };

    Ok(SearchForm {
        email: email.to_string(),
        number,
    })
}

/// Groups every run of six digits as `DD-DD-DD` for display.
pub fn format_number(value: &str) -> String {
    GROUP_RE.replace_all(value, "${1}-${2}-${3}").into_owned()
}

/// Cosmetic formatting applied while the number field is being edited.
///
/// Keeps digits only; once six are present they are shown in grouped pairs.
pub fn normalize_live(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(6).collect();
    if digits.len() == 6 {
        format_number(&digits)
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_required() {
        assert_eq!(validate("", ""), Err(FormError::EmailRequired));
        assert_eq!(validate("   ", "123456"), Err(FormError::EmailRequired));
    }

    #[test]
    fn test_email_shape() {
        assert!(validate("jane@x.com", "").is_ok());
        assert_eq!(validate("jane", ""), Err(FormError::InvalidEmail));
        assert_eq!(validate("jane@x", ""), Err(FormError::InvalidEmail));
        assert_eq!(validate("ja ne@x.com", ""), Err(FormError::InvalidEmail));
        assert_eq!(validate("jane@@x.com", ""), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_number_formats() {
        let form = validate("jane@x.com", "65-43-21").unwrap();
        assert_eq!(form.number(), Some("65-43-21"));
        assert_eq!(form.compact_number().as_deref(), Some("654321"));

        let form = validate("jane@x.com", "654321").unwrap();
        assert_eq!(form.compact_number().as_deref(), Some("654321"));

        assert_eq!(validate("jane@x.com", "65432"), Err(FormError::InvalidNumber));
        assert_eq!(validate("jane@x.com", "6543210"), Err(FormError::InvalidNumber));
        assert_eq!(validate("jane@x.com", "65-4321"), Err(FormError::InvalidNumber));
        assert_eq!(validate("jane@x.com", "ab-cd-ef"), Err(FormError::InvalidNumber));
    }

    #[test]
    fn test_query_carries_compact_number() {
        let query = validate("jane@x.com", "65-43-21").unwrap().to_query();
        assert_eq!(query.email(), Some("jane@x.com"));
        assert_eq!(query.number(), Some("654321"));

        let query = validate("jane@x.com", "").unwrap().to_query();
        assert_eq!(query.number(), None);
    }

    #[test]
    fn test_compact_and_grouped_display_identically() {
        assert_eq!(format_number("654321"), "65-43-21");
        assert_eq!(format_number("65-43-21"), "65-43-21");
        assert_eq!(format_number("654321"), format_number("65-43-21"));
    }

    #[test]
    fn test_live_normalization() {
        assert_eq!(normalize_live(""), "");
        assert_eq!(normalize_live("12"), "12");
        assert_eq!(normalize_live("12-3"), "123");
        assert_eq!(normalize_live("123456"), "12-34-56");
        assert_eq!(normalize_live("12-34-56"), "12-34-56");
        assert_eq!(normalize_live("1234567"), "12-34-56");
        assert!(normalize_live("12345678").len() <= NUMBER_MAX_LEN);
    }
}
