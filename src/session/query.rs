//! Search term validation

use crate::error::ValidationError;
use std::fmt;

pub const MIN_QUERY_CHARS: usize = 3;
pub const MAX_QUERY_CHARS: usize = 250;

/// A search term that passed the length check
///
/// The wrapped value is exactly what the user typed; trimming only affects
/// the minimum-length check, never the term sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(term: &str) -> Result<Self, ValidationError> {
        validate(term)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check a raw search term against the length constraints
pub fn validate(term: &str) -> Result<SearchQuery, ValidationError> {
    if term.trim().chars().count() < MIN_QUERY_CHARS {
        return Err(ValidationError::TooShort);
    }
    if term.chars().count() > MAX_QUERY_CHARS {
        return Err(ValidationError::TooLong);
    }
    Ok(SearchQuery(term.to_string()))
}
