use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Value object ensuring that supplied text is a CURIE-style term identifier
/// such as `UBERON:0000924`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId {
    value: String,
}

fn curie_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9_]*:\S+$").expect("static CURIE pattern compiles")
    })
}

impl TermId {
    /// Validates and constructs a new [`TermId`] value object.
    ///
    /// The constructor rejects malformed identifiers so that every term uses
    /// canonical `PREFIX:LOCAL` identifiers.
    pub fn new(value: impl Into<String>) -> Result<Self, TermIdError> {
        let value = value.into();
        if !curie_pattern().is_match(&value) {
            return Err(TermIdError::Invalid { value });
        }
        Ok(Self { value })
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the ontology prefix, the part before the `:` separator.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.value
            .split_once(':')
            .map_or(self.value.as_str(), |(prefix, _)| prefix)
    }
}

impl Display for TermId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for TermId {
    type Err = TermIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for TermId {
    type Error = TermIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Errors produced when validating a [`TermId`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TermIdError {
    /// The provided text could not be parsed as a CURIE identifier.
    #[error("invalid term identifier: {value}")]
    Invalid { value: String },
}

#[cfg(test)]
mod tests {
    use super::TermId;

    #[test]
    fn accepts_valid_identifier() {
        let id = TermId::new("UBERON:0000924").expect("valid identifier");
        assert_eq!(id.as_str(), "UBERON:0000924");
        assert_eq!(id.prefix(), "UBERON");
    }

    #[test]
    fn rejects_identifier_without_separator() {
        let err = TermId::new("ectoderm").expect_err("missing separator");
        assert!(matches!(err, super::TermIdError::Invalid { value } if value == "ectoderm"));
    }

    #[test]
    fn rejects_identifier_with_blank_local_part() {
        assert!(TermId::new("UBERON:").is_err());
        assert!(TermId::new("UBERON: 123").is_err());
    }
}
