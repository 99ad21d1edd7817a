//! Public URL key of a memorial.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExternalOrderId, ValidationError};

/// Upper bound on slug length, in characters.
pub const MAX_SLUG_LEN: usize = 200;

/// A validated memorial slug.
///
/// Slugs are used verbatim as the last path segment of `/m/{slug}`, so they
/// must be non-blank and free of whitespace, control characters and the URL
/// delimiters `/`, `?` and `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        if trimmed.chars().count() > MAX_SLUG_LEN {
            return Err(ValidationError::invalid_format(
                "slug",
                format!("must be at most {} characters", MAX_SLUG_LEN),
            ));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#'))
        {
            return Err(ValidationError::invalid_format(
                "slug",
                format!("contains forbidden character {:?}", bad),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Slug used when a draft does not name one.
    pub fn from_order_id(order_id: &ExternalOrderId) -> Result<Self, ValidationError> {
        Self::new(order_id.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_typical_slugs() {
        assert_eq!(Slug::new("shadow-reaper").unwrap().as_str(), "shadow-reaper");
        assert_eq!(Slug::new("5O190127TN364715T").unwrap().as_str(), "5O190127TN364715T");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Slug::new("  llama_lord ").unwrap().as_str(), "llama_lord");
    }

    #[test]
    fn rejects_blank() {
        assert!(matches!(
            Slug::new("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn rejects_path_delimiters() {
        assert!(Slug::new("a/b").is_err());
        assert!(Slug::new("a?b").is_err());
        assert!(Slug::new("a#b").is_err());
        assert!(Slug::new("two words").is_err());
    }

    #[test]
    fn rejects_overlong() {
        let long = "x".repeat(MAX_SLUG_LEN + 1);
        assert!(Slug::new(long).is_err());
        assert!(Slug::new("x".repeat(MAX_SLUG_LEN)).is_ok());
    }

    #[test]
    fn falls_back_to_order_id() {
        let order_id = ExternalOrderId::new("ORDER-42").unwrap();
        assert_eq!(Slug::from_order_id(&order_id).unwrap().as_str(), "ORDER-42");
    }

    #[test]
    fn deserializes_through_validation() {
        assert!(serde_json::from_str::<Slug>("\"ok-slug\"").is_ok());
        assert!(serde_json::from_str::<Slug>("\"bad/slug\"").is_err());
    }

    proptest! {
        #[test]
        fn url_safe_slugs_are_accepted_unchanged(s in "[A-Za-z0-9_-]{1,200}") {
            let slug = Slug::new(s.clone()).unwrap();
            prop_assert_eq!(slug.as_str(), s.as_str());
        }

        #[test]
        fn any_slash_is_rejected(prefix in "[a-z]{0,20}", suffix in "[a-z]{0,20}") {
            let candidate = format!("{}/{}", prefix, suffix);
            prop_assert!(Slug::new(candidate).is_err());
        }

        #[test]
        fn accepted_slugs_never_contain_whitespace(s in "\\PC{1,60}") {
            if let Ok(slug) = Slug::new(s) {
                prop_assert!(!slug.as_str().chars().any(char::is_whitespace));
            }
        }
    }
}
