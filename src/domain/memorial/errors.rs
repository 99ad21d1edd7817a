//! Memorial lookup errors.

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemorialError {
    /// No memorial is published under this slug.
    NotFound(String),

    /// A required setting is absent.
    ConfigurationMissing(String),

    /// Datastore or transport failure.
    Infrastructure(String),
}

impl MemorialError {
    pub fn not_found(slug: impl Into<String>) -> Self {
        MemorialError::NotFound(slug.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            MemorialError::NotFound(_) => ErrorCode::NotFound,
            MemorialError::ConfigurationMissing(_) => ErrorCode::ConfigurationMissing,
            MemorialError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            MemorialError::NotFound(slug) => format!("Memorial not found: {}", slug),
            MemorialError::ConfigurationMissing(setting) => {
                format!("Missing configuration: {}", setting)
            }
            MemorialError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for MemorialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MemorialError {}

impl From<DomainError> for MemorialError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ConfigurationMissing => MemorialError::ConfigurationMissing(
                err.details
                    .get("setting")
                    .cloned()
                    .unwrap_or_else(|| err.message.clone()),
            ),
            _ => MemorialError::Infrastructure(err.message),
        }
    }
}
