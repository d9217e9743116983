//! Contract error types for project hub

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors returned by the service layer.
///
/// Store failures are carried unchanged in [`DomainError::Database`];
/// not-found is never an error (lookups return `Option` / empty `Vec`).
#[derive(Debug, Error)]
pub enum DomainError {
    /// Field validation failed before any store access
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Error raised by the relational store (constraint violations included)
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Classified constraint violation, when the store reported one
    pub fn sql_err(&self) -> Option<SqlErr> {
        match self {
            Self::Database(err) => err.sql_err(),
            Self::Validation { .. } => None,
        }
    }
}

/// A stored enum column held a token outside its closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} token: {token}")]
pub struct UnknownTokenError {
    /// Enum type name
    pub kind: &'static str,
    /// Offending token
    pub token: String,
}

impl From<UnknownTokenError> for DbErr {
    fn from(err: UnknownTokenError) -> Self {
        DbErr::Type(err.to_string())
    }
}
