//! Field validation applied by services before any store access

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::contract::DomainError;

#[allow(clippy::expect_used)] // good regex, it doesn't panic
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("static regex should not panic")
});

/// Validate email format.
///
/// Accepts `local@domain.tld` where the local part uses alphanumerics and
/// `+ _ . -`, and the top-level domain has at least two letters.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if !EMAIL_REGEX.is_match(email) {
        return Err(DomainError::validation(format!(
            "Invalid email format: {email}"
        )));
    }
    Ok(())
}

/// Validate that a budget, when present, is not negative
pub fn validate_budget(budget: Option<Decimal>) -> Result<(), DomainError> {
    match budget {
        Some(value) if value < Decimal::ZERO => Err(
            DomainError::validation(format!("Budget must be >= 0, got {value}")),
        ),
        _ => Ok(()),
    }
}
