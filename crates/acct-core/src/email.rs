//! Email normalization and shape validation.
//!
//! Addresses are compared and stored in normalized form (trimmed,
//! ASCII-lowercased). The shape check is a cheap sanity filter, not a
//! deliverability guarantee.

use crate::{CoreError, Result};

use std::fmt;
use std::panic::Location;
use std::sync::LazyLock;

use error_location::ErrorLocation;
use regex::Regex;
use serde::Serialize;

/// local-part `@` domain `.` final label of at least two letters.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email shape regex")
});

/// A normalized email address. The inner string is always trimmed and
/// lowercase, so byte equality is case-insensitive equality of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalize and validate a raw, untrusted input string.
    #[track_caller]
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(CoreError::EmptyEmail {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !EMAIL_SHAPE.is_match(&normalized) {
            return Err(CoreError::MalformedEmail {
                email: normalized,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
