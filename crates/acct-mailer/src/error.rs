use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    /// Network-level failure, including the client-side timeout.
    #[error("Transport error: {source} {location}")]
    Transport {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// The provider answered with a non-success status.
    #[error("Provider rejected send: HTTP {status}: {message} {location}")]
    Provider {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// Outbound notification is globally disabled. Callers treat this as
    /// "skipped", not as an operational fault.
    #[error("Outbound notification is disabled {location}")]
    Disabled { location: ErrorLocation },

    #[error("Failed to build HTTP client: {source} {location}")]
    Build {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

impl MailerError {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled { .. })
    }
}

impl From<reqwest::Error> for MailerError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MailerError>;
