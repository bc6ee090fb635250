use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Email is empty after normalization {location}")]
    EmptyEmail { location: ErrorLocation },

    #[error("Email does not match the expected shape: {email} {location}")]
    MalformedEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Secret length {requested} is below the minimum of {minimum} {location}")]
    SecretTooShort {
        requested: usize,
        minimum: usize,
        location: ErrorLocation,
    },

    #[error("Secret alphabet is empty {location}")]
    EmptyAlphabet { location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
