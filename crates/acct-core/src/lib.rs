pub mod credential;
pub mod email;
pub mod error;
pub mod models;

pub use credential::{
    DEFAULT_SECRET_ALPHABET, DEFAULT_SECRET_LENGTH, MIN_SECRET_LENGTH, generate_secret,
};
pub use email::EmailAddress;
pub use error::{CoreError, Result};
pub use models::identity::Identity;

#[cfg(test)]
mod tests;
