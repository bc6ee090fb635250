//! Random secret generation for system-issued credentials.

use crate::{CoreError, Result};

use std::panic::Location;

use error_location::ErrorLocation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MIN_SECRET_LENGTH: usize = 8;
pub const DEFAULT_SECRET_LENGTH: usize = 12;

/// Upper/lower letters, digits, and a small symbol set. Visually
/// ambiguous characters (0/O, 1/l/I) are left out, as are quote
/// characters and backslash so the secret survives naive string
/// interpolation in email templates.
pub const DEFAULT_SECRET_ALPHABET: &str =
    "ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!@#$%&*";

/// Generate a random secret of `length` characters drawn independently
/// and uniformly from `alphabet`.
///
/// The generator is seeded from the OS entropy source on every call, so
/// no state is shared between calls and output is not predictable from
/// prior outputs.
#[track_caller]
pub fn generate_secret(length: usize, alphabet: &str) -> Result<String> {
    if length < MIN_SECRET_LENGTH {
        return Err(CoreError::SecretTooShort {
            requested: length,
            minimum: MIN_SECRET_LENGTH,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(CoreError::EmptyAlphabet {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let mut rng = StdRng::from_os_rng();
    let secret = (0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect();

    Ok(secret)
}
