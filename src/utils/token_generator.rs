//! Short token generation.
//!
//! Tokens are drawn from the operating system CSPRNG via `getrandom`. Each
//! character is chosen independently and uniformly from [`TOKEN_ALPHABET`];
//! bytes that would bias the modulo reduction are rejected and redrawn.

use crate::domain::errors::TokenError;

/// Number of characters in every generated token.
pub const TOKEN_LENGTH: usize = 10;

/// Symbols a token may contain: lowercase, uppercase, digits and underscore.
pub const TOKEN_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Largest multiple of the alphabet size that fits in a byte. Random bytes at
/// or above this bound are discarded.
const ACCEPT_BELOW: usize = 256 / TOKEN_ALPHABET.len() * TOKEN_ALPHABET.len();

/// Source of candidate short tokens.
///
/// Candidates are not guaranteed to be unique; uniqueness is enforced by the
/// mapping store when the token is saved.
#[cfg_attr(test, mockall::automock)]
pub trait TokenGenerator: Send + Sync {
    /// Produces a new candidate token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::RandomSource`] if the entropy source fails.
    fn generate(&self) -> Result<String, TokenError>;
}

/// Stateless generator backed by the system random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> Result<String, TokenError> {
        generate_token()
    }
}

/// Generates a cryptographically secure random token of [`TOKEN_LENGTH`] characters.
///
/// # Errors
///
/// Returns [`TokenError::RandomSource`] if the system random number
/// generator is unavailable. There is no fallback to a weaker source.
///
/// # Examples
///
/// ```ignore
/// let token = generate_token()?;
/// assert_eq!(token.len(), 10);
/// assert!(token.bytes().all(|b| TOKEN_ALPHABET.contains(&b)));
/// ```
pub fn generate_token() -> Result<String, TokenError> {
    let mut token = String::with_capacity(TOKEN_LENGTH);
    let mut buffer = [0u8; TOKEN_LENGTH * 2];

    while token.len() < TOKEN_LENGTH {
        getrandom::fill(&mut buffer).map_err(|e| TokenError::RandomSource(e.to_string()))?;

        for &byte in &buffer {
            if token.len() == TOKEN_LENGTH {
                break;
            }
            let byte = usize::from(byte);
            if byte < ACCEPT_BELOW {
                token.push(char::from(TOKEN_ALPHABET[byte % TOKEN_ALPHABET.len()]));
            }
        }
    }

    Ok(token)
}
