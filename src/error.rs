//! Unified error types for ascon-pq.

use core::fmt;

/// Decryption failed: the tag did not verify or the input was too short to
/// carry one.
///
/// Every open path reports this one value, so callers cannot distinguish a
/// truncated ciphertext from a forged one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticationFailure;

impl fmt::Display for AuthenticationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "authentication failed")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AuthenticationFailure {}

/// Failure in the byte-level glue around the cipher (key file length, OS RNG).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingError;

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "encoding error")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodingError {}

impl From<AuthenticationFailure> for aead::Error {
    fn from(_: AuthenticationFailure) -> Self {
        aead::Error
    }
}
