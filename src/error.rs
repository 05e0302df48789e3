// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CryptorError>;

/// Status codes from the block-cipher primitive.
///
/// Deliberately coarse. In particular, corrupted ciphertext and bad
/// PKCS#7 padding surface as [`CipherStatus::Unspecified`], the same as
/// any other unexplained primitive failure. Distinguishable padding
/// errors enable padding-oracle attacks; callers who need to know
/// whether ciphertext arrived intact should use a separate MAC.
///
/// <https://en.wikipedia.org/wiki/Padding_oracle_attack>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CipherStatus {
    /// The primitive rejected its parameters
    Param,
    /// The supplied output buffer cannot hold the result
    BufferTooSmall,
    /// Input length violates the primitive's alignment rules
    Alignment,
    /// Any other failure, with no further detail
    Unspecified,
}

/// Errors produced by a cryptor invocation
#[derive(Error, Debug)]
pub enum CryptorError {
    /// Malformed request, detected before the primitive is invoked:
    /// bad key length, bad IV length, or misaligned decrypt input.
    /// Fix the request and retry; retrying unchanged cannot succeed.
    #[error("invalid cryptor parameters")]
    Parameter,

    /// The cipher primitive reported a non-success status
    #[error("cipher operation failed: {0:?}")]
    Cipher(CipherStatus),
}
