// src/request.rs
//! Immutable request values describing one encrypt or decrypt

use rand::RngCore;
use zeroize::Zeroizing;

use crate::consts::{BLOCK_SIZE, ZERO_IV};

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// One AES-with-padding transform, fully described up front.
///
/// A request is constructed by [`CryptorRequest::to_encrypt`] or
/// [`CryptorRequest::to_decrypt`] and is immutable apart from the
/// builder-style IV methods, which consume `self` — once a request has
/// been handed to [`crate::execute`] or a [`crate::CryptorJob`] there is
/// no way to change it.
///
/// By default a request uses CBC mode with an all-zero IV, matching the
/// original operation's behaviour. That default is weak: generate a
/// fresh random IV per message with [`random_iv`] and pass it to
/// [`CryptorRequest::with_iv`] whenever confidentiality matters, or
/// select ECB (generally not recommended) with
/// [`CryptorRequest::without_iv`].
///
/// Key and input are zeroized when the request is dropped.
pub struct CryptorRequest {
    pub(crate) direction: Direction,
    pub(crate) input: Zeroizing<Vec<u8>>,
    pub(crate) key: Zeroizing<Vec<u8>>,
    pub(crate) iv: Option<Vec<u8>>,
}

impl CryptorRequest {
    /// Request encrypting `input` under `key`.
    ///
    /// `input` may be any length. `key` must be 16, 24 or 32 bytes;
    /// the length selects the AES key schedule. Length checks happen
    /// at execution, not here.
    pub fn to_encrypt(input: Vec<u8>, key: Vec<u8>) -> Self {
        Self::new(Direction::Encrypt, input, key)
    }

    /// Request decrypting `input` under `key`.
    ///
    /// `input` length must be a multiple of the AES block size (16).
    pub fn to_decrypt(input: Vec<u8>, key: Vec<u8>) -> Self {
        Self::new(Direction::Decrypt, input, key)
    }

    fn new(direction: Direction, input: Vec<u8>, key: Vec<u8>) -> Self {
        Self {
            direction,
            input: Zeroizing::new(input),
            key: Zeroizing::new(key),
            iv: Some(ZERO_IV.to_vec()),
        }
    }

    /// Use CBC mode with the given initialisation vector.
    ///
    /// Must be the AES block size (16 bytes); checked at execution.
    pub fn with_iv(mut self, iv: Vec<u8>) -> Self {
        self.iv = Some(iv);
        self
    }

    /// Use ECB mode (no IV).
    ///
    /// ECB leaks plaintext block patterns and is generally not
    /// recommended.
    pub fn without_iv(mut self) -> Self {
        self.iv = None;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

// Never prints key, IV or input bytes
impl std::fmt::Debug for CryptorRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptorRequest")
            .field("direction", &self.direction)
            .field("input_len", &self.input.len())
            .field("key_len", &self.key.len())
            .field("mode", &if self.iv.is_some() { "CBC" } else { "ECB" })
            .finish()
    }
}

/// Generate a cryptographically random block-sized IV
pub fn random_iv() -> [u8; BLOCK_SIZE] {
    let mut iv = [0u8; BLOCK_SIZE];
    rand::rng().fill_bytes(&mut iv);
    iv
}
