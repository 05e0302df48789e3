// src/consts.rs
//! Shared constants — AES sizing parameters

/// AES block size in bytes, for every key size
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes
pub const KEY_SIZE_128: usize = 16;

/// AES-192 key size in bytes
pub const KEY_SIZE_192: usize = 24;

/// AES-256 key size in bytes
pub const KEY_SIZE_256: usize = 32;

/// The key lengths the AES key schedule accepts
pub const VALID_KEY_SIZES: [usize; 3] = [KEY_SIZE_128, KEY_SIZE_192, KEY_SIZE_256];

/// Default initialisation vector for CBC mode — all zeroes
///
/// Kept for compatibility with the original operation's default. Weak:
/// callers who care about confidentiality should supply a random IV per
/// message via [`crate::random_iv`].
pub const ZERO_IV: [u8; BLOCK_SIZE] = [0u8; BLOCK_SIZE];
