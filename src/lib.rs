// src/lib.rs
//! aes-pad-cryptor — AES encryption and decryption with PKCS#7 padding
//!
//! In padded AES the plaintext can be any length while the ciphertext is
//! always a multiple of the AES block size (16 bytes); encrypting grows
//! the data slightly, decrypting shrinks it back. Both CBC and ECB mode
//! are supported: a request with an IV uses CBC, a request without one
//! uses ECB.
//!
//! The cipher itself comes from the RustCrypto `aes`/`cbc`/`ecb` crates;
//! this crate implements the contract around it — parameter validation,
//! output-buffer sizing, mode selection and an opaque error taxonomy —
//! and packages each transform as a one-shot [`CryptorJob`].
//!
//! Corrupted ciphertext does NOT get its own error kind: it surfaces as
//! the same opaque [`CipherStatus`] as any other primitive failure,
//! because distinguishable padding errors invite padding-oracle attacks.
//! Use a MAC if you need to verify ciphertext integrity.

pub mod consts;
pub mod cryptor;
pub mod error;
pub mod job;
pub mod request;

mod primitive;

pub use cryptor::{decrypt_to_vec, encrypt_to_vec, execute, CryptorResult};
pub use error::{CipherStatus, CryptorError, Result};
pub use job::{CancelHandle, CryptorJob};
pub use request::{random_iv, CryptorRequest, Direction};
