// src/primitive.rs
//! Dispatch onto the block-cipher primitive
//!
//! This is the crate's only contact with the actual cipher. Key length
//! selects the AES key schedule, the IV's presence selects the chaining
//! mode, and padding is always PKCS#7. Everything above this module
//! treats the primitive as opaque: one call in, a status and a byte
//! count out.

use aes::{Aes128, Aes192, Aes256};
use cipher::block_padding::Pkcs7;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};

use crate::consts::{KEY_SIZE_128, KEY_SIZE_192, KEY_SIZE_256};
use crate::error::CipherStatus;
use crate::request::Direction;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;
type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes192EcbEnc = ecb::Encryptor<Aes192>;
type Aes256EcbEnc = ecb::Encryptor<Aes256>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;
type Aes192EcbDec = ecb::Decryptor<Aes192>;
type Aes256EcbDec = ecb::Decryptor<Aes256>;

/// Chaining mode, derived from the request's IV field
#[derive(Debug, Clone, Copy)]
pub(crate) enum Mode<'a> {
    Ecb,
    Cbc(&'a [u8]),
}

/// Run one padded transform, writing into `out`.
///
/// Returns the number of bytes written on success. `out` must have the
/// capacity computed by the caller; the bytes actually written are
/// authoritative and may be fewer.
pub(crate) fn transform(
    direction: Direction,
    mode: Mode<'_>,
    key: &[u8],
    input: &[u8],
    out: &mut [u8],
) -> Result<usize, CipherStatus> {
    use Direction::{Decrypt, Encrypt};

    match (direction, mode, key.len()) {
        (Encrypt, Mode::Cbc(iv), KEY_SIZE_128) => {
            encrypt(cbc_init::<Aes128CbcEnc>(key, iv)?, input, out)
        }
        (Encrypt, Mode::Cbc(iv), KEY_SIZE_192) => {
            encrypt(cbc_init::<Aes192CbcEnc>(key, iv)?, input, out)
        }
        (Encrypt, Mode::Cbc(iv), KEY_SIZE_256) => {
            encrypt(cbc_init::<Aes256CbcEnc>(key, iv)?, input, out)
        }
        (Decrypt, Mode::Cbc(iv), KEY_SIZE_128) => {
            decrypt(cbc_init::<Aes128CbcDec>(key, iv)?, input, out)
        }
        (Decrypt, Mode::Cbc(iv), KEY_SIZE_192) => {
            decrypt(cbc_init::<Aes192CbcDec>(key, iv)?, input, out)
        }
        (Decrypt, Mode::Cbc(iv), KEY_SIZE_256) => {
            decrypt(cbc_init::<Aes256CbcDec>(key, iv)?, input, out)
        }
        (Encrypt, Mode::Ecb, KEY_SIZE_128) => encrypt(ecb_init::<Aes128EcbEnc>(key)?, input, out),
        (Encrypt, Mode::Ecb, KEY_SIZE_192) => encrypt(ecb_init::<Aes192EcbEnc>(key)?, input, out),
        (Encrypt, Mode::Ecb, KEY_SIZE_256) => encrypt(ecb_init::<Aes256EcbEnc>(key)?, input, out),
        (Decrypt, Mode::Ecb, KEY_SIZE_128) => decrypt(ecb_init::<Aes128EcbDec>(key)?, input, out),
        (Decrypt, Mode::Ecb, KEY_SIZE_192) => decrypt(ecb_init::<Aes192EcbDec>(key)?, input, out),
        (Decrypt, Mode::Ecb, KEY_SIZE_256) => decrypt(ecb_init::<Aes256EcbDec>(key)?, input, out),
        // Unreachable after request validation; the primitive's own
        // parameter check stays as the backstop.
        _ => Err(CipherStatus::Param),
    }
}

fn cbc_init<C: KeyIvInit>(key: &[u8], iv: &[u8]) -> Result<C, CipherStatus> {
    C::new_from_slices(key, iv).map_err(|_| CipherStatus::Param)
}

fn ecb_init<C: KeyInit>(key: &[u8]) -> Result<C, CipherStatus> {
    C::new_from_slice(key).map_err(|_| CipherStatus::Param)
}

fn encrypt<C: BlockEncryptMut>(cipher: C, input: &[u8], out: &mut [u8]) -> Result<usize, CipherStatus> {
    cipher
        .encrypt_padded_b2b_mut::<Pkcs7>(input, out)
        .map(|ciphertext| ciphertext.len())
        .map_err(|_| CipherStatus::BufferTooSmall)
}

fn decrypt<C: BlockDecryptMut>(cipher: C, input: &[u8], out: &mut [u8]) -> Result<usize, CipherStatus> {
    // UnpadError covers bad padding, misalignment and short buffers
    // alike; it stays a single opaque status on purpose (see
    // `CipherStatus` docs).
    cipher
        .decrypt_padded_b2b_mut::<Pkcs7>(input, out)
        .map(|plaintext| plaintext.len())
        .map_err(|_| CipherStatus::Unspecified)
}
