// src/cryptor.rs
//! Core transform — validation, buffer sizing, primitive call, finalization

use log::debug;
use zeroize::Zeroize;

use crate::consts::{BLOCK_SIZE, VALID_KEY_SIZES};
use crate::error::CryptorError;
use crate::primitive::{self, Mode};
use crate::request::{CryptorRequest, Direction};

/// Terminal outcome of one cryptor invocation.
///
/// Success and failure are mutually exclusive: an `Err` means no usable
/// output bytes were produced.
pub type CryptorResult = Result<Vec<u8>, CryptorError>;

/// Run one padded AES transform to completion.
///
/// Takes the request by value; it cannot be observed or reused
/// afterwards. Phases, in order:
///
/// 1. validate key length, IV length and (for decryption) input
///    alignment — on failure the primitive is never invoked;
/// 2. allocate the output buffer (one block of slack for encryption,
///    exactly the input length for decryption);
/// 3. invoke the cipher primitive;
/// 4. truncate to the bytes actually written, or map the primitive's
///    status into [`CryptorError::Cipher`].
///
/// The working buffer is zeroized before being dropped on the failure
/// path.
pub fn execute(request: CryptorRequest) -> CryptorResult {
    let CryptorRequest {
        direction,
        input,
        key,
        iv,
    } = request;

    if direction == Direction::Decrypt && input.len() % BLOCK_SIZE != 0 {
        return Err(CryptorError::Parameter);
    }
    if !VALID_KEY_SIZES.contains(&key.len()) {
        return Err(CryptorError::Parameter);
    }
    if let Some(iv) = &iv {
        if iv.len() != BLOCK_SIZE {
            return Err(CryptorError::Parameter);
        }
    }

    // Capacity upper bound. PKCS#7 adds 1–16 bytes on encryption and
    // can only shrink the result on decryption. The primitive reports
    // the bytes actually written; never assume it filled the buffer.
    let capacity = match direction {
        Direction::Encrypt => input.len() + BLOCK_SIZE,
        Direction::Decrypt => input.len(),
    };
    let mut out = vec![0u8; capacity];

    let mode = match &iv {
        Some(iv) => Mode::Cbc(iv.as_slice()),
        None => Mode::Ecb,
    };

    debug!(
        "cryptor: {:?} {} bytes, {} mode",
        direction,
        input.len(),
        if iv.is_some() { "CBC" } else { "ECB" },
    );

    match primitive::transform(direction, mode, &key, &input, &mut out) {
        Ok(written) => {
            out.truncate(written);
            Ok(out)
        }
        Err(status) => {
            // May hold partial plaintext from a failed decryption
            out.zeroize();
            debug!("cryptor: primitive failed with {:?}", status);
            Err(CryptorError::Cipher(status))
        }
    }
}

/// Encrypt plaintext in one call.
///
/// `iv = Some(..)` selects CBC with that IV, `None` selects ECB. Use
/// [`crate::CryptorRequest`] directly for the zero-IV CBC default.
pub fn encrypt_to_vec(plaintext: &[u8], key: &[u8], iv: Option<&[u8]>) -> CryptorResult {
    execute(apply_iv(
        CryptorRequest::to_encrypt(plaintext.to_vec(), key.to_vec()),
        iv,
    ))
}

/// Decrypt ciphertext in one call; same IV convention as [`encrypt_to_vec`]
pub fn decrypt_to_vec(ciphertext: &[u8], key: &[u8], iv: Option<&[u8]>) -> CryptorResult {
    execute(apply_iv(
        CryptorRequest::to_decrypt(ciphertext.to_vec(), key.to_vec()),
        iv,
    ))
}

fn apply_iv(request: CryptorRequest, iv: Option<&[u8]>) -> CryptorRequest {
    match iv {
        Some(iv) => request.with_iv(iv.to_vec()),
        None => request.without_iv(),
    }
}
