//! src/opdata/seal.rs
//! Exact mirror of `open.rs`: pad in front, encrypt, authenticate.
//!
//! Used to build test vectors and fixture vaults.

use crate::aliases::Iv16;
use crate::consts::{BLOCK_LEN, OPDATA01_MAGIC};
use crate::crypto::{cbc, hmac, rng};
use crate::error::Result;
use crate::keys::KeyPair;
use crate::secret::SecretBuffer;

/// Seal `plaintext` with a fresh random IV.
pub fn seal(plaintext: &[u8], keys: &KeyPair) -> Result<Vec<u8>> {
    let iv = rng::random_iv()?;
    seal_with_iv(plaintext, &iv, keys)
}

/// Seal `plaintext` under the given IV.
///
/// Between 1 and 16 random bytes are prepended so the padded length is a
/// multiple of the block size.
pub fn seal_with_iv(plaintext: &[u8], iv: &Iv16, keys: &KeyPair) -> Result<Vec<u8>> {
    let pad_len = BLOCK_LEN - plaintext.len() % BLOCK_LEN;

    let mut padded = SecretBuffer::zeroed(pad_len + plaintext.len());
    rng::fill_random(&mut padded.expose_secret_mut()[..pad_len])?;
    padded.expose_secret_mut()[pad_len..].copy_from_slice(plaintext);
    cbc::encrypt_in_place(padded.expose_secret_mut(), iv, keys.enc())?;

    let mut out = Vec::with_capacity(8 + 8 + 16 + padded.len() + 32);
    out.extend_from_slice(OPDATA01_MAGIC);
    out.extend_from_slice(&(plaintext.len() as u64).to_le_bytes());
    out.extend_from_slice(iv);
    out.extend_from_slice(padded.expose_secret());

    let tag = hmac::authenticate(keys.mac(), &[&out])?;
    out.extend_from_slice(&tag);
    Ok(out)
}
