//! src/opdata/open.rs
//! Authenticate-then-decrypt for opdata01 envelopes.

use crate::crypto::{cbc, hmac};
use crate::error::Result;
use crate::keys::KeyPair;
use crate::opdata::read::parse_envelope;
use crate::secret::SecretBuffer;

/// Open an opdata01 blob and return the verified plaintext.
///
/// 1. Structure check ([`parse_envelope`]) → `Format`.
/// 2. HMAC-SHA256 over everything before the tag, constant-time compare → `Integrity`.
/// 3. AES-256-CBC decrypt into a [`SecretBuffer`].
/// 4. Drop the leading padding, keep the trailing `declared_len` bytes.
///
/// Nothing is decrypted unless step 2 passes.
pub fn open(sealed: &[u8], keys: &KeyPair) -> Result<SecretBuffer> {
    let envelope = parse_envelope(sealed)?;

    hmac::verify(keys.mac(), &[envelope.authenticated], &envelope.tag)?;

    let mut plaintext = SecretBuffer::from_slice(envelope.ciphertext);
    cbc::decrypt_in_place(plaintext.expose_secret_mut(), &envelope.iv, keys.enc())?;

    // parse_envelope bounds declared_len by the ciphertext length
    plaintext.retain_tail(envelope.declared_len as usize);
    Ok(plaintext)
}
