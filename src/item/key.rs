//! src/item/key.rs
//! Item key unwrap for the `k` field of every item.
//!
//! Layout: `iv (16) | ciphertext (64) | tag (32)`, no magic, no length prefix.
//! The 64 decrypted bytes are the item pair itself; no hash expansion.

use crate::aliases::{DerivedKey64, Iv16};
use crate::consts::{BLOCK_LEN, ITEM_KEY_BLOB_LEN, KEY_PAIR_LEN, TAG_LEN};
use crate::crypto::{cbc, hmac};
use crate::error::{OpvaultError, Result};
use crate::keys::KeyPair;

/// Decrypt an item's `k` blob under the master pair.
///
/// Fails with [`OpvaultError::MalformedVault`] on a wrong-sized blob and with
/// [`OpvaultError::Integrity`] on a tag mismatch. The tag is checked before
/// any decryption.
pub fn unwrap_item_key(k: &[u8], master: &KeyPair) -> Result<KeyPair> {
    if k.len() != ITEM_KEY_BLOB_LEN {
        return Err(OpvaultError::malformed(format!(
            "item key blob is {} bytes, expected {ITEM_KEY_BLOB_LEN}",
            k.len()
        )));
    }

    let (authenticated, tag) = k.split_at(ITEM_KEY_BLOB_LEN - TAG_LEN);
    hmac::verify(master.mac(), &[authenticated], tag)?;

    let mut iv: Iv16 = [0u8; 16];
    iv.copy_from_slice(&authenticated[..BLOCK_LEN]);

    let mut keys = DerivedKey64::zeroed();
    keys.expose_secret_mut()
        .copy_from_slice(&authenticated[BLOCK_LEN..BLOCK_LEN + KEY_PAIR_LEN]);
    cbc::decrypt_in_place(keys.expose_secret_mut(), &iv, master.enc())?;

    Ok(KeyPair::from_concatenated(&keys))
}

/// Seal an item pair under the master pair. Inverse of [`unwrap_item_key`].
pub fn wrap_item_key(item_keys: &KeyPair, master: &KeyPair, iv: &Iv16) -> Result<Vec<u8>> {
    let mut keys = DerivedKey64::zeroed();
    keys.expose_secret_mut()[..32].copy_from_slice(item_keys.enc().expose_secret());
    keys.expose_secret_mut()[32..].copy_from_slice(item_keys.mac().expose_secret());
    cbc::encrypt_in_place(keys.expose_secret_mut(), iv, master.enc())?;

    let mut out = Vec::with_capacity(ITEM_KEY_BLOB_LEN);
    out.extend_from_slice(iv);
    out.extend_from_slice(keys.expose_secret());
    let tag = hmac::authenticate(master.mac(), &[&out])?;
    out.extend_from_slice(&tag);
    Ok(out)
}
