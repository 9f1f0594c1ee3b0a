//! src/profile/session.rs
//! The unlock pipeline: password → derived pair → master/overview seeds → hierarchy.
//!
//! The password buffer is wiped on every way out of [`unlock`], including
//! unwinding, because the wipe lives in a guard's `Drop` rather than in each
//! branch.

use crate::builders::KdfPolicy;
use crate::crypto::kdf::pbkdf2::derive_key_pair;
use crate::error::{OpvaultError, Result};
use crate::keys::{KeyHierarchy, KeyPair};
use crate::opdata;
use crate::profile::data::ProfileData;
use crate::secret::SecretBuffer;
use std::ops::Deref;
use tracing::debug;

/// Borrows a secret buffer and wipes it when dropped.
pub(crate) struct WipeGuard<'a> {
    buffer: &'a mut SecretBuffer,
}

impl<'a> WipeGuard<'a> {
    pub(crate) fn new(buffer: &'a mut SecretBuffer) -> Self {
        Self { buffer }
    }
}

impl Deref for WipeGuard<'_> {
    type Target = SecretBuffer;

    fn deref(&self) -> &SecretBuffer {
        self.buffer
    }
}

impl Drop for WipeGuard<'_> {
    fn drop(&mut self) {
        self.buffer.wipe();
    }
}

/// Open one of the profile's sealed keys with the password-derived pair.
///
/// A tag mismatch means a wrong password or a corrupted key; the two are
/// reported identically as [`OpvaultError::InvalidPassword`].
fn open_profile_key(sealed: &[u8], derived: &KeyPair, field: &str) -> Result<SecretBuffer> {
    opdata::open(sealed, derived).map_err(|e| match e {
        OpvaultError::Integrity => OpvaultError::InvalidPassword,
        OpvaultError::Format(msg) => OpvaultError::malformed(format!("{field}: {msg}")),
        other => other,
    })
}

/// Derive, authenticate and expand the profile's key hierarchy.
///
/// `password` is wiped (zeroed in place, length unchanged) before this
/// returns, whatever the outcome. The decrypted seeds are wiped right after
/// SHA-512 expansion. Nothing is cached: every call derives from scratch.
///
/// # Errors
///
/// - [`OpvaultError::InvalidPassword`]: either sealed key failed authentication
/// - [`OpvaultError::MalformedVault`]: KDF parameters outside `policy`, or a
///   structurally broken sealed key
pub fn unlock(
    profile: &ProfileData,
    password: &mut SecretBuffer,
    policy: &KdfPolicy,
) -> Result<KeyHierarchy> {
    let password = WipeGuard::new(password);
    debug!(
        profile = %profile.name,
        iterations = profile.iterations,
        "deriving profile keys"
    );

    let derived = derive_key_pair(&password, &profile.salt, profile.iterations, policy)?;
    drop(password);

    let mut master_seed = open_profile_key(&profile.master_key, &derived, "masterKey")?;
    let mut overview_seed = open_profile_key(&profile.overview_key, &derived, "overviewKey")?;

    KeyHierarchy::from_seeds(&mut master_seed, &mut overview_seed)
}
