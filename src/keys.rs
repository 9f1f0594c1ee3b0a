//! # Key Hierarchy
//!
//! ```text
//! password ──PBKDF2──▶ derived pair ──open──▶ master seed   ──SHA-512──▶ master pair
//!                                    └─open──▶ overview seed ──SHA-512──▶ overview pair
//! master pair ──unwrap k──▶ item pair
//! ```
//!
//! Every pair is an AES-256 key followed by an HMAC-SHA256 key. All of them
//! are zeroed on drop.

use crate::aliases::{DerivedKey64, Key32};
use crate::consts::KEY_LEN;
use crate::error::{OpvaultError, Result};
use crate::secret::SecretBuffer;
use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha512};

/// Zero the hasher's chaining state and block buffer. A seed shorter than one
/// SHA-512 block sits in that buffer whole until it is cleared.
fn wipe_hasher(hasher: &mut Sha512) {
    // SAFETY: `Sha512` is flat data (u64 state words, a block counter, a byte
    // buffer and its position), has no `Drop` impl, and all-zero bytes are a
    // valid value for every field.
    unsafe { zeroize::zeroize_flat_type(hasher) }
}

/// An encryption key and its matching authentication key.
#[derive(Debug)]
pub struct KeyPair {
    enc: Key32,
    mac: Key32,
}

impl KeyPair {
    #[must_use]
    pub fn new(enc: Key32, mac: Key32) -> Self {
        Self { enc, mac }
    }

    /// Split 64 bytes into `enc` (first half) and `mac` (second half).
    #[must_use]
    pub fn from_concatenated(bytes: &DerivedKey64) -> Self {
        let raw = bytes.expose_secret();
        let mut enc = Key32::zeroed();
        let mut mac = Key32::zeroed();
        enc.expose_secret_mut().copy_from_slice(&raw[..KEY_LEN]);
        mac.expose_secret_mut().copy_from_slice(&raw[KEY_LEN..]);
        Self { enc, mac }
    }

    /// Expand a decrypted key seed: SHA-512 of the seed, split 32/32.
    ///
    /// The seed is wiped before this returns, whether or not expansion succeeds.
    pub fn from_seed(seed: &mut SecretBuffer) -> Result<Self> {
        if seed.is_empty() {
            seed.wipe();
            return Err(OpvaultError::malformed("decrypted key seed is empty"));
        }

        let mut digest = DerivedKey64::zeroed();
        let mut hasher = Sha512::new();
        hasher.update(seed.expose_secret());
        seed.wipe();
        hasher.finalize_into_reset(GenericArray::from_mut_slice(digest.expose_secret_mut()));
        wipe_hasher(&mut hasher);

        Ok(Self::from_concatenated(&digest))
    }

    #[must_use]
    pub fn enc(&self) -> &Key32 {
        &self.enc
    }

    #[must_use]
    pub fn mac(&self) -> &Key32 {
        &self.mac
    }
}

/// The two key pairs of an unlocked profile.
///
/// Read-only once built; shared behind an `Arc` while item decoding runs.
#[derive(Debug)]
pub struct KeyHierarchy {
    master: KeyPair,
    overview: KeyPair,
}

impl KeyHierarchy {
    #[must_use]
    pub fn new(master: KeyPair, overview: KeyPair) -> Self {
        Self { master, overview }
    }

    /// Build both pairs from their decrypted seeds. Both seeds are wiped.
    pub fn from_seeds(master_seed: &mut SecretBuffer, overview_seed: &mut SecretBuffer) -> Result<Self> {
        let master = KeyPair::from_seed(master_seed);
        let overview = KeyPair::from_seed(overview_seed);
        Ok(Self::new(master?, overview?))
    }

    /// Unwraps item keys.
    #[must_use]
    pub fn master(&self) -> &KeyPair {
        &self.master
    }

    /// Decrypts item and folder overviews.
    #[must_use]
    pub fn overview(&self) -> &KeyPair {
        &self.overview
    }
}
