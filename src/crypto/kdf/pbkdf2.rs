//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{DerivedKey64, HmacSha512};
use crate::builders::KdfPolicy;
use crate::error::{OpvaultError, Result};
use crate::keys::KeyPair;
use crate::secret::SecretBuffer;

use pbkdf2::pbkdf2;

/// Derive 64 bytes of PBKDF2-HMAC-SHA512 output directly into a secret buffer.
///
/// The salt and iteration count are checked against `policy` first; a profile
/// asking for more work than the policy allows is malformed, not slow.
#[inline]
pub fn derive_secure_pbkdf2_key(
    password: &SecretBuffer,
    salt: &[u8],
    iterations: u32,
    policy: &KdfPolicy,
    out_key: &mut DerivedKey64,
) -> Result<()> {
    policy.check(salt, iterations)?;

    pbkdf2::<HmacSha512>(
        password.expose_secret(),
        salt,
        iterations,
        out_key.expose_secret_mut(),
    )
    .map_err(|e| OpvaultError::Crypto(format!("PBKDF2 failed: {e}")))?;
    Ok(())
}

/// Derive the profile key pair: first 32 bytes encrypt, last 32 bytes authenticate.
///
/// The password buffer is only borrowed; wiping it is the caller's job.
pub fn derive_key_pair(
    password: &SecretBuffer,
    salt: &[u8],
    iterations: u32,
    policy: &KdfPolicy,
) -> Result<KeyPair> {
    let mut derived = DerivedKey64::zeroed();
    derive_secure_pbkdf2_key(password, salt, iterations, policy, &mut derived)?;
    Ok(KeyPair::from_concatenated(&derived))
}
