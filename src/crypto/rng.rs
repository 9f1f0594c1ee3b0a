// src/crypto/rng.rs
//! OS randomness for sealing: fresh IVs and envelope padding.

use crate::aliases::Iv16;
use crate::error::{OpvaultError, Result};
use rand::{rngs::OsRng, TryRngCore};

/// Fill `dest` from the operating system RNG.
pub fn fill_random(dest: &mut [u8]) -> Result<()> {
    let mut rng = OsRng;
    rng.try_fill_bytes(dest)
        .map_err(|e| OpvaultError::Crypto(format!("OS RNG failed: {e}")))
}

/// A fresh random IV.
pub fn random_iv() -> Result<Iv16> {
    let mut iv = [0u8; 16];
    fill_random(&mut iv)?;
    Ok(iv)
}
