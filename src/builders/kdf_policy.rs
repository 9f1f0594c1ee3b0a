//! src/builders/kdf_policy.rs
//! Bounds applied to the KDF parameters a profile asks for.

use crate::consts::{DEFAULT_MIN_SALT_LEN, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::error::{OpvaultError, Result};

/// Limits on the salt and iteration count read from `profile.js`.
///
/// A vault is untrusted input: without an upper bound a crafted profile could
/// pin a CPU core for hours inside `unlock`. Defaults: 1 to
/// [`PBKDF2_MAX_ITER`] iterations, salts of at least [`DEFAULT_MIN_SALT_LEN`] bytes.
///
/// # Thread Safety
///
/// Plain `Copy` data, `Send + Sync`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfPolicy {
    min_iterations: u32,
    max_iterations: u32,
    min_salt_len: usize,
}

impl KdfPolicy {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_iterations: PBKDF2_MIN_ITER,
            max_iterations: PBKDF2_MAX_ITER,
            min_salt_len: DEFAULT_MIN_SALT_LEN,
        }
    }

    /// Raise the floor on iterations (never below 1).
    #[must_use]
    pub fn with_min_iterations(mut self, iterations: u32) -> Self {
        self.min_iterations = iterations.max(PBKDF2_MIN_ITER);
        self
    }

    /// Set the ceiling on iterations (never below 1).
    #[must_use]
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations.max(PBKDF2_MIN_ITER);
        self
    }

    #[must_use]
    pub fn with_min_salt_len(mut self, len: usize) -> Self {
        self.min_salt_len = len;
        self
    }

    #[must_use]
    pub const fn min_iterations(&self) -> u32 {
        self.min_iterations
    }

    #[must_use]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub const fn min_salt_len(&self) -> usize {
        self.min_salt_len
    }

    /// Reject parameters outside the policy with [`OpvaultError::MalformedVault`].
    pub fn check(&self, salt: &[u8], iterations: u32) -> Result<()> {
        if !(self.min_iterations..=self.max_iterations).contains(&iterations) {
            return Err(OpvaultError::malformed(format!(
                "KDF iterations {iterations} outside {}..={}",
                self.min_iterations, self.max_iterations
            )));
        }
        if salt.len() < self.min_salt_len {
            return Err(OpvaultError::malformed(format!(
                "KDF salt is {} bytes, need at least {}",
                salt.len(),
                self.min_salt_len
            )));
        }
        Ok(())
    }
}

impl Default for KdfPolicy {
    fn default() -> Self {
        Self::new()
    }
}
