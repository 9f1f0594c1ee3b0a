//! # Secret Buffers
//!
//! Owned containers for password bytes, key material and decrypted plaintext.
//!
//! - [`SecretBuffer`] is heap-backed and variable length. Its [`wipe`](SecretBuffer::wipe)
//!   zeroes the bytes in place and leaves the length untouched, so a caller
//!   holding the buffer can check afterwards that the very same storage is zero.
//! - [`SecretArray<N>`] is the fixed-size sibling used for keys. It is zeroed on drop.
//!
//! Neither type implements `Clone`, `Display` or a revealing `Debug`. Access goes
//! through `expose_secret()` / `expose_secret_mut()` so every read is greppable.

use std::fmt;
use zeroize::Zeroize;

/// Variable-length secret bytes with an explicit, exactly-once wipe.
pub struct SecretBuffer {
    bytes: Vec<u8>,
    wiped: bool,
}

impl SecretBuffer {
    /// Zero-filled buffer of `len` bytes.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self {
            bytes: vec![0u8; len],
            wiped: false,
        }
    }

    /// Copy `bytes` into a fresh buffer sized exactly to them.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buffer = Self::zeroed(bytes.len());
        buffer.bytes.copy_from_slice(bytes);
        buffer
    }

    #[must_use]
    pub fn expose_secret(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn expose_secret_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `true` once [`wipe`](Self::wipe) has run.
    #[must_use]
    pub fn is_wiped(&self) -> bool {
        self.wiped
    }

    /// `true` when every byte is zero. Constant in the buffer length.
    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        self.bytes.iter().fold(0u8, |acc, b| acc | b) == 0
    }

    /// Zero every byte in place. Length and allocation are unchanged.
    ///
    /// Only the first call does any work; later calls (including the one from
    /// `Drop`) are no-ops.
    pub fn wipe(&mut self) {
        if self.wiped {
            return;
        }
        self.bytes.as_mut_slice().zeroize();
        self.wiped = true;
    }

    /// Keep only the trailing `len` bytes, moving them to the front.
    ///
    /// The discarded region is zeroed before the vector is shortened, so no
    /// stale bytes stay behind in spare capacity. Never reallocates.
    pub(crate) fn retain_tail(&mut self, len: usize) {
        let total = self.bytes.len();
        if len >= total {
            return;
        }
        self.bytes.copy_within(total - len.., 0);
        self.bytes[len..].zeroize();
        self.bytes.truncate(len);
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBuffer")
            .field("len", &self.bytes.len())
            .field("wiped", &self.wiped)
            .finish()
    }
}

impl From<&str> for SecretBuffer {
    fn from(value: &str) -> Self {
        Self::from_slice(value.as_bytes())
    }
}

/// Fixed-size secret, zeroed on drop.
pub struct SecretArray<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> SecretArray<N> {
    #[must_use]
    pub fn new(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub fn zeroed() -> Self {
        Self { bytes: [0u8; N] }
    }

    /// Copy from a slice of exactly `N` bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != N {
            return None;
        }
        let mut out = Self::zeroed();
        out.bytes.copy_from_slice(bytes);
        Some(out)
    }

    #[must_use]
    pub fn expose_secret(&self) -> &[u8; N] {
        &self.bytes
    }

    #[must_use]
    pub fn expose_secret_mut(&mut self) -> &mut [u8; N] {
        &mut self.bytes
    }
}

impl<const N: usize> Zeroize for SecretArray<N> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<const N: usize> Drop for SecretArray<N> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const N: usize> From<[u8; N]> for SecretArray<N> {
    fn from(mut value: [u8; N]) -> Self {
        let out = Self::new(value);
        value.zeroize();
        out
    }
}

impl<const N: usize> fmt::Debug for SecretArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretArray<{N}>([REDACTED])")
    }
}
