//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T>`](Result), i.e. `Result<T, OpvaultError>`.
//!
//! Messages carried by these variants never contain key material or plaintext.
//! At most they name a field, a length, or a file.

use thiserror::Error;

/// Shorthand used by every fallible function in the crate.
pub type Result<T> = std::result::Result<T, OpvaultError>;

/// The error type for all OPVault operations.
#[derive(Error, Debug)]
pub enum OpvaultError {
    /// I/O error while reading vault files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally invalid opdata01 envelope.
    ///
    /// Bad magic, truncated buffer, or a declared length that does not fit the
    /// ciphertext. Always fatal to the decode it came from.
    #[error("Format error: {0}")]
    Format(String),

    /// Authentication tag mismatch.
    ///
    /// Raised before any byte of the ciphertext is decrypted.
    #[error("Integrity error: authentication tag mismatch")]
    Integrity,

    /// The profile's master or overview key failed authentication.
    ///
    /// Wrong password and corrupted key blobs both end up here.
    #[error("Invalid password")]
    InvalidPassword,

    /// Vault data violates the data model (missing field, wrong length,
    /// unusable KDF parameters, unparsable document).
    #[error("Malformed vault: {0}")]
    MalformedVault(String),

    /// The operation needs an unlocked profile.
    #[error("Profile is not unlocked")]
    NotUnlocked,

    /// No profile directory with this name exists in the vault.
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// A cryptographic primitive failed for a reason other than
    /// authentication (invalid key length, RNG failure).
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl From<&'static str> for OpvaultError {
    fn from(msg: &'static str) -> Self {
        OpvaultError::Crypto(msg.to_string())
    }
}

/// Payload-free classification of an [`OpvaultError`].
///
/// Cheap to copy and safe to log; used for profile status and per-item
/// failure reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Format,
    Integrity,
    InvalidPassword,
    MalformedVault,
    NotUnlocked,
    ProfileNotFound,
    Crypto,
}

impl OpvaultError {
    /// Classify this error without its payload.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            OpvaultError::Io(_) => ErrorKind::Io,
            OpvaultError::Format(_) => ErrorKind::Format,
            OpvaultError::Integrity => ErrorKind::Integrity,
            OpvaultError::InvalidPassword => ErrorKind::InvalidPassword,
            OpvaultError::MalformedVault(_) => ErrorKind::MalformedVault,
            OpvaultError::NotUnlocked => ErrorKind::NotUnlocked,
            OpvaultError::ProfileNotFound(_) => ErrorKind::ProfileNotFound,
            OpvaultError::Crypto(_) => ErrorKind::Crypto,
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        OpvaultError::MalformedVault(msg.into())
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Io => "io",
            ErrorKind::Format => "format",
            ErrorKind::Integrity => "integrity",
            ErrorKind::InvalidPassword => "invalid_password",
            ErrorKind::MalformedVault => "malformed_vault",
            ErrorKind::NotUnlocked => "not_unlocked",
            ErrorKind::ProfileNotFound => "profile_not_found",
            ErrorKind::Crypto => "crypto",
        };
        f.write_str(name)
    }
}
