//! # Key Derivation Functions (KDF)
//!
//! OPVault derives the profile key pair from the master password with
//! PBKDF2-HMAC-SHA512. See [`pbkdf2::derive_key_pair`].

pub mod pbkdf2;
