//! # Type Aliases
//!
//! Semantic names for the secret and public buffers used across the crate.
//!
//! ## HMAC Primitives
//! - [`HmacSha256`] - opdata01 and item-key authentication
//! - [`HmacSha512`] - PBKDF2 pseudo-random function
//!
//! ## Fixed-Size Secrets
//! - [`Key32`] - one AES-256 or HMAC-SHA256 key
//! - [`DerivedKey64`] - raw PBKDF2 output / SHA-512 expansion output before splitting
//!
//! ## Public Fixed-Size Values
//! - [`Iv16`] - CBC initialization vector
//! - [`Tag32`] - HMAC-SHA256 tag

use hmac::Hmac;
use sha2::{Sha256, Sha512};

use crate::secret::SecretArray;

pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha512 = Hmac<Sha512>;

pub type Key32 = SecretArray<32>;
pub type DerivedKey64 = SecretArray<64>;

pub type Iv16 = [u8; 16];
pub type Tag32 = [u8; 32];
