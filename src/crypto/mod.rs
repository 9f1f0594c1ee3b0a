//! Low-level crypto primitives.
//!
//! - [`kdf`]: PBKDF2-HMAC-SHA512 password derivation
//! - [`hmac`]: HMAC-SHA256 tag computation and constant-time verification
//! - [`cbc`]: AES-256-CBC without padding, chained by hand over `aes` blocks
//! - [`rng`]: OS randomness for IVs and envelope padding
//!
//! Nothing here knows about envelopes or profiles; see [`crate::opdata`] and
//! [`crate::profile`] for that.

pub mod cbc;
pub mod hmac;
pub mod kdf;
pub mod rng;
