//! # Constants
//!
//! Format constants of OPVault and the default bounds applied to untrusted
//! KDF parameters.

/// Magic marker at the start of every opdata01 envelope.
pub const OPDATA01_MAGIC: &[u8; 8] = b"opdata01";

/// Length of the magic marker.
pub const MAGIC_LEN: usize = 8;

/// Length of the little-endian plaintext length field.
pub const LENGTH_FIELD_LEN: usize = 8;

/// AES block size, also the IV length.
pub const BLOCK_LEN: usize = 16;

/// HMAC-SHA256 tag length.
pub const TAG_LEN: usize = 32;

/// Offset of the IV inside an opdata01 envelope.
pub const OPDATA01_IV_OFFSET: usize = MAGIC_LEN + LENGTH_FIELD_LEN;

/// Offset of the ciphertext inside an opdata01 envelope.
pub const OPDATA01_CIPHERTEXT_OFFSET: usize = OPDATA01_IV_OFFSET + BLOCK_LEN;

/// Smallest structurally valid opdata01 envelope (empty ciphertext).
pub const OPDATA01_MIN_LEN: usize = OPDATA01_CIPHERTEXT_OFFSET + TAG_LEN;

/// Length of one half of a key pair (AES-256 key or HMAC-SHA256 key).
pub const KEY_LEN: usize = 32;

/// Length of a full key pair: encryption key followed by authentication key.
pub const KEY_PAIR_LEN: usize = 2 * KEY_LEN;

/// Length of an item's sealed key blob: IV, two encrypted keys, tag.
pub const ITEM_KEY_BLOB_LEN: usize = BLOCK_LEN + KEY_PAIR_LEN + TAG_LEN;

/// Minimum allowed PBKDF2 iteration count.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum PBKDF2 iteration count accepted from a profile by default.
///
/// Vault files are untrusted input; anything above this is treated as a
/// malformed profile rather than run.
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Shortest salt accepted from a profile by default.
pub const DEFAULT_MIN_SALT_LEN: usize = 8;

/// Name of the profile most vaults contain.
pub const DEFAULT_PROFILE: &str = "default";

/// Profile document inside a profile directory.
pub const PROFILE_FILE: &str = "profile.js";

/// Folder document inside a profile directory.
pub const FOLDERS_FILE: &str = "folders.js";

/// Hex digits naming the sixteen band files (`band_0.js` .. `band_F.js`).
pub const BAND_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
