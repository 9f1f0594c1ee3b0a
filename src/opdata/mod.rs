//! opdata01 envelope codec.
//!
//! Every encrypted field in an OPVault (profile keys, item and folder
//! overviews, item details) is an opdata01 blob. [`open`] is the only way
//! plaintext leaves one, and it authenticates before decrypting.

pub(crate) mod open;
pub(crate) mod read;
pub(crate) mod seal;

pub use open::open;
pub use read::{parse_envelope, Envelope};
pub use seal::{seal, seal_with_iv};
