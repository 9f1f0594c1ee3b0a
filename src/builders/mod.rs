//! Configuration builders.

pub mod kdf_policy;

pub use kdf_policy::KdfPolicy;
