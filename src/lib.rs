// src/lib.rs

//! Read-only OPVault reader.
//!
//! ```no_run
//! use opvault_rs::Vault;
//!
//! let vault = Vault::open("/path/to/1Password.opvault")?;
//! let profile = vault.default_profile()?;
//! profile.unlock("correct horse battery staple")?;
//! for entry in profile.items()? {
//!     if let Ok(overview) = &entry.overview {
//!         println!("{}", overview.title.as_deref().unwrap_or("(untitled)"));
//!     }
//! }
//! # Ok::<(), opvault_rs::OpvaultError>(())
//! ```

pub mod aliases;
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod folder;
pub mod item;
pub mod keys;
pub mod opdata;
pub mod profile;
pub mod secret;
pub mod utils;
pub mod vault;

// High-level API
pub use error::{ErrorKind, OpvaultError, Result};
pub use profile::{Profile, ProfileData, ProfileStatus};
pub use vault::Vault;

// Pipeline stages, for callers that bring their own storage layer
pub use builders::KdfPolicy;
pub use crypto::kdf::pbkdf2::derive_key_pair;
pub use folder::{decrypt_folder, DecodedFolder, Folder, FolderOverview};
pub use item::{
    decode_item, decrypt_detail, decrypt_overview, unwrap_item_key, Category, DecodedItem, Detail,
    Item, Overview,
};
pub use keys::{KeyHierarchy, KeyPair};
pub use profile::session::unlock;
pub use secret::{SecretArray, SecretBuffer};
