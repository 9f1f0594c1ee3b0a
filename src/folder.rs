//! Folders: named (or smart) groupings of items, sealed under the overview pair.

use crate::error::Result;
use crate::item::fields::parse_plaintext;
use crate::keys::KeyHierarchy;
use crate::opdata;
use serde::Deserialize;
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One entry of `folders.js`, still sealed.
#[derive(Debug, Clone)]
pub struct Folder {
    pub uuid: String,
    pub created: i64,
    pub updated: i64,
    pub tx: i64,
    /// Parent folder uuid; lookup only.
    pub parent: Option<String>,
    /// Smart folders carry a saved search instead of members.
    pub smart: bool,
    /// opdata01 under the overview key pair.
    pub overview: Vec<u8>,
}

/// Decrypted folder overview.
#[derive(Debug, Default, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct FolderOverview {
    #[serde(default)]
    pub title: Option<String>,
    /// Saved search of a smart folder, base64 as stored.
    #[serde(default)]
    pub predicate_b64: Option<String>,
}

/// Decrypt a folder overview.
pub fn decrypt_folder(keys: &KeyHierarchy, folder: &Folder) -> Result<FolderOverview> {
    let mut json = opdata::open(&folder.overview, keys.overview())?;
    let overview = parse_plaintext(&json, "folder overview");
    json.wipe();
    overview
}

#[derive(Debug)]
pub struct DecodedFolder {
    pub folder: Folder,
    pub overview: Result<FolderOverview>,
}

pub fn decode_folder(keys: &KeyHierarchy, folder: &Folder) -> DecodedFolder {
    let overview = decrypt_folder(keys, folder);
    if let Err(e) = &overview {
        warn!(uuid = %folder.uuid, kind = %e.kind(), "folder overview failed to decode");
    }
    DecodedFolder {
        folder: folder.clone(),
        overview,
    }
}
