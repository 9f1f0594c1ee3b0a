//! src/vault/model.rs
//! On-disk JSON shapes and their conversion into the crate's sealed types.

use crate::error::Result;
use crate::folder::Folder;
use crate::item::{Category, Item};
use crate::profile::ProfileData;
use crate::vault::read::decode_b64;
use serde::Deserialize;
use tracing::warn;

/// Decode a sealed base64 field of one entry. An undecodable value becomes
/// empty, so the entry fails on its own when decrypted.
fn sealed_field(uuid: &str, value: &str, field: &str) -> Vec<u8> {
    decode_b64(value, field).unwrap_or_else(|e| {
        warn!(uuid = %uuid, field = %field, kind = %e.kind(), "sealed field not decodable");
        Vec::new()
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProfile {
    #[serde(default)]
    pub profile_name: Option<String>,
    #[serde(default)]
    pub uuid: String,
    pub salt: String,
    pub iterations: u32,
    pub master_key: String,
    pub overview_key: String,
    #[serde(default)]
    pub password_hint: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl RawProfile {
    /// `dir_name` is used when the document carries no `profileName`.
    pub(crate) fn into_data(self, dir_name: &str) -> Result<ProfileData> {
        Ok(ProfileData {
            name: self.profile_name.unwrap_or_else(|| dir_name.to_string()),
            uuid: self.uuid,
            salt: decode_b64(&self.salt, "salt")?,
            iterations: self.iterations,
            master_key: decode_b64(&self.master_key, "masterKey")?,
            overview_key: decode_b64(&self.overview_key, "overviewKey")?,
            password_hint: self.password_hint.filter(|hint| !hint.is_empty()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// An entry of a band file. Tombstones can lack the sealed fields, so they
/// default to empty and fail later, per item, instead of failing the profile.
/// The same holds for sealed fields that are not valid base64.
#[derive(Debug, Deserialize)]
pub(crate) struct RawItem {
    pub uuid: String,
    pub category: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub tx: i64,
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub trashed: bool,
    #[serde(default)]
    pub fave: Option<i64>,
    #[serde(default)]
    pub k: String,
    #[serde(default)]
    pub o: String,
    #[serde(default)]
    pub d: String,
}

impl RawItem {
    pub(crate) fn into_item(self) -> Item {
        Item {
            category: Category::from_code(&self.category),
            created: self.created,
            updated: self.updated,
            tx: self.tx,
            folder: self.folder,
            trashed: self.trashed,
            fave: self.fave,
            k: sealed_field(&self.uuid, &self.k, "item k"),
            o: sealed_field(&self.uuid, &self.o, "item o"),
            d: sealed_field(&self.uuid, &self.d, "item d"),
            uuid: self.uuid,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFolder {
    pub uuid: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub tx: i64,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub smart: bool,
    #[serde(default)]
    pub overview: String,
}

impl RawFolder {
    pub(crate) fn into_folder(self) -> Folder {
        Folder {
            overview: sealed_field(&self.uuid, &self.overview, "folder overview"),
            uuid: self.uuid,
            created: self.created,
            updated: self.updated,
            tx: self.tx,
            parent: self.parent,
            smart: self.smart,
        }
    }
}
