//! # Vault Reader
//!
//! Opens an OPVault directory and loads one profile by name:
//!
//! ```text
//! <vault>/<profile>/profile.js      var profile={...};
//! <vault>/<profile>/folders.js      loadFolders({...});   (optional)
//! <vault>/<profile>/band_0.js ..    ld({...});            (each optional)
//! <vault>/<profile>/band_F.js
//! ```
//!
//! Nothing here decrypts. The result is a locked [`Profile`].
//!
//! A file that cannot be read or unwrapped fails the profile. A single band or
//! folder entry that cannot be parsed is skipped, and one with an undecodable
//! sealed field loads with that field empty so it fails on its own later.

pub(crate) mod model;
pub(crate) mod read;

use crate::consts::{BAND_DIGITS, DEFAULT_PROFILE, FOLDERS_FILE, PROFILE_FILE};
use crate::error::{OpvaultError, Result};
use crate::folder::Folder;
use crate::item::Item;
use crate::profile::Profile;
use model::{RawFolder, RawItem, RawProfile};
use read::{read_wrapped_json, Wrapper};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A vault directory on disk. Holds no secrets.
#[derive(Debug, Clone)]
pub struct Vault {
    path: PathBuf,
}

impl Vault {
    /// Open the vault at `path`; fails unless it is an existing directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let meta = fs::metadata(&path)?;
        if !meta.is_dir() {
            return Err(OpvaultError::malformed(format!(
                "{} is not a directory",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the profile called `name`, locked.
    pub fn profile(&self, name: &str) -> Result<Profile> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(OpvaultError::ProfileNotFound(name.to_string()));
        }
        let dir = self.path.join(name);
        if !dir.is_dir() {
            return Err(OpvaultError::ProfileNotFound(name.to_string()));
        }

        let raw: RawProfile =
            read_wrapped_json(&dir.join(PROFILE_FILE), Wrapper::Assignment("profile"))?
                .ok_or_else(|| OpvaultError::ProfileNotFound(name.to_string()))?;
        let data = raw.into_data(name)?;

        let items = load_items(&dir)?;
        let folders = load_folders(&dir)?;
        debug!(
            profile = %name,
            items = items.len(),
            folders = folders.len(),
            "profile loaded"
        );

        Ok(Profile::new(data, items, folders))
    }

    /// Load the `"default"` profile.
    pub fn default_profile(&self) -> Result<Profile> {
        self.profile(DEFAULT_PROFILE)
    }
}

/// Deserialize each entry of a band or folder map on its own.
///
/// An entry that does not fit `T` is skipped with a warning naming its key;
/// the rest of the file still loads.
fn parse_entries<T: DeserializeOwned>(file: &str, entries: BTreeMap<String, Value>) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(
                    file = %file,
                    entry = %key,
                    error = ?e.classify(),
                    "vault entry skipped"
                );
                None
            }
        })
        .collect()
}

fn load_items(dir: &Path) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for digit in BAND_DIGITS {
        let file = format!("band_{}.js", *digit as char);
        let Some(entries) = read_wrapped_json(&dir.join(&file), Wrapper::Call("ld"))? else {
            continue;
        };
        items.extend(
            parse_entries::<RawItem>(&file, entries)
                .into_iter()
                .map(RawItem::into_item),
        );
    }
    Ok(items)
}

fn load_folders(dir: &Path) -> Result<Vec<Folder>> {
    let entries = read_wrapped_json(&dir.join(FOLDERS_FILE), Wrapper::Call("loadFolders"))?;
    Ok(parse_entries::<RawFolder>(FOLDERS_FILE, entries.unwrap_or_default())
        .into_iter()
        .map(RawFolder::into_folder)
        .collect())
}
