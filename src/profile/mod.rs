//! # Profiles
//!
//! A [`Profile`] owns the sealed data of one vault profile and its lock state:
//!
//! ```text
//! Locked ──unlock──▶ Unlocking ──┬──▶ Unlocked(KeyHierarchy)
//!                                └──▶ LockedWithError(kind)
//! ```
//!
//! `unlock` holds the write lock for the whole transition, so concurrent
//! callers never see a half-built hierarchy. Once unlocked, `items()` and
//! `folders()` share the hierarchy read-only and may decode in parallel.
//!
//! Every `unlock` call re-derives from the password; a second call on an
//! unlocked profile is not short-circuited.

pub(crate) mod data;
pub mod session;

pub use data::ProfileData;

use crate::batch_ops::{decode_folders_batch, decode_items_batch};
use crate::builders::KdfPolicy;
use crate::error::{ErrorKind, OpvaultError, Result};
use crate::folder::{DecodedFolder, Folder, FolderOverview};
use crate::item::{self, DecodedItem, Detail, Item, Overview};
use crate::keys::KeyHierarchy;
use crate::secret::SecretBuffer;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

enum SessionState {
    Locked,
    /// Only observable if a previous unlock panicked mid-transition.
    Unlocking,
    Unlocked(Arc<KeyHierarchy>),
    LockedWithError(ErrorKind),
}

/// Externally visible lock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStatus {
    Locked,
    Unlocked,
    /// The last unlock failed with this kind of error.
    LockedWithError(ErrorKind),
}

/// One profile of a vault plus its unlock state.
pub struct Profile {
    data: ProfileData,
    items: Vec<Item>,
    folders: Vec<Folder>,
    policy: KdfPolicy,
    state: RwLock<SessionState>,
}

impl Profile {
    /// A locked profile over already-loaded data.
    #[must_use]
    pub fn new(data: ProfileData, items: Vec<Item>, folders: Vec<Folder>) -> Self {
        Self {
            data,
            items,
            folders,
            policy: KdfPolicy::default(),
            state: RwLock::new(SessionState::Locked),
        }
    }

    /// Replace the KDF bounds applied on unlock.
    #[must_use]
    pub fn with_policy(mut self, policy: KdfPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    #[must_use]
    pub fn data(&self) -> &ProfileData {
        &self.data
    }

    #[must_use]
    pub fn policy(&self) -> &KdfPolicy {
        &self.policy
    }

    /// Sealed items, as loaded.
    #[must_use]
    pub fn sealed_items(&self) -> &[Item] {
        &self.items
    }

    /// Sealed folders, as loaded.
    #[must_use]
    pub fn sealed_folders(&self) -> &[Folder] {
        &self.folders
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn status(&self) -> ProfileStatus {
        match &*self.read_state() {
            SessionState::Locked | SessionState::Unlocking => ProfileStatus::Locked,
            SessionState::Unlocked(_) => ProfileStatus::Unlocked,
            SessionState::LockedWithError(kind) => ProfileStatus::LockedWithError(*kind),
        }
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.status() == ProfileStatus::Unlocked
    }

    /// Unlock with a password string.
    ///
    /// The password is copied into a [`SecretBuffer`] that is wiped before
    /// this returns. The caller's `&str` is out of reach; callers that need
    /// the original storage wiped too should use [`unlock_secret`](Self::unlock_secret).
    pub fn unlock(&self, password: &str) -> Result<()> {
        let mut buffer = SecretBuffer::from(password);
        self.unlock_secret(&mut buffer)
    }

    /// Unlock with a caller-owned password buffer.
    ///
    /// `password` is zeroed in place, length unchanged, on every exit path.
    ///
    /// # Errors
    ///
    /// - [`OpvaultError::InvalidPassword`]: wrong password (or corrupted keys)
    /// - [`OpvaultError::MalformedVault`]: unusable KDF parameters or sealed keys
    pub fn unlock_secret(&self, password: &mut SecretBuffer) -> Result<()> {
        let mut state = self.write_state();
        // Drops (and wipes) any previous hierarchy before deriving a new one.
        *state = SessionState::Unlocking;

        match session::unlock(&self.data, password, &self.policy) {
            Ok(keys) => {
                *state = SessionState::Unlocked(Arc::new(keys));
                info!(profile = %self.data.name, "profile unlocked");
                Ok(())
            }
            Err(e) => {
                *state = SessionState::LockedWithError(e.kind());
                debug!(profile = %self.data.name, kind = %e.kind(), "profile unlock failed");
                Err(e)
            }
        }
    }

    /// Unlock and then hand `observe` a view of the internal password buffer.
    ///
    /// The observer runs after the unlock attempt has finished, so it sees
    /// the buffer exactly as the wipe left it.
    #[cfg(any(test, feature = "test-hooks"))]
    pub fn unlock_observed<F>(&self, password: &str, observe: F) -> Result<()>
    where
        F: FnOnce(&SecretBuffer),
    {
        let mut buffer = SecretBuffer::from(password);
        let result = self.unlock_secret(&mut buffer);
        observe(&buffer);
        result
    }

    /// Drop the key hierarchy and return to `Locked`.
    pub fn lock(&self) {
        *self.write_state() = SessionState::Locked;
        debug!(profile = %self.data.name, "profile locked");
    }

    /// The shared key hierarchy, or [`OpvaultError::NotUnlocked`].
    pub fn key_hierarchy(&self) -> Result<Arc<KeyHierarchy>> {
        match &*self.read_state() {
            SessionState::Unlocked(keys) => Ok(Arc::clone(keys)),
            _ => Err(OpvaultError::NotUnlocked),
        }
    }

    /// Decode every item. Per-item failures are reported inside each
    /// [`DecodedItem`]; only a locked profile fails the whole call.
    pub fn items(&self) -> Result<Vec<DecodedItem>> {
        let keys = self.key_hierarchy()?;
        Ok(decode_items_batch(&keys, &self.items))
    }

    /// Decode every folder overview.
    pub fn folders(&self) -> Result<Vec<DecodedFolder>> {
        let keys = self.key_hierarchy()?;
        Ok(decode_folders_batch(&keys, &self.folders))
    }

    /// Find a sealed item by uuid.
    #[must_use]
    pub fn item(&self, uuid: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.uuid == uuid)
    }

    pub fn decrypt_overview(&self, item: &Item) -> Result<Overview> {
        let keys = self.key_hierarchy()?;
        item::decrypt_overview(&keys, item)
    }

    pub fn decrypt_detail(&self, item: &Item) -> Result<Detail> {
        let keys = self.key_hierarchy()?;
        item::decrypt_detail(&keys, item)
    }

    pub fn decrypt_folder(&self, folder: &Folder) -> Result<FolderOverview> {
        let keys = self.key_hierarchy()?;
        crate::folder::decrypt_folder(&keys, folder)
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.data.name)
            .field("uuid", &self.data.uuid)
            .field("items", &self.items.len())
            .field("folders", &self.folders.len())
            .field("status", &self.status())
            .finish()
    }
}
