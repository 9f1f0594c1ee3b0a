//! Batch decoding of items and folders.
//!
//! With the `parallel` feature every entry is decoded on rayon's pool;
//! without it, sequentially. Output order always matches input order, and a
//! failing entry never stops the batch.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::folder::{decode_folder, DecodedFolder, Folder};
use crate::item::{decode_item, DecodedItem, Item};
use crate::keys::KeyHierarchy;

fn map_batch<T, U, F>(entries: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        entries.par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        entries.iter().map(f).collect()
    }
}

/// Decode every item; one result per item, in input order.
pub fn decode_items_batch(keys: &KeyHierarchy, items: &[Item]) -> Vec<DecodedItem> {
    map_batch(items, |item| decode_item(keys, item))
}

/// Decode every folder; one result per folder, in input order.
pub fn decode_folders_batch(keys: &KeyHierarchy, folders: &[Folder]) -> Vec<DecodedFolder> {
    map_batch(folders, |folder| decode_folder(keys, folder))
}
