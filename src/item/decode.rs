//! src/item/decode.rs
//! Overview and detail decryption for a single item.

use crate::error::Result;
use crate::item::fields::{Detail, Overview};
use crate::item::key::unwrap_item_key;
use crate::item::Item;
use crate::keys::KeyHierarchy;
use crate::opdata;
use tracing::{trace, warn};

/// Decrypt `item.o` under the overview pair and parse it.
pub fn decrypt_overview(keys: &KeyHierarchy, item: &Item) -> Result<Overview> {
    let mut json = opdata::open(&item.o, keys.overview())?;
    let overview = Overview::from_plaintext(&json);
    json.wipe();
    overview
}

/// Unwrap the item's own key pair, then decrypt `item.d` under it and parse it.
pub fn decrypt_detail(keys: &KeyHierarchy, item: &Item) -> Result<Detail> {
    let item_keys = unwrap_item_key(&item.k, keys.master())?;
    let mut json = opdata::open(&item.d, &item_keys)?;
    let detail = Detail::from_plaintext(&json);
    json.wipe();
    detail
}

/// Both halves of one item, decoded independently.
///
/// A broken `k` or `d` leaves `overview` untouched and vice versa.
#[derive(Debug)]
pub struct DecodedItem {
    pub item: Item,
    pub overview: Result<Overview>,
    pub detail: Result<Detail>,
}

impl DecodedItem {
    /// `true` when both halves decoded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.overview.is_ok() && self.detail.is_ok()
    }
}

/// Decode overview and detail of `item`, reporting failures per half.
///
/// Failures are logged with the item uuid and error kind only.
pub fn decode_item(keys: &KeyHierarchy, item: &Item) -> DecodedItem {
    let overview = decrypt_overview(keys, item);
    if let Err(e) = &overview {
        warn!(uuid = %item.uuid, kind = %e.kind(), "item overview failed to decode");
    }

    let detail = decrypt_detail(keys, item);
    if let Err(e) = &detail {
        warn!(uuid = %item.uuid, kind = %e.kind(), "item detail failed to decode");
    }

    trace!(uuid = %item.uuid, category = %item.category, "item decoded");
    DecodedItem {
        item: item.clone(),
        overview,
        detail,
    }
}
