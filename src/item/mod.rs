//! Items: the sealed credential records of a profile.
//!
//! An [`Item`] is what the band files hold. Its three sealed fields are
//! decrypted by [`decrypt_overview`] (overview key pair), [`unwrap_item_key`]
//! (master key pair) and [`decrypt_detail`] (the item's own key pair).

pub(crate) mod decode;
pub(crate) mod fields;
pub(crate) mod key;

pub use decode::{decode_item, decrypt_detail, decrypt_overview, DecodedItem};
pub use fields::{Detail, LoginField, Overview, Section, SectionField, SectionValue, Url};
pub use key::{unwrap_item_key, wrap_item_key};

use std::fmt;

/// Item category, from the three-digit code stored in the band files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Login,
    CreditCard,
    SecureNote,
    Identity,
    Password,
    Tombstone,
    SoftwareLicense,
    BankAccount,
    Database,
    DriverLicense,
    OutdoorLicense,
    Membership,
    Passport,
    Rewards,
    SocialSecurityNumber,
    Router,
    Server,
    Email,
    /// A code this crate does not know, kept verbatim.
    Unknown(String),
}

impl Category {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "001" => Category::Login,
            "002" => Category::CreditCard,
            "003" => Category::SecureNote,
            "004" => Category::Identity,
            "005" => Category::Password,
            "099" => Category::Tombstone,
            "100" => Category::SoftwareLicense,
            "101" => Category::BankAccount,
            "102" => Category::Database,
            "103" => Category::DriverLicense,
            "104" => Category::OutdoorLicense,
            "105" => Category::Membership,
            "106" => Category::Passport,
            "107" => Category::Rewards,
            "108" => Category::SocialSecurityNumber,
            "109" => Category::Router,
            "110" => Category::Server,
            "111" => Category::Email,
            other => Category::Unknown(other.to_string()),
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Category::Login => "001",
            Category::CreditCard => "002",
            Category::SecureNote => "003",
            Category::Identity => "004",
            Category::Password => "005",
            Category::Tombstone => "099",
            Category::SoftwareLicense => "100",
            Category::BankAccount => "101",
            Category::Database => "102",
            Category::DriverLicense => "103",
            Category::OutdoorLicense => "104",
            Category::Membership => "105",
            Category::Passport => "106",
            Category::Rewards => "107",
            Category::SocialSecurityNumber => "108",
            Category::Router => "109",
            Category::Server => "110",
            Category::Email => "111",
            Category::Unknown(code) => code,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One sealed credential record.
///
/// Holds no plaintext; `k`, `o` and `d` are ciphertext as read from disk.
#[derive(Debug, Clone)]
pub struct Item {
    pub uuid: String,
    pub category: Category,
    pub created: i64,
    pub updated: i64,
    /// Last-sync transaction timestamp.
    pub tx: i64,
    /// Folder uuid; lookup only.
    pub folder: Option<String>,
    pub trashed: bool,
    /// Favourite ordering index, when the item is a favourite.
    pub fave: Option<i64>,
    /// Item key pair sealed under the master key pair.
    pub k: Vec<u8>,
    /// Overview, opdata01 under the overview key pair.
    pub o: Vec<u8>,
    /// Detail, opdata01 under the item key pair.
    pub d: Vec<u8>,
}
