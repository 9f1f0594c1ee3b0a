//! src/item/fields.rs
//! Plaintext records parsed from decrypted item JSON.
//!
//! All string content is zeroized when a record is dropped. Field names follow
//! the OPVault JSON keys; unknown keys are ignored.

use crate::error::{OpvaultError, Result};
use crate::secret::SecretBuffer;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Parse decrypted JSON without ever echoing plaintext into the error.
///
/// serde_json messages can quote the offending value, so only the error
/// category and position are kept.
pub(crate) fn parse_plaintext<T: DeserializeOwned>(json: &SecretBuffer, what: &str) -> Result<T> {
    serde_json::from_slice(json.expose_secret()).map_err(|e| {
        OpvaultError::malformed(format!(
            "{what} is not valid JSON ({:?} at line {} column {})",
            e.classify(),
            e.line(),
            e.column()
        ))
    })
}

/// A labelled URL from an overview's `URLs` list.
#[derive(Debug, Default, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Url {
    #[serde(rename = "l", default)]
    pub label: Option<String>,
    #[serde(rename = "u", default)]
    pub url: String,
}

/// Item summary: what a vault list view shows without touching item keys.
#[derive(Debug, Default, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Overview {
    #[serde(default)]
    pub title: Option<String>,
    /// Secondary line shown under the title (usually the username).
    #[serde(default)]
    pub ainfo: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "URLs", default)]
    pub urls: Vec<Url>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Password strength score.
    #[serde(default)]
    pub ps: Option<i64>,
}

impl Overview {
    pub(crate) fn from_plaintext(json: &SecretBuffer) -> Result<Self> {
        parse_plaintext(json, "item overview")
    }
}

/// A login form field (`fields` array of a login item's detail).
#[derive(Default, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct LoginField {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// `"username"` or `"password"` for the fields autofill cares about.
    #[serde(default)]
    pub designation: Option<String>,
}

impl fmt::Debug for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginField")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("designation", &self.designation)
            .finish_non_exhaustive()
    }
}

/// Value of a section field. Text, dates (integers), and composite values
/// such as addresses all appear in real vaults.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum SectionValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Other(serde_json::Value),
}

impl SectionValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SectionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SectionValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl Default for SectionValue {
    fn default() -> Self {
        SectionValue::Other(serde_json::Value::Null)
    }
}

impl Zeroize for SectionValue {
    fn zeroize(&mut self) {
        match self {
            SectionValue::Text(s) => s.zeroize(),
            SectionValue::Integer(n) => n.zeroize(),
            SectionValue::Float(x) => x.zeroize(),
            // serde_json::Value has no in-place wipe; strings inside are
            // cleared one by one.
            SectionValue::Other(value) => zeroize_json(value),
        }
    }
}

fn zeroize_json(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::String(s) => s.zeroize(),
        serde_json::Value::Array(items) => items.iter_mut().for_each(zeroize_json),
        serde_json::Value::Object(map) => map.values_mut().for_each(zeroize_json),
        _ => {}
    }
    *value = serde_json::Value::Null;
}

/// One field of a detail section.
#[derive(Default, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SectionField {
    /// Field kind (`"string"`, `"concealed"`, `"date"`, `"address"`, ...).
    #[serde(default)]
    pub k: Option<String>,
    /// Stable field name.
    #[serde(default)]
    pub n: Option<String>,
    /// Display title.
    #[serde(default)]
    pub t: Option<String>,
    #[serde(default)]
    pub v: SectionValue,
}

impl fmt::Debug for SectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionField")
            .field("k", &self.k)
            .field("n", &self.n)
            .field("t", &self.t)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Section {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<SectionField>,
}

/// Item detail: the sensitive half of an item.
#[derive(Default, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Detail {
    #[serde(default)]
    pub fields: Vec<LoginField>,
    #[serde(rename = "notesPlain", default)]
    pub notes_plain: Option<String>,
    /// Set on password-category items.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Detail {
    pub(crate) fn from_plaintext(json: &SecretBuffer) -> Result<Self> {
        parse_plaintext(json, "item detail")
    }

    fn designated(&self, designation: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.designation.as_deref() == Some(designation))
            .and_then(|f| f.value.as_deref())
    }

    /// Username from the login field designated `username`.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.designated("username")
    }

    /// Password from the top-level `password` key, else the login field
    /// designated `password`.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password
            .as_deref()
            .or_else(|| self.designated("password"))
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes_plain.as_deref()
    }
}

impl fmt::Debug for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detail")
            .field("fields", &self.fields)
            .field("sections", &self.sections)
            .field("has_notes", &self.notes_plain.is_some())
            .field("has_password", &self.password.is_some())
            .finish()
    }
}
