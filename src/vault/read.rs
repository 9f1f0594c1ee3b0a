//! src/vault/read.rs
//! File plumbing: JavaScript wrapper stripping, JSON and base64 decoding.

use crate::error::{OpvaultError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

/// How a vault file wraps its JSON payload.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Wrapper {
    /// `var profile={...};`
    Assignment(&'static str),
    /// `ld({...});`, `loadFolders({...});`
    Call(&'static str),
}

/// Strip the wrapper and return the JSON text inside it.
pub(crate) fn strip_js_wrapper<'a>(text: &'a str, wrapper: Wrapper, file: &str) -> Result<&'a str> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();

    let body = match wrapper {
        Wrapper::Assignment(name) => trimmed
            .strip_prefix("var")
            .map(str::trim_start)
            .and_then(|s| s.strip_prefix(name))
            .map(str::trim_start)
            .and_then(|s| s.strip_prefix('=')),
        Wrapper::Call(name) => trimmed
            .strip_prefix(name)
            .map(str::trim_start)
            .and_then(|s| s.strip_prefix('('))
            .and_then(|s| s.strip_suffix(')')),
    };

    body.map(str::trim)
        .ok_or_else(|| OpvaultError::malformed(format!("{file}: unexpected wrapper, expected {wrapper:?}")))
}

/// Read `path` and parse its wrapped JSON payload.
///
/// Returns `Ok(None)` when the file does not exist.
pub(crate) fn read_wrapped_json<T: DeserializeOwned>(
    path: &Path,
    wrapper: Wrapper,
) -> Result<Option<T>> {
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(OpvaultError::Io(e)),
    };

    let json = strip_js_wrapper(&text, wrapper, &file)?;
    serde_json::from_str(json)
        .map(Some)
        .map_err(|e| OpvaultError::malformed(format!("{file}: {e}")))
}

/// Decode a standard-alphabet base64 field.
pub(crate) fn decode_b64(value: &str, field: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(value.trim())
        .map_err(|_| OpvaultError::malformed(format!("{field} is not valid base64")))
}
