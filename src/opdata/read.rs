//! src/opdata/read.rs
//! Zero-copy parsing of the opdata01 layout. Pure structure checks, no crypto.

use crate::aliases::{Iv16, Tag32};
use crate::consts::{
    BLOCK_LEN, MAGIC_LEN, OPDATA01_CIPHERTEXT_OFFSET, OPDATA01_IV_OFFSET, OPDATA01_MAGIC,
    OPDATA01_MIN_LEN, TAG_LEN,
};
use crate::error::{OpvaultError, Result};

/// Borrowed view of an opdata01 blob.
///
/// ```text
/// "opdata01" | declared_len: u64 LE | iv: 16 | ciphertext: N | tag: 32
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    pub declared_len: u64,
    pub iv: Iv16,
    pub ciphertext: &'a [u8],
    pub tag: Tag32,
    /// Everything the tag covers: magic through the last ciphertext byte.
    pub authenticated: &'a [u8],
}

/// Split `sealed` into its fields and validate the layout.
///
/// Fails with [`OpvaultError::Format`] when the blob is too short, has the wrong
/// magic, or declares a length its ciphertext cannot hold. Writers put between
/// 0 and 16 bytes of padding in front of the plaintext, so the ciphertext is
/// block aligned and at most one block longer than the declared length.
pub fn parse_envelope(sealed: &[u8]) -> Result<Envelope<'_>> {
    if sealed.len() < OPDATA01_MIN_LEN {
        return Err(OpvaultError::Format(format!(
            "opdata01 blob is {} bytes, minimum is {OPDATA01_MIN_LEN}",
            sealed.len()
        )));
    }
    if &sealed[..MAGIC_LEN] != OPDATA01_MAGIC {
        return Err(OpvaultError::Format(
            "invalid magic header (expected 'opdata01')".into(),
        ));
    }

    let mut len_bytes = [0u8; 8];
    len_bytes.copy_from_slice(&sealed[MAGIC_LEN..OPDATA01_IV_OFFSET]);
    let declared_len = u64::from_le_bytes(len_bytes);

    let mut iv = [0u8; 16];
    iv.copy_from_slice(&sealed[OPDATA01_IV_OFFSET..OPDATA01_CIPHERTEXT_OFFSET]);

    let tag_start = sealed.len() - TAG_LEN;
    let ciphertext = &sealed[OPDATA01_CIPHERTEXT_OFFSET..tag_start];
    let mut tag = [0u8; 32];
    tag.copy_from_slice(&sealed[tag_start..]);

    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(OpvaultError::Format(format!(
            "ciphertext length {} is not a multiple of {BLOCK_LEN}",
            ciphertext.len()
        )));
    }
    let n = ciphertext.len() as u64;
    if declared_len > n || n - declared_len > BLOCK_LEN as u64 {
        return Err(OpvaultError::Format(format!(
            "declared length {declared_len} does not fit {n} ciphertext bytes"
        )));
    }

    Ok(Envelope {
        declared_len,
        iv,
        ciphertext,
        tag,
        authenticated: &sealed[..tag_start],
    })
}
