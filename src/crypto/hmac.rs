//! HMAC-SHA256 over one or more byte slices.
//!
//! Verification goes through `Mac::verify_slice`, which compares in constant time.

use crate::aliases::{HmacSha256, Key32, Tag32};
use crate::error::{OpvaultError, Result};
use hmac::Mac;

fn keyed(mac_key: &Key32) -> Result<HmacSha256> {
    <HmacSha256 as Mac>::new_from_slice(mac_key.expose_secret())
        .map_err(|_| OpvaultError::from("HMAC-SHA256 rejected key length"))
}

/// Compute the tag of `parts` concatenated.
pub fn authenticate(mac_key: &Key32, parts: &[&[u8]]) -> Result<Tag32> {
    let mut mac = keyed(mac_key)?;
    for part in parts {
        mac.update(part);
    }
    let mut tag = [0u8; 32];
    tag.copy_from_slice(mac.finalize().into_bytes().as_slice());
    Ok(tag)
}

/// Check `expected` against the tag of `parts` concatenated.
///
/// Returns [`OpvaultError::Integrity`] on mismatch.
pub fn verify(mac_key: &Key32, parts: &[&[u8]], expected: &[u8]) -> Result<()> {
    let mut mac = keyed(mac_key)?;
    for part in parts {
        mac.update(part);
    }
    mac.verify_slice(expected)
        .map_err(|_| OpvaultError::Integrity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_input_matches_joined_input() {
        let key = Key32::new([0x0b; 32]);
        let joined = authenticate(&key, &[b"Hi There"]).unwrap();
        let split = authenticate(&key, &[b"Hi ", b"There"]).unwrap();
        assert_eq!(joined, split);
    }

    #[test]
    fn rfc4231_case_2() {
        // Key "Jefe" zero-padded to 32 bytes is equivalent to the 4-byte key.
        let mut raw = [0u8; 32];
        raw[..4].copy_from_slice(b"Jefe");
        let key = Key32::new(raw);
        let tag = authenticate(&key, &[b"what do ya want for nothing?"]).unwrap();
        assert_eq!(
            hex::encode(tag),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn verify_rejects_flipped_tag() {
        let key = Key32::new([1; 32]);
        let mut tag = authenticate(&key, &[b"payload"]).unwrap();
        verify(&key, &[b"payload"], &tag).unwrap();
        tag[31] ^= 1;
        assert!(matches!(
            verify(&key, &[b"payload"], &tag),
            Err(OpvaultError::Integrity)
        ));
    }
}
