//! AES-256-CBC with no padding scheme.
//!
//! OPVault does its own padding (random bytes in front of the plaintext), so
//! both directions here only accept block-aligned input and work in place.
//! Expanded round keys are wiped when the cipher drops (`aes` feature `zeroize`).

use crate::aliases::{Iv16, Key32};
use crate::consts::BLOCK_LEN;
use crate::error::{OpvaultError, Result};
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256Dec, Aes256Enc, Block as AesBlock};
use zeroize::Zeroize;

fn check_aligned(len: usize) -> Result<()> {
    if len % BLOCK_LEN != 0 {
        return Err(OpvaultError::Format(format!(
            "ciphertext length {len} is not a multiple of {BLOCK_LEN}"
        )));
    }
    Ok(())
}

/// Decrypt `buffer` in place.
pub fn decrypt_in_place(buffer: &mut [u8], iv: &Iv16, key: &Key32) -> Result<()> {
    check_aligned(buffer.len())?;
    let cipher = Aes256Dec::new_from_slice(key.expose_secret())
        .map_err(|_| OpvaultError::from("AES-256 rejected key length"))?;

    let mut previous: [u8; 16] = *iv;
    let mut current = [0u8; 16];
    for chunk in buffer.chunks_exact_mut(BLOCK_LEN) {
        current.copy_from_slice(chunk);
        let mut block = AesBlock::clone_from_slice(chunk);
        cipher.decrypt_block(&mut block);
        xor_blocks(block.as_slice(), &previous, chunk);
        block.as_mut_slice().zeroize();
        previous = current;
    }
    Ok(())
}

/// Encrypt `buffer` in place.
pub fn encrypt_in_place(buffer: &mut [u8], iv: &Iv16, key: &Key32) -> Result<()> {
    check_aligned(buffer.len())?;
    let cipher = Aes256Enc::new_from_slice(key.expose_secret())
        .map_err(|_| OpvaultError::from("AES-256 rejected key length"))?;

    let mut previous: [u8; 16] = *iv;
    for chunk in buffer.chunks_exact_mut(BLOCK_LEN) {
        let mut mixed = [0u8; 16];
        xor_blocks(chunk, &previous, &mut mixed);
        let mut block = AesBlock::from(mixed);
        cipher.encrypt_block(&mut block);
        chunk.copy_from_slice(block.as_slice());
        previous.copy_from_slice(chunk);
        mixed.zeroize();
    }
    Ok(())
}
