//! Utility functions used across the library.

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used for CBC chaining in both directions. Branch-free over the data.
///
/// # Panics (by contract)
///
/// Panics if any argument is shorter than 16 bytes. All callers pass exact
/// AES blocks.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}
