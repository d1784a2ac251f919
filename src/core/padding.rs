// padding.rs
//
// Message padding: splits an arbitrary byte sequence into 512-bit blocks
// with the 0x80 separator and the big-endian 64-bit length trailer.

use crate::core::error::HashError;
use crate::core::word::Word;

/// One 512-bit message block: 16 words, bytes packed big-endian.
pub type Block = [Word; 16];

pub const BLOCK_BYTES: usize = 64;

// Longest tail that still leaves room for the separator byte plus the
// 8-byte length field inside the same block.
const MAX_TAIL: usize = 55;

/// Pad `message` into its sequence of 512-bit blocks.
///
/// Fails only when the message's bit length cannot be represented in the
/// 64-bit length field.
pub fn pad(message: &[u8]) -> Result<Vec<Block>, HashError> {
    let bit_len = (message.len() as u64)
        .checked_mul(8)
        .ok_or(HashError::InputTooLarge(message.len()))?;

    // Every full 64-byte chunk takes one block; the tail takes one more
    // unless the separator + length no longer fit alongside it.
    let tail = message.len() % BLOCK_BYTES;
    let block_count = message.len() / BLOCK_BYTES + if tail > MAX_TAIL { 2 } else { 1 };
    let mut blocks: Vec<Block> = vec![[0; 16]; block_count];

    for (pos, &byte) in message.iter().enumerate() {
        set_byte(&mut blocks, pos, byte);
    }

    // Single set bit immediately after the message; the rest stays zero.
    set_byte(&mut blocks, message.len(), 0x80);

    let last = block_count - 1;
    blocks[last][14] = (bit_len >> 32) as Word;
    blocks[last][15] = bit_len as Word;

    Ok(blocks)
}

// Big-endian placement: byte 0 of a block is the high byte of word 0.
fn set_byte(blocks: &mut [Block], pos: usize, byte: u8) {
    let shift = 24 - 8 * (pos % 4);
    blocks[pos / BLOCK_BYTES][(pos % BLOCK_BYTES) / 4] |= (byte as Word) << shift;
}
